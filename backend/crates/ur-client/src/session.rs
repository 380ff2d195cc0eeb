//! Line-oriented operator session over the list controller.
//!
//! Each line is one field value followed by Enter. The name prompt comes
//! first, then the email prompt; Enter on either forwards the confirm key to
//! the controller, which only submits once both are filled. A blank line
//! keeps the field's current value.
//!
//! Commands at the name prompt:
//! - `:rm <id>` press the remove affordance of a list item
//! - `:q` quit

use crate::{InputField, Key, ListController, SubmitOutcome};

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const NAME_PROMPT: &str = "name> ";
const EMAIL_PROMPT: &str = "email> ";

/// Drive `controller` from `reader` until EOF or `:q`, writing views to `out`.
pub async fn run<R, W>(controller: &mut ListController, reader: R, out: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    controller.mount().await;
    write!(out, "{}", controller.render())?;

    let mut lines = reader.lines();
    let mut field = InputField::Name;

    loop {
        write!(out, "{}", prompt(field))?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        if field == InputField::Name {
            match line.trim() {
                ":q" => break,
                cmd if cmd.starts_with(":rm") => {
                    remove(controller, cmd, out)?;
                    continue;
                }
                _ => {}
            }
        }

        // Blank line keeps what is already there, so a failed submit can be retried
        if !line.trim().is_empty() {
            controller.set_input(field, &line);
        }

        match controller.on_key(field, Key::Enter).await {
            Some(SubmitOutcome::Created(user)) => {
                writeln!(out, "Added {} <{}>", user.name, user.email)?;
                write!(out, "{}", controller.render())?;
                field = InputField::Name;
            }
            Some(SubmitOutcome::Failed(message)) => {
                writeln!(out, "Not added: {}", message)?;
                field = InputField::Name;
            }
            Some(SubmitOutcome::Skipped) | None => {
                field = next_field(field);
            }
        }
    }

    Ok(())
}

fn prompt(field: InputField) -> &'static str {
    match field {
        InputField::Name => NAME_PROMPT,
        InputField::Email => EMAIL_PROMPT,
    }
}

fn next_field(field: InputField) -> InputField {
    match field {
        InputField::Name => InputField::Email,
        InputField::Email => InputField::Name,
    }
}

fn remove<W: Write>(controller: &ListController, cmd: &str, out: &mut W) -> std::io::Result<()> {
    match cmd.trim_start_matches(":rm").trim().parse() {
        Ok(id) => {
            if controller.remove_user(id).is_err() {
                writeln!(out, "Removing users is not supported (user {})", id)?;
            }
        }
        Err(_) => writeln!(out, "usage: :rm <id>")?,
    }
    Ok(())
}
