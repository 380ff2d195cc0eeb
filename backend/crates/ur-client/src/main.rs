//! ur - user registry client
//!
//! # Examples
//!
//! ```bash
//! # Show all users
//! ur list
//!
//! # Register a user
//! ur add --name Ada --email ada@x.com
//!
//! # Type users in one after another
//! ur interactive --server http://localhost:8080
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use ur_client::{
    ConsoleNotifier, ControllerState, InputField, ListController, QueryCacheConfig,
    RegistryApi, RegistryClient, SubmitOutcome, logger, session, user_list_cache,
};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logger::initialize(*cli.log_level) {
        eprintln!("Error initializing logger: {}", e);
        return ExitCode::FAILURE;
    }

    let api: Arc<dyn RegistryApi> = Arc::new(RegistryClient::new(&cli.server));
    let cache = user_list_cache(
        Arc::clone(&api),
        QueryCacheConfig {
            refetch_on_invalidate: true,
        },
    );
    let mut controller = ListController::new(api, cache, Arc::new(ConsoleNotifier));

    match cli.command {
        Commands::List => {
            let state = controller.mount().await;
            print!("{}", controller.render());
            exit_code(state == ControllerState::Ready)
        }

        Commands::Add { name, email } => {
            controller.mount().await;
            controller.set_input(InputField::Name, &name);
            controller.set_input(InputField::Email, &email);

            match controller.submit_new_user().await {
                SubmitOutcome::Created(_) => {
                    print!("{}", controller.render());
                    ExitCode::SUCCESS
                }
                SubmitOutcome::Failed(message) => {
                    eprintln!("Error: {}", message);
                    ExitCode::FAILURE
                }
                SubmitOutcome::Skipped => {
                    eprintln!("Error: name and email must not be blank");
                    ExitCode::FAILURE
                }
            }
        }

        Commands::Interactive => {
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            match session::run(&mut controller, stdin, &mut stdout).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
