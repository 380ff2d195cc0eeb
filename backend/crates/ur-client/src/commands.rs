use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show all registered users
    List,

    /// Register a new user
    Add {
        /// Display name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,
    },

    /// Line-oriented session: name, then email, Enter submits
    Interactive,
}
