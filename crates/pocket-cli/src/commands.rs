use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Register this device's user and log in
    Signup {
        /// Display name
        #[arg(long)]
        name: String,
        /// Email address (case-insensitive)
        #[arg(long)]
        email: String,
        /// Password
        #[arg(long)]
        password: String,
    },
    /// Log in as the registered user
    Login {
        /// Email address (case-insensitive)
        #[arg(long)]
        email: String,
        /// Password
        #[arg(long)]
        password: String,
    },
    /// End the current session (the registration is kept)
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Show whether a session is active
    Status,
}
