use crate::list_commands::ListCommands;
use crate::report_commands::ReportCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// File a missing person report or a sighting
    Report {
        #[command(subcommand)]
        action: ReportCommands,
    },

    /// Create an account
    Register {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        confirm_password: String,

        /// Agree to the terms and conditions
        #[arg(long)]
        accept_terms: bool,
    },

    /// Sign in and remember the session
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Sign out and forget the session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Show the navigation menu for the current session
    Menu {
        /// Unread notification count for the badge
        #[arg(long, default_value_t = 0)]
        notifications: u32,
    },

    /// Browse missing persons or sightings
    List {
        #[command(subcommand)]
        action: ListCommands,
    },

    /// List the mounted routes, or resolve a path against them
    Routes {
        /// Path to resolve (unknown paths fall back to Home)
        #[arg(long)]
        resolve: Option<String>,
    },

    /// Render a component preview (requires dev routes)
    Preview {
        /// Preview path, e.g. /dev/navbar
        #[arg(default_value = "/dev")]
        path: String,
    },

    /// Check the gateway connection and show the active configuration
    Status,
}
