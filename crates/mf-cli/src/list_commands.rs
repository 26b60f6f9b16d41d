use clap::Subcommand;

#[derive(Subcommand)]
pub enum ListCommands {
    /// Missing person reports
    MissingPersons {
        /// Case-insensitive name search
        #[arg(long, default_value = "")]
        query: String,

        /// Status tab: all, active, found or resolved
        #[arg(long, default_value = "all")]
        status: String,
    },

    /// Sighting reports
    Sightings {
        /// Case-insensitive name search
        #[arg(long, default_value = "")]
        query: String,

        /// Status tab: all, pending, verified or dismissed
        #[arg(long, default_value = "all")]
        status: String,
    },
}
