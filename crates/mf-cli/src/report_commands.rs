use clap::Subcommand;

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Report a missing person
    Missing {
        #[arg(long)]
        full_name: String,

        #[arg(long)]
        age: String,

        #[arg(long)]
        gender: String,

        /// Date last seen (YYYY-MM-DD)
        #[arg(long)]
        last_seen_date: String,

        /// Time last seen (HH:MM)
        #[arg(long)]
        last_seen_time: String,

        #[arg(long)]
        last_seen_location: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        contact_info: String,

        /// Photo file to attach
        #[arg(long)]
        photo: Option<String>,
    },

    /// Report a sighting
    Sighting {
        /// Name of the person, if known
        #[arg(long)]
        person_name: Option<String>,

        /// Date of the sighting (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Time of the sighting (HH:MM)
        #[arg(long)]
        time: String,

        #[arg(long)]
        location: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        contact_info: String,

        /// high, medium or low
        #[arg(long, default_value = "medium")]
        confidence: String,

        /// Photo file to attach
        #[arg(long)]
        photo: Option<String>,
    },
}
