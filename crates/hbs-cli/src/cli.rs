use clap::Parser;

#[derive(Parser)]
#[command(
    name = "hbs",
    about = "Hotel Booking System: interactive reservation ledger",
    version,
)]
pub struct Cli {
    /// Maximum number of bookings; prompts at startup when omitted
    #[arg(short, long)]
    pub capacity: Option<usize>,

    /// Refuse new bookings whose id is already in the ledger
    #[arg(long)]
    pub reject_duplicate_ids: bool,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["hbs"]).unwrap();
        assert_eq!(cli.capacity, None);
        assert!(!cli.reject_duplicate_ids);
        assert!(!cli.verbose);
        assert!(!cli.no_color);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn parse_capacity() {
        let cli = Cli::try_parse_from(["hbs", "--capacity", "25"]).unwrap();
        assert_eq!(cli.capacity, Some(25));
        let cli = Cli::try_parse_from(["hbs", "-c", "3"]).unwrap();
        assert_eq!(cli.capacity, Some(3));
    }

    #[test]
    fn parse_rejects_negative_capacity() {
        assert!(Cli::try_parse_from(["hbs", "--capacity", "-1"]).is_err());
    }

    #[test]
    fn parse_reject_duplicate_ids() {
        let cli = Cli::try_parse_from(["hbs", "--reject-duplicate-ids"]).unwrap();
        assert!(cli.reject_duplicate_ids);
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["hbs", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["hbs", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn parse_unknown_format_fails() {
        assert!(Cli::try_parse_from(["hbs", "--format", "xml"]).is_err());
    }
}
