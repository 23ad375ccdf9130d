use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "apple_a_day", version, about = "Apple a Day")]
pub struct CliArgs {
    /// Print today's apple and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Read apples from a JSON file instead of Sanity
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,

    /// Use the built-in sample apples
    #[arg(long)]
    pub sample: bool,

    /// Month shown by the calendar, as YYYY-MM
    #[arg(long, value_name = "YYYY-MM")]
    pub month: Option<String>,

    /// Pretend today is this date, as YYYY-MM-DD
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<String>,

    /// Where the UI writes its log
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    /// Flags win over `.env` because dotenv never overwrites set variables.
    pub fn apply_env_overrides(&self) {
        if let Some(path) = &self.file {
            std::env::set_var("APPLE_FILE", path);
        }
        if self.sample {
            std::env::set_var("APPLE_SAMPLE", "1");
        }
        if let Some(month) = &self.month {
            std::env::set_var("CALENDAR_MONTH", month);
        }
        if let Some(today) = &self.today {
            std::env::set_var("APPLE_TODAY", today);
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("APPLE_LOG_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub const fn wants_headless(&self) -> bool {
        self.headless || self.json
    }
}
