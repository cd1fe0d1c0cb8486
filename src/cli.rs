use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::ui::counter::CounterIntent;

#[derive(Debug, Parser)]
#[command(
    name = "counter-app",
    version,
    about = "A terminal counter with Increment and Reset buttons"
)]
pub struct Cli {
    /// Config file (default: <config_dir>/counter-app/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run without a terminal UI and print the resulting view
    #[arg(long)]
    pub headless: bool,

    /// Actions to apply in headless mode: increment, reset (comma separated)
    #[arg(
        short = 'a',
        long = "action",
        value_name = "ACTION",
        value_delimiter = ',',
        requires = "headless"
    )]
    pub actions: Vec<CounterIntent>,

    /// Headless output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, requires = "headless")]
    pub format: OutputFormat,

    /// Print every rendered frame instead of only the last one
    #[arg(long, requires = "headless")]
    pub frames: bool,

    /// Log filter override, e.g. "debug" or "counter_app=trace"
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_comma_separated_actions() {
        let cli = Cli::try_parse_from(["counter-app", "--headless", "-a", "inc,inc,reset"]).unwrap();
        assert_eq!(
            cli.actions,
            vec![
                CounterIntent::Increment,
                CounterIntent::Increment,
                CounterIntent::Reset
            ]
        );
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn headless_options_require_headless() {
        assert!(Cli::try_parse_from(["counter-app", "-a", "increment"]).is_err());
        assert!(Cli::try_parse_from(["counter-app", "--frames"]).is_err());
        assert!(Cli::try_parse_from(["counter-app", "--format", "json"]).is_err());
        assert!(Cli::try_parse_from(["counter-app", "--headless", "--format", "json"]).is_ok());
    }

    #[test]
    fn interactive_run_takes_no_headless_options() {
        let cli = Cli::try_parse_from(["counter-app"]).unwrap();
        assert!(!cli.headless);
        assert!(cli.actions.is_empty());
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert!(Cli::try_parse_from(["counter-app", "--headless", "-a", "jump"]).is_err());
    }
}
