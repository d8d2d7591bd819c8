pub fn parse() -> CliArgs {
    CliArgs::parse()
}

use clap::Parser;
/// Command Line Arguments
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Command to execute through the shell, mandatory unless a FILE is given.
    ///
    /// The command string is passed to the shell as-is, so pipes and other
    /// shell operators work. Its validity is not checked before running.
    /// JSON key name - COMMAND.
    #[clap(short, long, value_parser, value_name = "COMMAND")]
    pub command: Option<String>,

    /// Run the copies of the command in parallel.
    ///
    /// By default the command is executed sequentially.
    /// JSON key name - PARALLEL; presence of this key in the JSON file turns
    /// parallel mode on, its value is ignored.
    #[clap(short, long)]
    pub parallel: bool,

    /// Number of parallel copies in parallel mode or number of repeated runs
    /// in sequential mode, 8 if not given.
    ///
    /// JSON key name - TIMES.
    #[clap(short = 'n', long = "times", value_parser, value_name = "TIMES")]
    pub times: Option<i64>,

    /// Pause in seconds - between command starts in parallel mode or between
    /// each command run in sequential mode, 5 if not given.
    ///
    /// JSON key name - SECONDS.
    #[clap(
        short = 'w',
        long = "wait",
        value_parser,
        value_name = "SECONDS",
        allow_hyphen_values = true
    )]
    pub wait: Option<i64>,

    /// JSON file with parameters (keys COMMAND, TIMES, SECONDS, PARALLEL,
    /// case-insensitive).
    ///
    /// If the file is given and decodes successfully, its parameters are used
    /// and all command line parameters are ignored.
    #[clap(value_parser, value_name = "FILE")]
    pub file: Option<std::path::PathBuf>,
}

impl CliArgs {
    /// Parameters taken from the command line only, before the file merge.
    pub fn to_partial(&self) -> crate::config::PartialParams {
        crate::config::PartialParams {
            command: self.command.clone(),
            parallel: self.parallel,
            runs: self.times,
            pause: self.wait,
        }
    }
}

/// One-line usage text for configuration error diagnostics.
pub fn usage() -> String {
    use clap::CommandFactory;
    CliArgs::command().render_usage()
}
