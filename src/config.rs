//! This file resolves command line and JSON file parameters into one run configuration.

use thiserror::Error;

pub const DEFAULT_RUNS: i64 = 8;
pub const DEFAULT_PAUSE: i64 = 5;

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Mode {
    Sequential,
    Parallel,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Sequential => write!(f, "sequential"),
            Mode::Parallel => write!(f, "parallel"),
        }
    }
}

/// Validated configuration, immutable once resolved.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub command: String,
    pub mode: Mode,
    pub runs: usize,
    pub pause_secs: u64,
}

/// Parameters from one source (command line or file), before defaults apply.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PartialParams {
    pub command: Option<String>,
    pub parallel: bool,
    pub runs: Option<i64>,
    pub pause: Option<i64>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File '{0}' not found.")]
    FileNotFound(String),
    #[error("Error while reading file '{path}':\n{source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Error while parsing JSON data from file '{path}':\n{source}")]
    FileParse {
        path: String,
        source: serde_json::Error,
    },
    #[error("JSON data from file '{0}' is not an object of parameters.")]
    FileNotAnObject(String),
    #[error("Value of {0} does not look like a suitable integer.")]
    NotAnInteger(&'static str),
    #[error("Value of COMMAND is not a string.")]
    CommandNotAString,
    #[error("Command to run is not provided.")]
    NoCommand,
    #[error("Values of -n (TIMES) and/or -w (SECONDS) parameters are out of range.")]
    OutOfRange,
}

/// Resolve the final configuration from parsed command line arguments.
///
/// If a filename was given, the file parameters fully replace the command
/// line ones. A named file that is missing or undecodable is fatal, there is
/// no fallback to the command line values.
pub fn resolve(cli_args: &crate::cli_args::CliArgs) -> Result<RunConfig, ConfigError> {
    let partial = match &cli_args.file {
        Some(path) => parse_file(path)?,
        None => cli_args.to_partial(),
    };
    merge(partial)
}

/// Apply defaults to one set of partial parameters and validate the result.
pub fn merge(partial: PartialParams) -> Result<RunConfig, ConfigError> {
    let command = partial.command.unwrap_or_default();
    if command.is_empty() {
        return Err(ConfigError::NoCommand);
    }
    let runs = partial.runs.unwrap_or(DEFAULT_RUNS);
    let pause = partial.pause.unwrap_or(DEFAULT_PAUSE);
    if runs < 1 || pause < 0 {
        return Err(ConfigError::OutOfRange);
    }
    Ok(RunConfig {
        command,
        mode: if partial.parallel {
            Mode::Parallel
        } else {
            Mode::Sequential
        },
        runs: runs as usize,
        pause_secs: pause as u64,
    })
}

pub fn parse_file(path: &std::path::Path) -> Result<PartialParams, ConfigError> {
    let name = path.display().to_string();
    if !path.is_file() {
        return Err(ConfigError::FileNotFound(name));
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: name.clone(),
        source,
    })?;
    parse_json(&text).map_err(|err| match err {
        JsonError::Parse(source) => ConfigError::FileParse { path: name, source },
        JsonError::NotAnObject => ConfigError::FileNotAnObject(name),
        JsonError::Config(err) => err,
    })
}

enum JsonError {
    Parse(serde_json::Error),
    NotAnObject,
    Config(ConfigError),
}

impl From<ConfigError> for JsonError {
    fn from(err: ConfigError) -> Self {
        JsonError::Config(err)
    }
}

/// Decode one JSON object of parameters. Key matching is case-insensitive
/// and unrecognized keys are ignored.
fn parse_json(text: &str) -> Result<PartialParams, JsonError> {
    let json: serde_json::Value = serde_json::from_str(text).map_err(JsonError::Parse)?;
    let object = json.as_object().ok_or(JsonError::NotAnObject)?;
    let mut partial = PartialParams::default();
    for (key, value) in object {
        if key.eq_ignore_ascii_case("COMMAND") {
            partial.command = Some(
                value
                    .as_str()
                    .ok_or(ConfigError::CommandNotAString)?
                    .to_string(),
            );
        } else if key.eq_ignore_ascii_case("TIMES") {
            partial.runs = Some(integer_value("TIMES", value)?);
        } else if key.eq_ignore_ascii_case("SECONDS") {
            partial.pause = Some(integer_value("SECONDS", value)?);
        } else if key.eq_ignore_ascii_case("PARALLEL") {
            partial.parallel = true;
        }
    }
    Ok(partial)
}

fn integer_value(key: &'static str, value: &serde_json::Value) -> Result<i64, ConfigError> {
    match value {
        serde_json::Value::Number(num) => num.as_i64().ok_or(ConfigError::NotAnInteger(key)),
        serde_json::Value::String(str) => str
            .trim()
            .parse()
            .map_err(|_| ConfigError::NotAnInteger(key)),
        _ => Err(ConfigError::NotAnInteger(key)),
    }
}
