use clap::Parser;
use reqwest::Method;

use super::parsers::{parse_header_arg, parse_method, parse_run_count, parse_timeout_ms};
use super::types::{HeaderList, RunCount};

#[derive(Debug, Parser, Clone, Default)]
#[command(
    name = "stressi",
    about = "Simple HTTP stress tester.",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct TesterArgs {
    /// Show the app version.
    #[arg(long, short = 'v')]
    pub version: bool,

    /// Show the app usage and help information.
    #[arg(long, short = 'h')]
    pub help: bool,

    /// The URL to use for each request. Required!
    #[arg(long, short = 'u', value_name = "url")]
    pub url: Option<String>,

    /// The HTTP method to use for each request. Defaults to 'GET'.
    #[arg(long, short = 'm', value_name = "method", value_parser = parse_method)]
    pub method: Option<Method>,

    /// Number of concurrent users to simulate. Defaults to 10.
    #[arg(
        long = "users",
        short = 's',
        value_name = "number",
        allow_negative_numbers = true,
        value_parser = parse_run_count
    )]
    pub users: Option<RunCount>,

    /// Number of repetitions pr. user. Defaults to 10.
    #[arg(
        long = "reps",
        short = 'r',
        value_name = "number",
        allow_negative_numbers = true,
        value_parser = parse_run_count
    )]
    pub repetitions: Option<RunCount>,

    /// Turn on verbose mode, which shows a lot more console output.
    #[arg(long, short = 'b')]
    pub verbose: bool,

    /// Set the user-agent to use.
    #[arg(long = "user-agent", short = 'a', value_name = "string")]
    pub user_agent: Option<String>,

    /// Comma-list of key:value, like so: key1:value1,key2:value2
    #[arg(long, short = 'e', value_name = "string", value_parser = parse_header_arg)]
    pub headers: Option<HeaderList>,

    /// Set the timeout for each request to N ms.
    #[arg(long = "timeout", short = 't', value_name = "number", value_parser = parse_timeout_ms)]
    pub timeout_ms: Option<u64>,

    /// Path to config file (TOML/JSON). Defaults to ./stressi.toml or ./stressi.json if present.
    #[arg(long, env = "STRESSI_CONFIG", value_name = "path")]
    pub config: Option<String>,

    /// Write the final report as JSON to this path.
    #[arg(long = "export-json", value_name = "path")]
    pub export_json: Option<String>,
}
