use std::ffi::OsString;
use std::path::Path;

use clap::{CommandFactory, FromArgMatches};

use crate::app::{self, run_local};
use crate::args::{DEFAULT_CONFIG_FILES, TesterArgs};
use crate::config::{apply_config, load_config, resolve_run_config};
use crate::error::AppResult;

pub(crate) fn run() -> AppResult<()> {
    let Some(mut args) = parse_args()? else {
        return Ok(());
    };

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, config)?;
    }

    crate::logger::init_logging(args.verbose);

    let config = resolve_run_config(&args)?;
    tracing::debug!("Resolved run config: {:?}", config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        run_local(config, args.export_json.as_deref())
            .await
            .map(drop)
    })
}

/// Parses the command line. Returns `None` once version or help has been
/// printed and there is nothing left to run.
fn parse_args() -> AppResult<Option<TesterArgs>> {
    let mut cmd = TesterArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        print_help(&mut cmd)?;
        return Ok(None);
    }

    let matches = cmd.clone().get_matches_from(raw_args);
    let args = TesterArgs::from_arg_matches(&matches)?;

    if args.version {
        println!("Version {}", env!("CARGO_PKG_VERSION"));
        return Ok(None);
    }
    if args.help {
        print_help(&mut cmd)?;
        return Ok(None);
    }

    Ok(Some(args))
}

fn print_help(cmd: &mut clap::Command) -> AppResult<()> {
    cmd.print_help()?;
    app::print_help_notes();
    Ok(())
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !has_default_config()
}

fn has_default_config() -> bool {
    DEFAULT_CONFIG_FILES
        .iter()
        .any(|path| Path::new(path).exists())
}
