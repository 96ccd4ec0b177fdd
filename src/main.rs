use anyhow::Context;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use quran_claims::config::{AllahMode, Config, PatternStyle};
use quran_claims::report::{self, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;

/// Count the Bismillah words in an Arabic corpus and check the 19-based claims.
#[derive(Debug, Parser)]
#[command(name = "quran-claims", version, about)]
struct Args {
    /// Plain UTF-8 corpus file
    #[arg(env = "QURAN_CLAIMS_INPUT", default_value = "quran-simple.txt")]
    input: PathBuf,

    /// Remove Arabic diacritics before counting
    #[arg(long, default_value_t = true, action = ArgAction::Set, value_name = "BOOL")]
    strip_diacritics: bool,

    /// Remove characters outside the Arabic block, keeping whitespace
    #[arg(long, default_value_t = true, action = ArgAction::Set, value_name = "BOOL")]
    remove_non_arabic: bool,

    /// Fold presentation forms and ligatures (NFKC) before filtering
    #[arg(long)]
    fold_compat_forms: bool,

    /// Which Allah count(s) to compute
    #[arg(long, value_enum, default_value_t = AllahMode::Both)]
    allah_mode: AllahMode,

    /// Pattern family; auto picks root patterns when diacritics are kept
    #[arg(long = "patterns", value_enum, default_value_t = PatternStyle::Auto)]
    pattern_style: PatternStyle,

    /// Print per-pattern match counts to stderr
    #[arg(long)]
    debug: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Config {
            strip_diacritics: args.strip_diacritics,
            remove_non_arabic: args.remove_non_arabic,
            fold_compat_forms: args.fold_compat_forms,
            allah_mode: args.allah_mode,
            pattern_style: args.pattern_style,
            debug: args.debug,
        }
    }
}

fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .init();
}

fn try_main(args: &Args) -> anyhow::Result<()> {
    let config = Config::from(args);
    let analysis = quran_claims::run(&args.input, &config)?;
    let output = report::render(&analysis, args.format).context("failed to render report")?;
    print!("{output}");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    match try_main(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
