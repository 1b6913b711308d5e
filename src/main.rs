//! Entry point of the `t9n` command line tool.

use std::io::Write as _;
use std::path::{
    Path,
    PathBuf,
};
use std::process::ExitCode;

use clap::{
    Parser,
    Subcommand,
};
use t9n::Error;
use t9n::check::{
    check_folder,
    format_report,
};
use t9n::commands::{
    export_workbook,
    import_workbook,
    typedefs_from_file,
};
use t9n::config::ConfigManager;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "t9n", version, about = "Tools to keep JSON translation files in shape", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Create TypeScript declarations of all keys in a meta.json
    Typedefs {
        /// Reference dictionary
        input: PathBuf,

        /// Declaration file to write; printed to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create translation.xlsx from a folder with meta.json and <language>.json files
    Export {
        /// Locale folder
        input: PathBuf,

        /// Directory for translation.xlsx
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Create <language>.json files from a translation.xlsx
    Import {
        /// Workbook to import
        input: PathBuf,

        /// Directory for the locale files
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Report the coverage of every <language>.json against meta.json
    Check {
        /// Locale folder
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// `info` by default, `debug` for this crate with `--verbose`; `RUST_LOG` wins.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "t9n=debug,info" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Runs one subcommand with the settings of the working directory.
fn run(command: Command) -> Result<(), Error> {
    let cwd = std::env::current_dir().map_err(|source| Error::io(".", source))?;
    let mut config = ConfigManager::new();
    config.load_settings(Some(cwd))?;

    match command {
        Command::Typedefs { input, output } => {
            let types = typedefs_from_file(&input, &config.get_settings().key_separator)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, types).map_err(|source| Error::io(&path, source))?;
                    tracing::info!(path = %path.display(), "Type definitions written");
                }
                None => print_stdout(&types)?,
            }
        }
        Command::Export { input, output } => {
            config.persist_defaults()?;
            let today = chrono::Local::now().date_naive();
            export_workbook(&input, &output, config.get_settings(), today)?;
        }
        Command::Import { input, output } => {
            config.persist_defaults()?;
            import_workbook(&input, &output, config.get_settings())?;
        }
        Command::Check { input } => {
            let results = check_folder(&input, config.get_settings())?;
            print_stdout(&format_report(&results))?;
        }
    }

    Ok(())
}

/// Writes `text` to stdout, adding a newline when it has none.
fn print_stdout(text: &str) -> Result<(), Error> {
    let mut stdout = std::io::stdout().lock();
    let result = if text.ends_with('\n') { stdout.write_all(text.as_bytes()) } else { writeln!(stdout, "{text}") };
    result.map_err(|source| Error::io(Path::new("<stdout>"), source))
}
