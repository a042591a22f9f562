//! Typecraft CLI
//!
//! Usage:
//!   typecraft [OPTIONS]
//!
//! Options:
//!   -t, --theme <FILE>    Theme file (TOML format)
//!   -o, --output <FILE>   Write to a file instead of stdout
//!       --fragment        Emit the page body without the document shell
//!       --compact         Disable pretty printing
//!       --resolve <KIND>  Print the class list for one component kind
//!   -v, --verbose         Increase log verbosity
//!   -h, --help            Print help

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use typecraft::{
    render_document, render_with_config, showcase, HtmlConfig, Kind, RenderConfig, Theme,
    ThemeError,
};

#[derive(Parser)]
#[command(name = "typecraft")]
#[command(about = "Render the typography showcase as utility-class HTML")]
struct Cli {
    /// Theme file with document settings and variant overrides (TOML format)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit only the page body, without html/head/body
    #[arg(long)]
    fragment: bool,

    /// Disable pretty printing
    #[arg(long)]
    compact: bool,

    /// Print the class list for a component kind and exit
    #[arg(long, value_name = "KIND")]
    resolve: Option<Kind>,

    /// Variant name used with --resolve
    #[arg(long, requires = "resolve")]
    variant: Option<String>,

    /// Extra classes merged last with --resolve
    #[arg(long, requires = "resolve")]
    class: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let theme = match &cli.theme {
        Some(path) => match load_theme(path) {
            Ok(theme) => theme,
            Err(message) => {
                eprintln!("Error loading theme '{}': {}", path.display(), message);
                return ExitCode::FAILURE;
            }
        },
        None => Theme::default(),
    };

    let output = match cli.resolve {
        Some(kind) => theme
            .tables
            .resolve(kind, cli.variant.as_deref(), cli.class.as_deref()),
        None => {
            let config = RenderConfig::new()
                .with_theme(theme)
                .with_html(HtmlConfig::new().with_pretty_print(!cli.compact));
            if cli.fragment {
                render_with_config(showcase::page(), &config)
            } else {
                render_document(showcase::page(), &config)
            }
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, format!("{}\n", output)) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
            tracing::info!(path = %path.display(), bytes = output.len(), "wrote output");
        }
        None => println!("{}", output),
    }

    ExitCode::SUCCESS
}

/// Load a theme, formatting TOML errors with source context
fn load_theme(path: &Path) -> Result<Theme, String> {
    match Theme::from_file(path) {
        Ok(theme) => Ok(theme),
        Err(ThemeError::Io(e)) => Err(e.to_string()),
        Err(e) => {
            let source = fs::read_to_string(path).unwrap_or_default();
            Err(format!("\n{}", e.format(&source, &path.display().to_string())))
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
