//! Command-line interface implementation for vibecode.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for vibecode.
#[derive(Parser, Debug)]
#[command(author, version, about = "Vibecode: collaborative AI development project setup", long_about = None)]
pub struct Args {
    /// Path to the template directory
    #[arg(value_name = "TEMPLATE_DIR")]
    pub template_dir: PathBuf,

    /// Directory where the project is generated, usually the root of a git repository
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Use the built-in configuration instead of prompting
    #[arg(short, long, conflicts_with = "answers")]
    pub defaults: bool,

    /// Read the configuration from a JSON or YAML answers file
    #[arg(short, long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate even when the output directory is not inside a git repository.
    /// Git hooks and the commit template configuration are skipped in that case.
    #[arg(long)]
    pub skip_git_check: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
