//! CLI for generating passwords and digesting them.
//!
//! ## Usage
//!
//! ```bash
//! # Walk through the sample user (also the default with no subcommand)
//! cred demo
//!
//! # Random string of 12 distinct alphanumerics
//! cred password --length 12
//!
//! # Digest a password
//! cred hash "secret"
//! cred hash --algorithm sha512 "secret"
//! echo "secret" | cred hash -
//!
//! # Build a user, generate a password and print everything
//! cred user Ada Lovelace --length 16 --json
//!
//! # Generate shell completions
//! source <(COMPLETE=bash cred)
//! ```

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser, Subcommand, ValueEnum, ValueHint};
use clap_complete::Shell;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use credential::{
    CredentialConfig, CredentialError, HashAlgorithm, User, generate_hash, generate_random_string,
    hex_digest, resolve_algorithm,
};

/// Generate random passwords and hex digests for sample users
#[derive(Parser)]
#[command(name = "cred", version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// TOML file with default lengths, algorithm and email domain
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Walk through the sample user Jim Duncan (default)
    Demo,

    /// Print a random string of distinct alphanumeric characters
    Password {
        /// Number of characters (at most 62)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Print the hex digest of a password
    Hash {
        /// Digest algorithm (see `cred algorithms`)
        #[arg(short, long, value_name = "ALGO")]
        algorithm: Option<String>,

        /// Password to digest; "-" or piped input reads stdin
        #[arg(value_name = "PASSWORD")]
        password: Option<String>,
    },

    /// Create a user, generate a password and print the result
    User {
        first: String,
        last: String,

        /// Replace the name with "First Last" before generating
        #[arg(long, value_name = "NAME")]
        full_name: Option<String>,

        /// Password length (at most 62)
        #[arg(short, long)]
        length: Option<usize>,

        /// Digest algorithm (see `cred algorithms`)
        #[arg(short, long, value_name = "ALGO")]
        algorithm: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available digest algorithms
    Algorithms,
}

const AFTER_HELP: &str = "\
SHELL COMPLETIONS:
  Enable tab completions by adding one line to your shell config:

  Bash (~/.bashrc):
    source <(COMPLETE=bash cred)

  Zsh (~/.zshrc):
    source <(COMPLETE=zsh cred)

  Fish (~/.config/fish/config.fish):
    COMPLETE=fish cred | source

EXAMPLES:
  cred                               # Sample walkthrough
  cred password -l 20                # 20 distinct alphanumerics
  cred hash \"abc\"                    # sha256 digest
  cred hash -a md5 \"abc\"             # md5 digest
  echo \"abc\" | cred hash -           # Password from stdin
  cred user Ada Lovelace --json      # Full user report
";

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error("{0}")]
    Input(String),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct UserReport<'a> {
    full_name: String,
    email: String,
    password: &'a str,
    algorithm: HashAlgorithm,
    digest: String,
}

fn main() {
    // Check for shell completion generation before parsing args
    if let Ok(shell_name) = std::env::var("COMPLETE") {
        generate_completions(&shell_name);
        return;
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match cli.config {
        Some(ref path) => CredentialConfig::load(path)?,
        None => CredentialConfig::default(),
    };
    debug!(?config, "loaded configuration");

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => run_demo(&config),
        Command::Password { length } => {
            let length = length.unwrap_or(config.random_string_length);
            println!("{}", generate_random_string(length)?);
            Ok(())
        }
        Command::Hash {
            algorithm,
            password,
        } => {
            let password = get_password(password.as_deref())?;
            println!("{}", digest(&config, &password, algorithm.as_deref())?);
            Ok(())
        }
        Command::User {
            first,
            last,
            full_name,
            length,
            algorithm,
            json,
        } => run_user(&config, &first, &last, full_name.as_deref(), length, algorithm.as_deref(), json),
        Command::Algorithms => {
            for name in HashAlgorithm::available() {
                println!("{name}");
            }
            Ok(())
        }
    }
}

/// The sample walkthrough: Jim Duncan is renamed and given a password.
fn run_demo(config: &CredentialConfig) -> Result<(), CliError> {
    let mut user = User::with_config("Jim", "Duncan", config)?;

    println!("Default settings: Jim Duncan");
    println!("User: {}", user.full_name());
    println!("Password: {}", user.password());
    println!("Email: {}", user.email());
    println!();

    println!("Set new name: Frank Miller");
    user.set_full_name("Frank Miller")?;
    println!("User: {}", user.full_name());
    println!("Email: {}", user.email());

    println!("\nGenerate password:");
    user.generate_password(20)?;
    println!("User: {}", user.full_name());
    println!("Email: {}", user.email());
    println!("Password: {}", user.password());
    println!("Print hash: {}", user.generate_hash(HashAlgorithm::Sha256));

    Ok(())
}

fn run_user(
    config: &CredentialConfig,
    first: &str,
    last: &str,
    full_name: Option<&str>,
    length: Option<usize>,
    algorithm: Option<&str>,
    json: bool,
) -> Result<(), CliError> {
    let algorithm = match algorithm {
        Some(name) => resolve_algorithm(name)?,
        None => config.hash_algorithm,
    };

    let mut user = User::with_config(first, last, config)?;
    if let Some(name) = full_name {
        user.set_full_name(name)?;
    }
    user.generate_password(length.unwrap_or(config.password_length))?;

    let report = UserReport {
        full_name: user.full_name(),
        email: user.email(),
        password: user.password(),
        algorithm,
        digest: user.generate_hash(algorithm),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("User: {}", report.full_name);
        println!("Email: {}", report.email);
        println!("Password: {}", report.password);
        println!("Hash ({}): {}", report.algorithm, report.digest);
    }

    Ok(())
}

fn digest(
    config: &CredentialConfig,
    password: &str,
    algorithm: Option<&str>,
) -> Result<String, CliError> {
    Ok(match algorithm {
        Some(name) => generate_hash(password, name)?,
        None => hex_digest(config.hash_algorithm, password),
    })
}

/// Get the password from the positional arg or stdin.
fn get_password(arg: Option<&str>) -> Result<String, CliError> {
    match arg {
        Some("-") => read_from_stdin(),
        Some(password) => Ok(password.to_string()),
        None => {
            // No password provided - check if stdin has data
            if !io::stdin().is_terminal() {
                read_from_stdin()
            } else {
                Err(CliError::Input(
                    "No password provided. Use a positional argument or pipe to stdin.".into(),
                ))
            }
        }
    }
}

/// Read the whole of stdin as the password, minus one trailing line ending.
fn read_from_stdin() -> Result<String, CliError> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .map_err(|e| CliError::Input(format!("Failed to read from stdin: {e}")))?;

    let password = content
        .strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(&content);

    if password.is_empty() {
        return Err(CliError::Input("Empty input from stdin".into()));
    }

    Ok(password.to_string())
}

fn init_tracing(verbose: u8) {
    // RUST_LOG wins; otherwise -v flags raise the level from WARN
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,credential=info".to_string(),
            2 => "info,credential=debug,cred=debug".to_string(),
            _ => "debug,credential=trace,cred=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_file(verbose >= 3)
                .with_line_number(verbose >= 3)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}

/// Write a completion script for `shell_name` to stdout, exiting 1 on an unknown shell.
fn generate_completions(shell_name: &str) {
    match shell_name.to_lowercase().parse::<Shell>() {
        Ok(shell) => {
            clap_complete::generate(shell, &mut Cli::command(), "cred", &mut io::stdout());
        }
        Err(_) => {
            let supported: Vec<String> = Shell::value_variants()
                .iter()
                .map(|shell| shell.to_string())
                .collect();
            eprintln!(
                "Unknown shell: {shell_name}. Supported: {}",
                supported.join(", ")
            );
            std::process::exit(1);
        }
    }
}
