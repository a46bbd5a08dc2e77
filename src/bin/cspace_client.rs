//! Command-line front end for the CollectionSpace scripting client.
//!
//! Connection settings come from the `[connect]` section of the webapp
//! configuration file. Logging goes to stderr and is controlled with
//! `RUST_LOG` (default `warn`).

use clap::{Parser, Subcommand};
use cspace_client::config::{load_config_from_dir, ConnectionSettings};
use cspace_client::executor::{CspaceClient, ExecutionConfig};
use cspace_client::models::PostResponse;
use cspace_client::payload::RelationPayload;
use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cspace-client")]
#[command(about = "Authenticated GET/POST/PUT calls against CollectionSpace services")]
#[command(version)]
struct Cli {
    /// Webapp whose <webapp>.cfg holds the connection settings
    #[arg(short, long, global = true, default_value = "default")]
    webapp: String,

    /// Directory containing the webapp configuration files
    #[arg(short, long, global = true, default_value = ".")]
    dir: PathBuf,

    /// Request timeout in seconds (no timeout if omitted)
    #[arg(short, long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check that the webapp configuration is valid and print its logo
    CheckConfig {
        /// Webapp whose <webapp>.cfg should be checked
        #[arg(value_name = "WEBAPP")]
        name: String,
    },

    /// GET a service URI and print the body
    Get {
        /// Service-relative URI, e.g. "collectionobjects?pgSz=10"
        uri: String,
    },

    /// POST an XML file to a service URI
    Post {
        uri: String,
        file: PathBuf,
    },

    /// PUT an XML file to a service URI
    Put {
        uri: String,
        file: PathBuf,
    },

    /// Create an "affects" relation between two records
    Relate {
        #[arg(long)]
        subject_csid: String,
        #[arg(long)]
        subject_type: String,
        #[arg(long)]
        object_csid: String,
        #[arg(long)]
        object_type: String,

        /// Print the payload instead of sending it
        #[arg(long)]
        print: bool,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    match run(cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let execution = ExecutionConfig {
        timeout_secs: cli.timeout,
    };

    match cli.command {
        Command::CheckConfig { name } => {
            let config = load_config_from_dir(&cli.dir, &name)?;
            writeln!(out, "{}", config.get("info", "logo").unwrap_or_default())?;
        }
        Command::Get { uri } => {
            let client = connect(&cli.dir, &cli.webapp, &execution)?;
            let response = client.get(&uri)?;
            eprintln!("{} -> {}", response.url, response.status);
            match response.body {
                Some(body) => writeln!(out, "{}", body)?,
                None => return Err(format!("GET {} failed: {}", uri, response.status).into()),
            }
        }
        Command::Post { uri, file } => {
            let client = connect(&cli.dir, &cli.webapp, &execution)?;
            let payload = fs::read(&file)?;
            print_write(out, &client.post(&uri, payload)?)?;
        }
        Command::Put { uri, file } => {
            let client = connect(&cli.dir, &cli.webapp, &execution)?;
            let payload = fs::read(&file)?;
            print_write(out, &client.put(&uri, payload)?)?;
        }
        Command::Relate {
            subject_csid,
            subject_type,
            object_csid,
            object_type,
            print,
        } => {
            let payload =
                RelationPayload::new(object_csid, object_type, subject_csid, subject_type).to_xml();
            if print {
                write!(out, "{}", payload)?;
            } else {
                let client = connect(&cli.dir, &cli.webapp, &execution)?;
                print_write(out, &client.post("relations", payload)?)?;
            }
        }
    }

    Ok(())
}

fn connect(
    dir: &Path,
    webapp: &str,
    execution: &ExecutionConfig,
) -> Result<CspaceClient, Box<dyn Error>> {
    let config = load_config_from_dir(dir, webapp)?;
    let settings = ConnectionSettings::from_config(&config)?;
    Ok(settings.client(execution)?)
}

fn print_write(out: &mut impl Write, response: &PostResponse) -> io::Result<()> {
    eprintln!(
        "{} -> {} in {:.3}s",
        response.url,
        response.status_code,
        response.elapsed_secs()
    );
    writeln!(out, "{}", response.csid)
}
