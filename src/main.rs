//! wirecase command-line entry point.
//!
//! Transcodes JSON payloads read from a file or stdin, maps them through an
//! entity schema, or lists a user's sessions from the backend.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wirecase::codec::{self, Value};
use wirecase::config::ClientConfig;
use wirecase::service::SessionService;
use wirecase::transport::HttpTransport;
use wirecase::wire::{Direction, schema};

/// Wire-to-domain transcoding tool.
#[derive(Debug, Parser)]
#[command(name = "wirecase", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rewrite every key to camelCase and coerce date-like strings.
    Transcode {
        /// JSON file to read (defaults to stdin).
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Map records through an entity schema.
    Map {
        /// Entity name (session, profile, user, address, password, user-role).
        entity: String,
        /// Map domain records to wire records instead.
        #[arg(long)]
        to_wire: bool,
        /// JSON file to read (defaults to stdin).
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// List the sessions of a user from the backend.
    Sessions {
        /// Owning user id.
        user_id: i64,
    },
}

fn read_input(input: Option<&PathBuf>) -> anyhow::Result<serde_json::Value> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("input is not valid JSON")
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Transcode { input } => {
            let json = read_input(input.as_ref())?;
            print_json(&codec::transcode_json(&json))?;
        }
        Command::Map {
            entity,
            to_wire,
            input,
        } => {
            let Some(schema) = schema::lookup(&entity) else {
                let known: Vec<&str> = schema::ALL.iter().map(|s| s.entity).collect();
                bail!("unknown entity `{entity}` (known: {})", known.join(", "));
            };
            let direction = if to_wire {
                Direction::ToWire
            } else {
                Direction::ToDomain
            };
            let value = Value::from(read_input(input.as_ref())?);
            tracing::debug!(entity = schema.entity, ?direction, "mapping input");
            print_json(&schema.map(&value, direction))?;
        }
        Command::Sessions { user_id } => {
            let config = ClientConfig::from_env()?;
            tracing::info!(api_url = %config.api_url, user_id, "fetching sessions");
            let transport = HttpTransport::new(&config)?;
            let service = SessionService::new(Arc::new(transport));
            let sessions = service
                .user_sessions(user_id)
                .await
                .with_context(|| format!("listing sessions of user {user_id}"))?;
            print_json(&sessions)?;
        }
    }

    Ok(())
}
