//! cms-fmt CLI
//!
//! Usage:
//!   cms-fmt [--config FILE] commit <ACTION> [OPTIONS]
//!   cms-fmt [--config FILE] slug --collection NAME [OPTIONS]
//!   cms-fmt [--config FILE] lint
//!
//! Warnings about unknown template tokens are logged to stderr; set
//! `RUST_LOG` to change the level.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cms_fmt::{lint, Action, CommitMessageFormatter, CommitPayload, Config, EntryData, SlugFormatter};

#[derive(Parser)]
#[command(name = "cms-fmt")]
#[command(about = "Format commit messages and slugs from content templates")]
struct Cli {
    /// Configuration file (TOML format)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format the commit message for an action
    Commit {
        /// create, update, delete, uploadMedia or deleteMedia
        action: Action,

        /// Entry slug
        #[arg(long, default_value = "")]
        slug: String,

        /// File path of the entry or media file
        #[arg(long, default_value = "")]
        path: String,

        /// Name of the collection the entry belongs to
        #[arg(long)]
        collection: Option<String>,

        /// Wrap the message with the open authoring template
        #[arg(long)]
        open_authoring: bool,

        /// Login of the commit author
        #[arg(long)]
        author_login: Option<String>,

        /// Display name of the commit author
        #[arg(long)]
        author_name: Option<String>,
    },

    /// Format the slug for an entry
    Slug {
        /// Name of the collection the entry belongs to
        #[arg(long)]
        collection: String,

        /// Entry data file (JSON object)
        #[arg(short, long, conflicts_with = "field")]
        entry: Option<PathBuf>,

        /// Entry field as key=value (repeatable)
        #[arg(short, long, value_parser = parse_field)]
        field: Vec<(String, String)>,

        /// Reference date: YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS (default: now)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDateTime>,
    },

    /// Check configured templates for unknown tokens
    Lint,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path),
        None => Config::default(),
    };

    match cli.command {
        Command::Commit {
            action,
            slug,
            path,
            collection,
            open_authoring,
            author_login,
            author_name,
        } => {
            let collection = collection.map(|name| match config.collection(&name) {
                Ok(c) => c,
                Err(e) => exit_with_error(&e),
            });

            let mut payload = CommitPayload::new(&slug, &path);
            payload.collection = collection;
            payload.author_login = author_login.as_deref();
            payload.author_name = author_name.as_deref();

            let message = CommitMessageFormatter::new(&config).format(action, &payload, open_authoring);
            println!("{}", message);
        }
        Command::Slug {
            collection,
            entry,
            field,
            date,
        } => {
            let collection = match config.collection(&collection) {
                Ok(c) => c,
                Err(e) => exit_with_error(&e),
            };

            let entry = match entry {
                Some(path) => load_entry(&path),
                None => field.into_iter().collect(),
            };

            let mut formatter = SlugFormatter::new().with_slug_config(config.slug.clone());
            if let Some(date) = date {
                formatter = formatter.with_reference_date(date);
            }
            println!("{}", formatter.format(collection, &entry));
        }
        Command::Lint => {
            let warnings = lint::check(&config);
            for warning in &warnings {
                eprintln!("{}", warning.format());
            }
            if !warnings.is_empty() {
                eprintln!("{} unknown token(s) found", warnings.len());
                std::process::exit(1);
            }
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: &Path) -> Config {
    match Config::from_file(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }
}

fn load_entry(path: &Path) -> EntryData {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    };
    match EntryData::from_json_str(&content) {
        Ok(entry) => entry,
        Err(e) => {
            eprintln!("Error in entry '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }
}

fn exit_with_error(err: &dyn std::error::Error) -> ! {
    eprintln!("Error: {}", err);
    std::process::exit(1);
}

fn parse_field(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", s))
}

fn parse_date(s: &str) -> Result<NaiveDateTime, String> {
    if let Ok(datetime) = s.parse::<NaiveDateTime>() {
        return Ok(datetime);
    }
    s.parse::<NaiveDate>()
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("invalid date '{}', expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS", s))
}
