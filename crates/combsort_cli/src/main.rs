//! combsort CLI
//!
//! Command-line front end for the comb sort service.
//!
//! # Commands
//!
//! - `serve` - Run the HTTP sort server
//! - `sort` - Sort numbers locally and print the result with metadata
//! - `token` - Mint an access token for a gated server
//! - `version` - Show version information

mod commands;
mod input;

use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Comb sort service and tools.
#[derive(Parser)]
#[command(name = "combsort")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP sort server
    Serve {
        /// IP address to bind to
        #[arg(long, default_value = "0.0.0.0")]
        bind: IpAddr,

        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = combsort_server::DEFAULT_PORT)]
        port: u16,

        /// Per-request sort deadline in seconds
        #[arg(long, default_value = "30")]
        timeout_secs: u64,

        /// Maximum number of values per request
        #[arg(long, default_value = "1000000")]
        max_values: usize,

        /// Secret for signing access tokens; leaves the server open when unset
        #[arg(long, env = "COMBSORT_AUTH_SECRET", hide_env_values = true)]
        auth_secret: Option<String>,

        /// Token lifetime in hours
        #[arg(long, default_value = "24")]
        token_ttl_hours: u64,
    },

    /// Sort numbers locally
    Sort {
        /// Numbers to sort (separated by spaces, commas or semicolons)
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        /// Read numbers from this file instead
        #[arg(short, long, conflicts_with = "values")]
        file: Option<PathBuf>,

        /// Sort largest first
        #[arg(short, long)]
        descending: bool,

        /// Initial gap (ignored unless between 1 and the number of values)
        #[arg(short, long)]
        gap: Option<usize>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Mint an access token for a gated server
    Token {
        /// User id to embed in the token
        #[arg(short, long)]
        user: String,

        /// Signing secret, same as the server's
        #[arg(long, env = "COMBSORT_AUTH_SECRET", hide_env_values = true)]
        secret: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Serve {
            bind,
            port,
            timeout_secs,
            max_values,
            auth_secret,
            token_ttl_hours,
        } => {
            let options = commands::serve::ServeOptions {
                bind,
                port,
                timeout_secs,
                max_values,
                auth_secret,
                token_ttl_hours,
            };
            commands::serve::run(options)?;
        }
        Commands::Sort {
            values,
            file,
            descending,
            gap,
            format,
        } => {
            commands::sort::run(&values, file.as_deref(), descending, gap, &format)?;
        }
        Commands::Token { user, secret } => {
            commands::token::run(&user, &secret)?;
        }
        Commands::Version => {
            println!("combsort CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("combsort core v{}", combsort_core::VERSION);
        }
    }

    Ok(())
}
