pub mod init;
pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(version)]
#[command(about = "Bilingual marketing-site backend", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "vitrine.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a config file plus the data and uploads directories.
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
        #[arg(long)]
        title: Option<String>,
    },
    /// Apply pending database migrations.
    Migrate,
    /// Run the HTTP server.
    Serve {
        #[arg(short = 'H', long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
    },
}
