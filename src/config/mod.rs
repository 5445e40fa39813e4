use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use serde::Deserialize;

/// Configuration for the application
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Database connection URL
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Address the HTTP server listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Upper bound on pooled database connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_url() -> String {
    "sqlite://progress_tracker.db".to_string()
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            bind_addr: default_bind_addr(),
            max_connections: default_max_connections(),
        }
    }
}

/// Command line flags; anything given here wins over the environment.
#[derive(Debug, Default, Parser)]
#[command(
    name = "progress_tracker",
    version,
    about = "Track projects, milestones and weekly progress"
)]
pub struct Cli {
    /// Database connection URL (overrides DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Listen address (overrides BIND_ADDR)
    #[arg(long)]
    pub bind: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// This function will:
    /// 1. Load variables from .env file if it exists
    /// 2. Deserialize environment variables into Config struct
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let config = envy::from_env::<Config>()?;

        Ok(config)
    }

    /// Apply command line overrides on top of the loaded values
    pub fn with_cli(mut self, cli: Cli) -> Self {
        if let Some(url) = cli.database_url {
            self.database_url = url;
        }
        if let Some(bind) = cli.bind {
            self.bind_addr = bind;
        }
        self
    }

    /// Get a direct reference to the database URL
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// Initialize environment variables and load configuration
pub fn init(cli: Cli) -> Result<Config> {
    let config = Config::load()?.with_cli(cli);

    Ok(config)
}
