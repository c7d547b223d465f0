use crate::config::toml_config::TomlConfig;
use crate::config::CartSettings;
use crate::core::ProductId;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "cart-sync")]
#[command(about = "Manage a shopping cart backed by a remote stock API and a local store")]
pub struct CliConfig {
    #[arg(long, help = "TOML config file; command line flags take precedence")]
    pub config: Option<String>,

    #[arg(long, help = "Catalog API base URL [default: http://localhost:3333]")]
    pub api_base_url: Option<String>,

    #[arg(long, help = "Key-value store file [default: ./cart-storage.json]")]
    pub storage_path: Option<String>,

    #[arg(long, help = "Storage key namespace [default: @cart-sync]")]
    pub namespace: Option<String>,

    #[arg(long, help = "HTTP request timeout in seconds [default: 10]")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum CartCommand {
    /// Show the cart contents and totals
    Show,
    /// Add one unit of a product
    Add { product_id: ProductId },
    /// Remove a product line from the cart
    Remove { product_id: ProductId },
    /// Set the quantity of a product already in the cart
    Update {
        product_id: ProductId,
        #[arg(allow_hyphen_values = true)]
        amount: i64,
    },
    /// Empty the cart
    Clear,
}

impl CliConfig {
    /// Layers the TOML file (if any) over the defaults, then the flags over that.
    pub fn settings(&self) -> Result<CartSettings> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_settings(),
            None => CartSettings::default(),
        };

        if let Some(url) = &self.api_base_url {
            settings.api_base_url = url.clone();
        }
        if let Some(path) = &self.storage_path {
            settings.storage_path = path.clone();
        }
        if let Some(namespace) = &self.namespace {
            settings.namespace = namespace.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = timeout;
        }
        if self.verbose {
            settings.log_level = Some("debug".to_string());
        }
        settings.json_logs |= self.json_logs;

        Ok(settings)
    }
}
