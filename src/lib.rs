pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CartCommand, CliConfig};

pub use adapters::{
    http::HttpCatalog,
    notify::{ConsoleNotifier, RecordingNotifier},
    storage::{LocalStorage, MemoryStorage},
};
pub use config::{toml_config::TomlConfig, CartSettings};
pub use core::{cart::CartManager, session::CartSession};
pub use domain::model::{AmountUpdate, CartEntry, CartOutcome, CartSummary, ProductId};
pub use utils::error::{CartError, Result};
