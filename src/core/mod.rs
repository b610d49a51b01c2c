pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, DexConfig};
pub use error::{PokedexError, Result};
pub use types::{DexId, OutputFormat};
