pub mod config;
pub mod discovery;
pub mod error;
pub mod types;

pub use config::{ColorConfig, Config, FaviconConfig, SiteConfig, load_config};
pub use discovery::discover_sites;
pub use error::{Error, Result};
pub use types::*;
