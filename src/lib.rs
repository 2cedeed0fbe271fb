pub mod alerts;
pub mod config;
pub mod enrich;
pub mod filter;
pub mod logging;
pub mod normalize;
pub mod scrape;
pub mod services;
pub mod settings;
pub mod storage;
pub mod types;

pub use config::Config;
pub use types::*;
