//! Campaign store: catalog loading, configuration and the favorites cache.
mod catalog;
mod config;
mod error;
mod favorites;
mod persist;

pub use catalog::{load_catalog, parse_catalog};
pub use config::SiteConfig;
pub use error::StoreError;
pub use favorites::FavoritesStore;
pub use persist::{ensure_state_dir, read_optional, AtomicFileWriter, PersistError};
