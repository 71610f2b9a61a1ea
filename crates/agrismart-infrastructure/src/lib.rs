//! Persistence layer for the AgriSmart client: config paths, the durable
//! session store, and secret (API key) storage.

pub mod paths;
pub mod secret_storage;
pub mod session_store;

pub use crate::paths::AgriPaths;
pub use crate::secret_storage::{SecretConfig, SecretStorage, WeatherSecret};
pub use crate::session_store::FileSessionRepository;
