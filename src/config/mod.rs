//! Configuration management
//!
//! Launcher preferences with JSON persistence. A partial or damaged
//! config.json never resets settings the file does not mention.

pub mod error;
pub mod model;
pub mod patch;
pub mod session;
pub mod store;

pub use error::{ConfigError, ConfigResult};
pub use model::{CategoryType, ConfigModel, GridSize};
pub use patch::{ConfigPatch, RejectedField};
pub use session::ConfigSession;
pub use store::{ConfigStore, LoadOutcome};
