//! Infrastructure layer for sandbox and host interactions.
//!
//! - [`paths`]: mapping configured paths onto the `/host` mount
//! - [`listener`]: scoped subscription to global key and pointer events

pub mod listener;
pub mod paths;

pub use listener::{EventSource, KeyListener, ListenedEvent};
pub use paths::{data_dir, expand_tilde, resolve_config_path, strip_host_prefix};
