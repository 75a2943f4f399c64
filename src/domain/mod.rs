//! Domain layer for the Concierge plugin.
//!
//! Core types that do not depend on Zellij or on rendering: the error type and
//! the static content the overlay displays.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`content`]: Recent searches, trending products, suggested queries and
//!   page chrome
//!
//! # Examples
//!
//! ```
//! use concierge::domain::{Result, StaticContent};
//!
//! fn load() -> Result<StaticContent> {
//!     StaticContent::from_toml("brand = \"ATELIER\"")
//! }
//!
//! assert_eq!(load().unwrap().brand, "ATELIER");
//! ```

pub mod content;
pub mod error;

pub use content::{NavLink, StaticContent, TrendingProduct};
pub use error::{ConciergeError, Result};
