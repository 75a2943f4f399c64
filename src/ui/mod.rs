//! User interface rendering layer with component-based architecture.
//!
//! This module transforms view models into ANSI-styled output through
//! composable rendering components, with theme support and a responsive
//! layout shared with pointer hit-testing.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render_root → RenderRoot
//!                                                  ├─ base layer:   page
//!                                                  └─ portal layer: overlay
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`layout`]: Geometry for the page and the overlay
//! - [`portal`]: Layered frame composition
//! - [`helpers`]: Shared drawing utilities (fitting, boxes, fills)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod portal;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{OverlayLayout, PageLayout, Rect};
pub use portal::{Layer, RenderRoot};
pub use renderer::{render, render_root, OVERLAY_PORTAL};
pub use theme::Theme;
pub use viewmodel::{CardInfo, HeaderInfo, InputInfo, NavItem, OverlayInfo, TriggerInfo, UIViewModel};
