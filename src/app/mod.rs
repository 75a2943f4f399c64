//! Application layer coordinating state, events, and actions.
//!
//! This module holds the search overlay's interaction logic, between the
//! plugin runtime (`main.rs`) and the domain/UI layers.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! ```text
//! Zellij Key / Mouse / Pipe → input mapping → Event → handle_event
//!        → AppState transition → (should_render, Vec<Action>) → host effects
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Host side effects emitted by the event handler
//! - [`focus`]: Focus handles for the trigger and overlay inputs
//! - [`handler`]: Event processing and pointer propagation
//! - [`input`]: Key and pipe message mapping
//! - [`modes`]: The two-state overlay machine and its entry points
//! - [`props`]: Trigger attributes from the host configuration
//! - [`state`]: Central state container, hit-testing, view model computation
//!
//! # Example
//!
//! ```rust
//! use concierge::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::default();
//! handle_event(&mut state, &Event::Viewport { rows: 24, cols: 80 })?;
//! handle_event(&mut state, &Event::Shortcut)?;
//! handle_event(&mut state, &Event::Escape)?;
//! assert!(!state.is_open());
//! # Ok::<(), concierge::ConciergeError>(())
//! ```

pub mod actions;
pub mod focus;
pub mod handler;
pub mod input;
pub mod modes;
pub mod props;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Activation, Dismissal, OverlayState};
pub use props::{ContainerStyle, InputStyle, TriggerProps};
pub use state::{AppState, HitTarget};
