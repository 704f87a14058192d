//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! plugin runtime (main.rs) and the domain/api layers. It implements the
//! event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └───── Request Completions ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`view`]: Input mode and render-mode state machine types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod state;
pub mod view;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::AppState;
pub use view::{InputMode, SearchFocus, View};
