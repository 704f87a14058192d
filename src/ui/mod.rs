//! User interface rendering layer with component-based architecture.
//!
//! This module orchestrates the terminal-based UI, transforming view models
//! into ANSI-styled output through composable rendering components. It
//! provides theme support and responsive layout for the grid and detail
//! modes.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (truncation, wrapping)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    BodyViewModel, DetailPanel, EmptyState, FooterInfo, GridItem, HeaderInfo, SearchBarInfo,
    SidebarItem, UIViewModel,
};
