//! Domain layer for the ztube plugin.
//!
//! This module contains the core domain types for the plugin, independent of
//! Zellij-specific APIs or the YouTube wire format. It keeps the display
//! records and error types isolated from infrastructure concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`video`]: Video summary and detail records
//!
//! # Examples
//!
//! ```
//! use ztube::domain::{Result, VideoSummary};
//!
//! fn make_summary() -> Result<VideoSummary> {
//!     Ok(VideoSummary {
//!         id: "dQw4w9WgXcQ".to_string(),
//!         title: "A video".to_string(),
//!         channel: "A channel".to_string(),
//!         thumbnail: "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg".to_string(),
//!     })
//! }
//! ```

pub mod error;
pub mod video;

pub use error::{Result, ZtubeError};
pub use video::{VideoDetail, VideoSummary};
