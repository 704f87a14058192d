//! Input and view mode state types for the application.
//!
//! This module defines the state machine enums that control user interaction
//! and rendering. [`InputMode`] determines which keybindings are active and
//! whether the search bar is shown; [`View`] is the render-mode discriminator
//! between the results grid and the detail layout.
//!
//! # State Machine
//!
//! The view operates in one of two mutually exclusive states:
//! - **Grid**: no video is selected; the full results grid is rendered.
//! - **Detail**: a video is selected; the detail panel and the sidebar are
//!   rendered.
//!
//! `Grid → Detail` happens on any select. `Detail → Grid` happens only when a
//! new search completes successfully — there is no direct back transition.

use crate::domain::VideoDetail;

/// Focus state within search mode.
///
/// Determines whether search input is being typed or results are being
/// navigated. Controls which keybindings are active during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to submit the query).
    Typing,

    /// User is navigating results while the search bar stays visible.
    ///
    /// Accepts j/k for movement, enter to select, and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and whether the search bar renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    Normal,

    /// Active search mode with focus state.
    ///
    /// Contains a [`SearchFocus`] variant indicating whether the user is
    /// typing or navigating results.
    Search(SearchFocus),
}

/// Render-mode discriminator: results grid or detail layout.
///
/// Selection and its detail payload are one consolidated value: the selected
/// id and the (possibly still loading) [`VideoDetail`] live together in the
/// `Detail` variant, so a present detail always corresponds to the selected
/// id by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// No video selected; the results grid is rendered.
    Grid,

    /// A video is selected; the detail panel and sidebar are rendered.
    Detail {
        /// The selected video id.
        id: String,
        /// Detail payload, `None` until the detail fetch commits.
        detail: Option<VideoDetail>,
    },
}

impl View {
    /// Returns the currently selected video id, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        match self {
            Self::Grid => None,
            Self::Detail { id, .. } => Some(id),
        }
    }

    /// Returns true when the detail layout is active.
    #[must_use]
    pub const fn is_detail(&self) -> bool {
        matches!(self, Self::Detail { .. })
    }
}
