//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer; they contain no business logic, only display-ready data.

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render the plugin UI: header,
/// footer, optional search bar, and the mode-specific body.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (branding, result count).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Search bar contents, present only in search mode.
    pub search_bar: Option<SearchBarInfo>,

    /// The mode-specific body to render.
    pub body: BodyViewModel,
}

/// The mutually exclusive body layouts.
#[derive(Debug, Clone)]
pub enum BodyViewModel {
    /// A search is in flight; show the loading message.
    Loading,

    /// No videos are available; show the empty state.
    Empty(EmptyState),

    /// Grid mode: the windowed results list.
    Grid {
        /// Visible grid rows.
        items: Vec<GridItem>,
    },

    /// Detail mode: the detail panel plus the sidebar list.
    Detail {
        /// Selected video panel.
        panel: DetailPanel,
        /// Windowed sidebar rows (the full, unfiltered summary list).
        sidebar: Vec<SidebarItem>,
    },
}

/// One row in the results grid.
#[derive(Debug, Clone)]
pub struct GridItem {
    /// Video title.
    pub title: String,
    /// Channel title.
    pub channel: String,
    /// Whether the cursor is on this row.
    pub is_selected: bool,
}

/// One row in the detail sidebar.
#[derive(Debug, Clone)]
pub struct SidebarItem {
    /// Video title.
    pub title: String,
    /// Channel title.
    pub channel: String,
    /// Whether the cursor is on this row.
    pub is_selected: bool,
    /// Whether this row is the currently playing (selected) video.
    pub is_playing: bool,
}

/// Detail panel contents for the selected video.
///
/// The metadata fields are `None` while the detail fetch is pending or after
/// it failed without a prior payload; the panel then renders only the player
/// line.
#[derive(Debug, Clone)]
pub struct DetailPanel {
    /// Embeddable player URL for the selected video (autoplay enabled).
    pub embed_url: String,
    /// Video title, when the detail payload is present.
    pub title: Option<String>,
    /// Pre-formatted "views • date" line, when present.
    pub meta: Option<String>,
    /// Full description text, when present (wrapped at render time).
    pub description: Option<String>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "q: quit  /: search").
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No videos found").
    pub message: String,

    /// Secondary explanatory text (e.g., "Press / to search").
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}
