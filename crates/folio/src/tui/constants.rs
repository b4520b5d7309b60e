//! Shared constants for the TUI to keep layout and timing in sync.

/// Interval in milliseconds between UI ticks/redraws.
///
/// Kept well below the carousel transition so completed slides show promptly.
pub const TUI_TICK_RATE_MS: u64 = 50;
/// Time-to-live in seconds for transient status messages.
pub const UI_MESSAGE_TTL_SECS: u64 = 5;
/// Highlight symbol shown beside the list cursor.
pub const PROJECT_LIST_HIGHLIGHT_SYMBOL: &str = "▶ ";
/// Width percentage for the project modal before clamping.
pub const MODAL_WIDTH_PERCENT: u16 = 80;
/// Height percentage for the project modal before clamping.
pub const MODAL_HEIGHT_PERCENT: u16 = 85;
/// Minimum width for the project modal.
pub const MODAL_MIN_WIDTH: u16 = 40;
/// Minimum height for the project modal.
pub const MODAL_MIN_HEIGHT: u16 = 12;
/// Rows reserved for the image slide inside the modal.
pub const SLIDE_HEIGHT: u16 = 5;
/// Carousel indicator for the visible slide.
pub const SLIDE_DOT_ACTIVE: &str = "●";
/// Carousel indicator for other slides.
pub const SLIDE_DOT_INACTIVE: &str = "○";
/// Width percentage for the profile viewer before clamping.
pub const PROFILE_VIEWER_WIDTH_PERCENT: u16 = 80;
/// Height percentage for the profile viewer before clamping.
pub const PROFILE_VIEWER_HEIGHT_PERCENT: u16 = 80;
/// Minimum width for the profile viewer.
pub const PROFILE_VIEWER_MIN_WIDTH: u16 = 40;
/// Minimum height for the profile viewer.
pub const PROFILE_VIEWER_MIN_HEIGHT: u16 = 10;
/// Lines moved by the fast scroll bindings.
pub const FAST_SCROLL_LINES: u16 = 10;
