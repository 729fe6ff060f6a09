//! TUI presentation layer.

pub mod setup;
pub mod theme;
pub mod widgets;

pub use setup::{TerminalEventGuard, debug_keys_enabled, init_logging};
pub use theme::Theme;
