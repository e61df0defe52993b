//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for the submit shortcut. Ctrl everywhere: macOS terminals
/// usually keep Cmd+key for themselves.
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the status bar
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Quit shortcut display
/// - macOS: "⌃C" (matches the menu glyphs macOS users expect)
/// - Linux/Windows: "Ctrl+C"
#[cfg(target_os = "macos")]
pub const QUIT_SHORTCUT: &str = "⌃C";

#[cfg(not(target_os = "macos"))]
pub const QUIT_SHORTCUT: &str = "Ctrl+C";
