//! Terminal event configuration.
//!
//! Bracketed paste is enabled so pasted manuscripts and fact lists arrive as
//! a single paste event instead of a burst of key presses (whose newlines
//! would otherwise trigger the workshop's send action).

use std::io::stdout;

use ratatui::crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use ratatui::crossterm::execute;

/// Guard that disables the terminal event modes it enabled when dropped.
pub struct TerminalEventGuard {
    bracketed_paste_enabled: bool,
    keyboard_enhancement_enabled: bool,
}

impl TerminalEventGuard {
    #[must_use]
    pub fn new() -> Self {
        let mut guard = Self {
            bracketed_paste_enabled: false,
            keyboard_enhancement_enabled: false,
        };

        match execute!(stdout(), EnableBracketedPaste) {
            Ok(()) => {
                tracing::debug!("bracketed paste enabled");
                guard.bracketed_paste_enabled = true;
            }
            Err(e) => tracing::warn!(error = %e, "could not enable bracketed paste"),
        }

        // Lets Ctrl+Left/Right and F-keys arrive unambiguously on terminals
        // that support the kitty protocol.
        match execute!(
            stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        ) {
            Ok(()) => {
                tracing::debug!("keyboard enhancement enabled");
                guard.keyboard_enhancement_enabled = true;
            }
            Err(e) => tracing::debug!(error = %e, "keyboard enhancement unavailable"),
        }

        guard
    }
}

impl Default for TerminalEventGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalEventGuard {
    fn drop(&mut self) {
        if self.keyboard_enhancement_enabled {
            let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        }
        if self.bracketed_paste_enabled {
            let _ = execute!(stdout(), DisableBracketedPaste);
        }
    }
}
