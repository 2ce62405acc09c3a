//! Clipboard adapters.
//!
//! Writes go through the terminal using the OSC 52 escape sequence, so they
//! work over SSH as long as the terminal emulator honours it.

use std::io::{self, IsTerminal};

use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;

use domcart_common::config::Config;
use domcart_common::error::ClipboardError;
use domcart_common::ports::Clipboard;

pub struct TerminalClipboard;

impl Clipboard for TerminalClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut stdout = io::stdout();
        if !stdout.is_terminal() {
            return Err(ClipboardError::Unavailable(
                "stdout is not a terminal".to_string(),
            ));
        }
        execute!(stdout, CopyToClipboard::to_clipboard_from(text))?;
        Ok(())
    }
}

/// Rejects every write. Used with `--no-clipboard`.
pub struct DisabledClipboard;

impl Clipboard for DisabledClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(
            "disabled with --no-clipboard".to_string(),
        ))
    }
}

pub fn from_config(cfg: &Config) -> Box<dyn Clipboard> {
    if cfg.no_clipboard {
        Box::new(DisabledClipboard)
    } else {
        Box::new(TerminalClipboard)
    }
}
