//! Clipboard infrastructure module
//!
//! Provides cross-platform clipboard support using arboard (primary)
//! or the wl-clipboard tools as a Wayland fallback.

mod arboard;
mod wayland;

pub use arboard::ArboardClipboard;
pub use wayland::WaylandClipboard;

use std::fmt;

use crate::application::ports::ClipboardIo;

/// Available clipboard backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardBackend {
    #[default]
    Arboard,
    Wayland,
}

impl ClipboardBackend {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Arboard => "arboard",
            Self::Wayland => "wayland",
        }
    }
}

impl fmt::Display for ClipboardBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Create the clipboard adapter for a backend
pub fn create_clipboard(backend: ClipboardBackend) -> Box<dyn ClipboardIo> {
    match backend {
        ClipboardBackend::Arboard => Box::new(ArboardClipboard::new()),
        ClipboardBackend::Wayland => Box::new(WaylandClipboard::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_display() {
        assert_eq!(ClipboardBackend::Arboard.to_string(), "arboard");
        assert_eq!(ClipboardBackend::Wayland.to_string(), "wayland");
    }

    #[test]
    fn default_backend_is_arboard() {
        assert_eq!(ClipboardBackend::default(), ClipboardBackend::Arboard);
    }
}
