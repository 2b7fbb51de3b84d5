//! Report styling
//!
//! One immutable [`Styles`] value is built at startup from the settings
//! and a terminal check, then handed to the session. All coloring goes
//! through it; there is no process-wide color state.

use colored::{ColoredString, Colorize};
use derive_new::new;

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Styles {
    enabled: bool,
}

impl Default for Styles {
    fn default() -> Self {
        Styles::new(true)
    }
}

impl Styles {
    pub fn header(&self, text: &str) -> ColoredString {
        if self.enabled { text.blue() } else { text.normal() }
    }

    pub fn unchanged(&self, text: &str) -> ColoredString {
        if self.enabled { text.white() } else { text.normal() }
    }

    pub fn removed(&self, text: &str) -> ColoredString {
        if self.enabled { text.red() } else { text.normal() }
    }

    pub fn added(&self, text: &str) -> ColoredString {
        if self.enabled { text.green() } else { text.normal() }
    }

    pub fn command(&self, text: &str) -> ColoredString {
        if self.enabled { text.white() } else { text.normal() }
    }
}
