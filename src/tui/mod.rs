//! Interactive form TUI.

mod form;
mod input;
mod text;

pub use input::*;
pub use text::*;

/// Run interactive mode.
pub fn run() {
    form::form_screen();
}
