//! Non-interactive CLI mode.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Run one-shot mode with the process arguments.
pub fn run(args: &[String]) {
    let mut ctx = match Context::new(args) {
        Ok(c) => c,
        Err(msg) => {
            prompts::error(&msg);
            eprintln!("See 'formpass --help'.");
            std::process::exit(2);
        }
    };

    let _ = ctx.run();
}
