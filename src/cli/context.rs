//! CLI context - one-shot generation from parsed flags.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::form::validate_length;
use crate::pass::{ClassSet, generate};
use crate::terminal::{calculate_entropy, entropy_strength};
use crate::tui::print_help;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub flags: CliFlags,
    pub classes: ClassSet,
    clipboard: Option<ClipboardContext>,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("flags", &self.flags)
            .field("classes", &self.classes)
            .field("clipboard", &self.clipboard.as_ref().map(|_| "..."))
            .finish()
    }
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: &[String]) -> Result<Self, String> {
        let flags = super::parse(args).map_err(|e| e.to_string())?;

        let classes = ClassSet {
            lowercase: !flags.no_lower,
            uppercase: flags.upper,
            digits: flags.digits,
            symbols: flags.symbols,
        };

        Ok(Self {
            flags,
            classes,
            clipboard: None,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);
        self.handle_clipboard();
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("formpass {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    fn handle_clipboard(&mut self) {
        if !self.flags.clipboard {
            return;
        }
        match ClipboardContext::new() {
            Ok(c) => self.clipboard = Some(c),
            Err(_) => {
                if !prompts::clipboard_fallback_prompt() {
                    std::process::exit(0);
                }
            }
        }
    }

    /// Validate, generate one password, and hand it to the chosen sink.
    fn generate_output(&mut self) {
        let raw = self.flags.length_raw.clone().unwrap_or_default();

        let length = match validate_length(&raw) {
            Ok(n) => n,
            Err(e) => {
                prompts::error(&e.to_string());
                std::process::exit(2);
            }
        };

        let mut pass = match generate(&self.classes, length) {
            Ok(p) => p,
            Err(e) => {
                prompts::error(&e.to_string());
                std::process::exit(2);
            }
        };

        if let Some(ctx) = self.clipboard.as_mut() {
            match ctx.set_contents(pass.clone()) {
                Ok(()) => prompts::clipboard_copied(),
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
        } else {
            println!("{pass}");
            if !quiet::enabled() {
                let bits = calculate_entropy(length, self.classes.size());
                println!("{:.1} bits ({})", bits, entropy_strength(bits));
            }
        }

        pass.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("formpass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn classes_default_to_lowercase_only() {
        let ctx = Context::new(&args(&["-l", "8"])).unwrap();
        assert_eq!(ctx.classes, ClassSet::default());
    }

    #[test]
    fn class_flags_build_the_class_set() {
        let ctx = Context::new(&args(&["-l", "4", "-d", "--no-lower"])).unwrap();
        assert!(!ctx.classes.lowercase);
        assert!(ctx.classes.digits);
        assert!(!ctx.classes.uppercase);
        assert!(!ctx.classes.symbols);
    }

    #[test]
    fn bad_flag_surfaces_parse_message() {
        let err = Context::new(&args(&["--wat"])).unwrap_err();
        assert_eq!(err, "Unknown argument: --wat");
    }
}
