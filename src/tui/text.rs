//! Form screen rendering.

use crate::form::{FormState, MAX_LENGTH, MIN_LENGTH};
use crate::pass::charset::{DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
use crate::terminal::{
    DIM, RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top,
    calculate_entropy, entropy_strength, flush, print_error, print_rule,
};

/// One-shot status line shown under the form after copy/invalid input.
pub enum Notice {
    Info(String),
    Error(String),
}

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

pub fn enter_prompt() -> &'static str {
    "Enter option (or press Enter to generate)"
}

pub fn print_form(state: &FormState, notice: Option<&Notice>) {
    box_top("Password Generator");
    box_line_center("Esc/CTRL+Q: cancel input | CTRL+U: clear input");
    box_line("");

    let shown = if state.length_input.is_empty() {
        "-"
    } else {
        &state.length_input
    };
    box_line(&format!(
        "  1) Password Length ({MIN_LENGTH}-{MAX_LENGTH}): {shown}"
    ));

    box_line("");
    box_line(&format!("{UNDERLINE}Character Sets{RESET}:"));
    box_line(&format!(
        "  2) {} Lowercase   {DIM}{LOWERCASE}{RESET}",
        checkbox(state.classes.lowercase)
    ));
    box_line(&format!(
        "  3) {} Uppercase   {DIM}{UPPERCASE}{RESET}",
        checkbox(state.classes.uppercase)
    ));
    box_line(&format!(
        "  4) {} Numbers     {DIM}{DIGITS}{RESET}",
        checkbox(state.classes.digits)
    ));
    box_line(&format!(
        "  5) {} Symbols     {DIM}{SYMBOLS}{RESET}",
        checkbox(state.classes.symbols)
    ));
    box_line("");
    print_rule();
    box_line("     r) reset  |  c) copy result  |  h) help  |  q) quit");
    box_bottom();

    // One line under the box: transient notice, field error, or blank.
    match notice {
        Some(Notice::Error(msg)) => print_error(msg),
        Some(Notice::Info(msg)) => println!("{DIM}{msg}{RESET}"),
        None => match &state.error {
            Some(e) => print_error(&e.to_string()),
            None => println!(),
        },
    }

    if let Some(pass) = &state.password {
        println!();
        print_result(pass.as_str(), state.classes.size());
    }
    flush();
}

fn print_result(pass: &str, pool_size: usize) {
    let bits = calculate_entropy(pass.len(), pool_size);
    box_top("Result");
    box_line_center(pass);
    box_line_center(&format!(
        "{DIM}{:.1} bits ({}){RESET}",
        bits,
        entropy_strength(bits)
    ));
    box_bottom();
}

pub fn print_help() {
    box_top("Formpass");
    box_line_center("Form-style password generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens the form to");
    box_line("     configure length and character sets.");
    box_line("  2) Client: Pass flags directly (e.g., -l 12 -u -d) to");
    box_line("     generate one password without the form.");
    box_line("");
    box_line("USAGE:");
    box_line("  formpass [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_opt("  -l, --length <N>", "Password length, 4 to 16. Required in client mode.");
    box_opt("  -u, --upper", "Include uppercase letters");
    box_opt("  -d, --digits", "Include digits");
    box_opt("  -s, --symbols", "Include symbols @#$%^&*()_+");
    box_opt("      --no-lower", "Drop the default lowercase set");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Print only the password");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  formpass                      Open the interactive form");
    box_line("  formpass -l 8                 8 lowercase characters");
    box_line("  formpass -l 16 -u -d -s       All four character sets");
    box_line("  formpass -l 4 -d --no-lower   Digits only");
    box_bottom();
    println!();
}
