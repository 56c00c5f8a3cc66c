//! Raw-mode line input for the form.

use crossterm::event::{Event, KeyCode, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Read an edited line in raw mode.
///
/// Enter accepts, Esc/Ctrl+Q cancels (returns `None`), Ctrl+U clears,
/// Ctrl+C exits the process. With `digits_only`, anything but ASCII digits
/// is swallowed, so the length field can't hold junk mid-edit.
pub fn line_input(prompt: &str, initial: &str, digits_only: bool) -> Option<String> {
    let mut input = initial.to_string();
    let mut cursor = input.len();
    let mut cancelled = false;

    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(input), // can't do raw mode, keep the initial value
    };

    let mut last_len = input.len();
    print!("{prompt}: {input}");
    flush();

    loop {
        match read() {
            Ok(Event::Key(key)) => {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        // process::exit skips destructors; restore the
                        // terminal by hand first
                        reset_terminal();
                        println!();
                        std::process::exit(0);
                    }
                    KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Esc => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        input.clear();
                        cursor = 0;
                    }
                    KeyCode::Enter => break,
                    KeyCode::Backspace => {
                        if cursor > 0 {
                            cursor -= 1;
                            input.remove(cursor);
                        }
                    }
                    KeyCode::Delete => {
                        if cursor < input.len() {
                            input.remove(cursor);
                        }
                    }
                    KeyCode::Left => cursor = cursor.saturating_sub(1),
                    KeyCode::Right => {
                        if cursor < input.len() {
                            cursor += 1;
                        }
                    }
                    KeyCode::Home => cursor = 0,
                    KeyCode::End => cursor = input.len(),
                    KeyCode::Char(c) if c.is_ascii() && !c.is_control() => {
                        if !digits_only || c.is_ascii_digit() {
                            input.insert(cursor, c);
                            cursor += 1;
                        }
                    }
                    _ => {}
                }

                // Redraw the line, then park the cursor inside the edit.
                print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
                print!("\r{prompt}: {input}");
                print!("\x1b[{}G", prompt.len() + 3 + cursor);
                flush();
                last_len = input.len();
            }
            Err(_) => break,
            _ => {}
        }
    }

    drop(_guard);
    println!();
    if cancelled { None } else { Some(input) }
}
