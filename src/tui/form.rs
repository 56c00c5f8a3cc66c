//! Interactive form screen loop.

use copypasta::{ClipboardContext, ClipboardProvider};

use crate::form::{Action, FormState};
use crate::terminal::{clear, reset_terminal};

use super::{Notice, enter_prompt, line_input, print_form, print_help};

pub fn form_screen() {
    reset_terminal();
    clear();

    let mut state = FormState::default();
    let mut notice: Option<Notice> = None;
    let mut keep_screen = false;

    loop {
        if !keep_screen {
            clear();
        }
        keep_screen = false;

        print_form(&state, notice.take().as_ref());

        let input = match line_input(enter_prompt(), "", false) {
            Some(s) => s,
            None => continue, // Esc at the menu prompt: just redraw
        };

        match input.trim() {
            "" => state = state.apply(Action::Generate),
            "1" => {
                if let Some(raw) = line_input("Enter password length", &state.length_input, true)
                {
                    state = state.apply(Action::SetLength(raw.trim().to_string()));
                }
            }
            "2" => state = state.apply(Action::ToggleLowercase),
            "3" => state = state.apply(Action::ToggleUppercase),
            "4" => state = state.apply(Action::ToggleDigits),
            "5" => state = state.apply(Action::ToggleSymbols),
            "r" => state = state.apply(Action::Reset),
            "c" => notice = Some(copy_result(&state)),
            "h" => {
                clear();
                print_help();
                keep_screen = true; // leave help above the redrawn form
            }
            "q" | "e" => {
                clear();
                break;
            }
            _ => notice = Some(Notice::Error("Invalid option.".into())),
        }
    }
}

fn copy_result(state: &FormState) -> Notice {
    let Some(pass) = &state.password else {
        return Notice::Error("Nothing to copy yet.".into());
    };

    match ClipboardContext::new() {
        Ok(mut ctx) => match ctx.set_contents(pass.as_str().to_string()) {
            Ok(()) => Notice::Info("*** -COPIED TO CLIPBOARD- ***".into()),
            Err(e) => Notice::Error(format!("Clipboard error: {e}")),
        },
        Err(e) => Notice::Error(format!("Clipboard unavailable: {e}")),
    }
}
