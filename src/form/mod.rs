//! Form state and its reducer.
//!
//! The whole screen is one immutable value stepped by `FormState::apply`, so
//! the form's behavior is testable without a terminal attached. The UI layers
//! only render the state and translate input into actions.

mod validate;

pub use validate::{MAX_LENGTH, MIN_LENGTH, ValidationError, validate_length};

use thiserror::Error;
use zeroize::Zeroizing;

use crate::pass::{ClassSet, EmptyAlphabet, generate};

/// Everything that can go wrong on a generate attempt, in field-message form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Alphabet(#[from] EmptyAlphabet),
}

/// Discrete form inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleLowercase,
    ToggleUppercase,
    ToggleDigits,
    ToggleSymbols,
    SetLength(String),
    Generate,
    Reset,
}

/// The form screen's state: raw length input, class checkboxes, the current
/// result, and the current field error.
#[derive(Default)]
pub struct FormState {
    pub length_input: String,
    pub classes: ClassSet,
    pub password: Option<Zeroizing<String>>,
    pub error: Option<FormError>,
}

impl FormState {
    /// Step the form by one action.
    pub fn apply(mut self, action: Action) -> FormState {
        match action {
            Action::ToggleLowercase => {
                self.classes.lowercase = !self.classes.lowercase;
                self.error = None;
            }
            Action::ToggleUppercase => {
                self.classes.uppercase = !self.classes.uppercase;
                self.error = None;
            }
            Action::ToggleDigits => {
                self.classes.digits = !self.classes.digits;
                self.error = None;
            }
            Action::ToggleSymbols => {
                self.classes.symbols = !self.classes.symbols;
                self.error = None;
            }
            Action::SetLength(raw) => {
                self.length_input = raw;
                self.error = None;
            }
            Action::Generate => match validate_length(&self.length_input) {
                // Validation failure never reaches the generator; whatever
                // was generated before stays on screen.
                Err(e) => self.error = Some(e.into()),
                Ok(length) => match generate(&self.classes, length) {
                    Ok(pass) => {
                        // Replaces the previous result; Zeroizing wipes it.
                        self.password = Some(Zeroizing::new(pass));
                        self.error = None;
                    }
                    Err(e) => self.error = Some(e.into()),
                },
            },
            Action::Reset => return FormState::default(),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generated(state: FormState) -> FormState {
        let state = state.apply(Action::SetLength("8".into()));
        let state = state.apply(Action::Generate);
        assert!(state.password.is_some());
        state
    }

    #[test]
    fn default_state_matches_fresh_form() {
        let state = FormState::default();
        assert!(state.length_input.is_empty());
        assert!(state.classes.lowercase);
        assert!(!state.classes.uppercase);
        assert!(!state.classes.digits);
        assert!(!state.classes.symbols);
        assert!(state.password.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn toggles_flip_one_flag_each() {
        let state = FormState::default()
            .apply(Action::ToggleLowercase)
            .apply(Action::ToggleDigits);
        assert!(!state.classes.lowercase);
        assert!(state.classes.digits);
        assert!(!state.classes.uppercase);
        assert!(!state.classes.symbols);
    }

    #[test]
    fn generate_without_length_sets_required_error() {
        let state = FormState::default().apply(Action::Generate);
        assert_eq!(
            state.error,
            Some(FormError::Validation(ValidationError::Required))
        );
        assert!(state.password.is_none());
    }

    #[test]
    fn generate_stores_password_of_requested_length() {
        let state = FormState::default()
            .apply(Action::SetLength("12".into()))
            .apply(Action::Generate);
        assert!(state.error.is_none());
        assert_eq!(state.password.as_ref().unwrap().len(), 12);
    }

    #[test]
    fn generate_replaces_previous_password() {
        let state = generated(FormState::default());
        let first = state.password.as_ref().unwrap().to_string();
        let state = state.apply(Action::Generate);
        assert_eq!(state.password.as_ref().unwrap().len(), first.len());
        // Both results hold the contract independently; equality is allowed
        // but there is only ever one stored result.
    }

    #[test]
    fn invalid_length_keeps_previous_password_on_screen() {
        let state = generated(FormState::default());
        let state = state.apply(Action::SetLength("17".into()));
        let state = state.apply(Action::Generate);
        assert_eq!(
            state.error,
            Some(FormError::Validation(ValidationError::TooLong))
        );
        assert!(state.password.is_some());
    }

    #[test]
    fn no_classes_enabled_reports_empty_alphabet() {
        let state = FormState::default()
            .apply(Action::ToggleLowercase)
            .apply(Action::SetLength("8".into()))
            .apply(Action::Generate);
        assert_eq!(state.error, Some(FormError::Alphabet(EmptyAlphabet)));
        assert!(state.password.is_none());
    }

    #[test]
    fn reset_restores_defaults_and_clears_result() {
        let state = generated(FormState::default())
            .apply(Action::ToggleSymbols)
            .apply(Action::Reset);
        assert!(state.length_input.is_empty());
        assert!(state.classes.lowercase);
        assert!(!state.classes.symbols);
        assert!(state.password.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn edits_clear_stale_errors() {
        let state = FormState::default().apply(Action::Generate);
        assert!(state.error.is_some());
        let state = state.apply(Action::SetLength("8".into()));
        assert!(state.error.is_none());
    }
}
