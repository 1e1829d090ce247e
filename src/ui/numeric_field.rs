//! Numeric input masking for the sizing-parameter field
//!
//! Keystrokes are applied to the field only when the resulting text is
//! still a valid in-progress number: digits, at most one decimal
//! separator, an optional single leading minus. A typed '.' or ',' is
//! normalised to the configured separator. Invalid keystrokes are dropped
//! whole, never partially applied.

use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use crate::core::errors::{bail, AppResult};
use crate::hull::HullSizing;

/// The sizing-parameter text field and its mode toggle.
#[derive(Resource)]
pub struct ParameterInput {
    pub text: String,
    /// true: length ratio in [0, 1]; false: absolute max edge length.
    pub use_length_ratio: bool,
    pub allow_negative: bool,
    pub separator: char,
}

impl Default for ParameterInput {
    fn default() -> Self {
        ParameterInput {
            text: "0.3".to_string(),
            use_length_ratio: true,
            allow_negative: true,
            separator: '.',
        }
    }
}

impl ParameterInput {
    /// Default field content when a mode is (re)selected: the ratio mode
    /// suggests its usual 0.3, the edge-length mode starts blank.
    pub fn reset_for_mode(&mut self) {
        self.text = if self.use_length_ratio {
            format!("0{}3", self.separator)
        } else {
            String::new()
        };
    }

    pub fn value(&self) -> Option<f64> {
        let normalized = if self.separator == '.' {
            self.text.clone()
        } else {
            self.text.replace(self.separator, ".")
        };
        normalized.parse::<f64>().ok()
    }

    /// Turn the field into a validated sizing parameter.
    pub fn sizing(&self) -> AppResult<HullSizing> {
        let Some(value) = self.value() else {
            bail!("Enter a numeric sizing parameter first");
        };
        let sizing = if self.use_length_ratio {
            HullSizing::LengthRatio(value)
        } else {
            HullSizing::MaxEdgeLength(value)
        };
        sizing.validate()?;
        Ok(sizing)
    }
}

/// Would `input` still be acceptable field content?
///
/// Empty text and a lone minus are allowed as in-progress states; anything
/// else must parse as a float with `separator` as the radix point.
pub fn is_valid_numeric_input(
    input: &str,
    allow_negative: bool,
    separator: char,
) -> bool {
    if input.is_empty() || input == "-" {
        return true;
    }
    if !allow_negative && input.starts_with('-') {
        return false;
    }

    let normalized = if separator == '.' {
        input.to_string()
    } else {
        if input.contains('.') {
            return false;
        }
        input.replace(separator, ".")
    };
    normalized.parse::<f64>().is_ok()
}

/// Map a typed character onto the field alphabet; '.' and ',' both mean
/// the configured separator.
fn normalize_key_char(c: char, separator: char) -> Option<char> {
    match c {
        '0'..='9' | '-' => Some(c),
        '.' | ',' => Some(separator),
        _ => None,
    }
}

/// Apply keyboard input to the parameter field.
pub fn parameter_field_input(
    mut events: EventReader<KeyboardInput>,
    mut field: ResMut<ParameterInput>,
) {
    for event in events.read() {
        if !event.state.is_pressed() {
            continue;
        }
        match &event.logical_key {
            Key::Backspace => {
                field.text.pop();
            }
            Key::Character(typed) => {
                for c in typed.chars() {
                    let Some(c) = normalize_key_char(c, field.separator)
                    else {
                        continue;
                    };
                    let mut candidate = field.text.clone();
                    candidate.push(c);
                    if is_valid_numeric_input(
                        &candidate,
                        field.allow_negative,
                        field.separator,
                    ) {
                        field.text = candidate;
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_single_separator_accepted() {
        assert!(is_valid_numeric_input("0", true, '.'));
        assert!(is_valid_numeric_input("0.3", true, '.'));
        assert!(is_valid_numeric_input("12.", true, '.'));
        assert!(is_valid_numeric_input(".5", true, '.'));
        assert!(!is_valid_numeric_input("1.2.3", true, '.'));
        assert!(!is_valid_numeric_input("abc", true, '.'));
    }

    #[test]
    fn empty_and_lone_minus_are_in_progress_states() {
        assert!(is_valid_numeric_input("", true, '.'));
        assert!(is_valid_numeric_input("-", true, '.'));
        assert!(is_valid_numeric_input("-0.5", true, '.'));
        assert!(!is_valid_numeric_input("0-5", true, '.'));
    }

    #[test]
    fn minus_blocked_when_negatives_disallowed() {
        assert!(!is_valid_numeric_input("-1", false, '.'));
        // A lone minus is still tolerated while typing
        assert!(is_valid_numeric_input("-", false, '.'));
    }

    #[test]
    fn comma_separator_swaps_roles_with_period() {
        assert!(is_valid_numeric_input("0,3", true, ','));
        assert!(!is_valid_numeric_input("0.3", true, ','));
        assert!(!is_valid_numeric_input("0,3,4", true, ','));
    }

    #[test]
    fn typed_period_and_comma_both_become_the_separator() {
        assert_eq!(normalize_key_char('.', ','), Some(','));
        assert_eq!(normalize_key_char(',', ','), Some(','));
        assert_eq!(normalize_key_char('.', '.'), Some('.'));
        assert_eq!(normalize_key_char('x', '.'), None);
        assert_eq!(normalize_key_char('7', '.'), Some('7'));
    }

    #[test]
    fn field_parses_with_its_separator() {
        let field = ParameterInput {
            text: "0,25".into(),
            separator: ',',
            ..Default::default()
        };
        assert_eq!(field.value(), Some(0.25));
        assert_eq!(
            field.sizing().unwrap(),
            HullSizing::LengthRatio(0.25)
        );
    }

    #[test]
    fn out_of_range_ratio_fails_at_sizing() {
        let field = ParameterInput {
            text: "1.5".into(),
            ..Default::default()
        };
        assert!(field.sizing().is_err());
    }

    #[test]
    fn mode_reset_restores_defaults() {
        let mut field = ParameterInput::default();
        field.use_length_ratio = false;
        field.reset_for_mode();
        assert_eq!(field.text, "");

        field.use_length_ratio = true;
        field.separator = ',';
        field.reset_for_mode();
        assert_eq!(field.text, "0,3");
    }
}
