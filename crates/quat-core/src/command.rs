use regex::Regex;
use std::sync::LazyLock;

use crate::session::Button;

static COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:submit\s+|press\s+|)(-?[0-9]+)$").unwrap());

/// Usage text for the command surface.
pub const HELP: &str = "Use \"submit 1234\", \"press 1234\", or \"1234\" to submit your answer. \
Any previous input will automatically be cleared.";

/// Translate a text command into button presses.
///
/// `input_empty` is the current display state: a leading clear is only
/// needed when something is already shown. A minus sign maps to the clear
/// toggle. Returns `None` for text that is not a command.
pub fn parse_command(text: &str, input_empty: bool) -> Option<Vec<Button>> {
    let caps = COMMAND.captures(text.trim())?;
    let number = caps.get(1)?.as_str();

    let mut presses = Vec::with_capacity(number.len() + 2);
    if !input_empty {
        presses.push(Button::Clear);
    }
    for c in number.chars() {
        match c {
            '-' => presses.push(Button::Clear),
            _ => {
                if let Some(d) = c.to_digit(10) {
                    presses.push(Button::Digit(d as u8));
                }
            }
        }
    }
    presses.push(Button::Submit);
    Some(presses)
}
