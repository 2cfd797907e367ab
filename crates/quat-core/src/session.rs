use serde::{Deserialize, Serialize};

use crate::constants::{MAX_INPUT_LEN, SLOT_COUNT};

/// Session lifecycle. `Solved` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Unarmed,
    Armed,
    Solved,
}

/// A physical button on the module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Numbered button, by slot index (its label digit).
    Digit(u8),
    Clear,
    Submit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitOutcome {
    Correct,
    Strike,
    /// Not armed, or already solved.
    Ignored,
}

/// Result of a single button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PressOutcome {
    Entered,
    /// Display was full; press had no effect.
    Full,
    Cleared,
    Submitted(SubmitOutcome),
    Ignored,
}

/// Input buffer plus armed/solved status for one module.
#[derive(Clone, Debug)]
pub struct Session {
    expected: String,
    input: String,
    phase: Phase,
    strikes: u32,
}

impl Session {
    pub fn new(answer: i64) -> Self {
        Self {
            expected: answer.to_string(),
            input: String::new(),
            phase: Phase::Unarmed,
            strikes: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn strikes(&self) -> u32 {
        self.strikes
    }

    pub fn is_solved(&self) -> bool {
        self.phase == Phase::Solved
    }

    /// Host activation. Only moves `Unarmed` to `Armed`.
    pub fn activate(&mut self) {
        if self.phase == Phase::Unarmed {
            self.phase = Phase::Armed;
            tracing::debug!("session armed");
        }
    }

    /// Append a digit or minus sign. Returns `false` if nothing was appended.
    pub fn enter(&mut self, c: char) -> bool {
        if self.phase != Phase::Armed {
            return false;
        }
        if !(c.is_ascii_digit() || c == '-') {
            tracing::warn!("rejected input character {c:?}");
            return false;
        }
        if self.input.len() >= MAX_INPUT_LEN {
            return false;
        }
        self.input.push(c);
        true
    }

    /// Empty the display, or show a lone minus sign if it is already empty.
    pub fn clear(&mut self) -> bool {
        if self.phase != Phase::Armed {
            return false;
        }
        if self.input.is_empty() {
            self.input.push('-');
        } else {
            self.input.clear();
        }
        true
    }

    /// Compare the display verbatim against the answer's decimal form.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.phase != Phase::Armed {
            return SubmitOutcome::Ignored;
        }
        tracing::info!("submitting {:?}", self.input);
        if self.input == self.expected {
            self.phase = Phase::Solved;
            tracing::info!("correct, module disarmed");
            SubmitOutcome::Correct
        } else {
            self.strikes += 1;
            tracing::warn!("strike, incorrect answer {:?}", self.input);
            SubmitOutcome::Strike
        }
    }

    pub fn press(&mut self, button: Button) -> PressOutcome {
        if self.phase != Phase::Armed {
            return PressOutcome::Ignored;
        }
        match button {
            Button::Digit(n) if (n as usize) < SLOT_COUNT => {
                if self.enter(char::from(b'0' + n)) {
                    PressOutcome::Entered
                } else {
                    PressOutcome::Full
                }
            }
            Button::Digit(n) => {
                tracing::warn!("no numbered button {n}");
                PressOutcome::Ignored
            }
            Button::Clear => {
                self.clear();
                PressOutcome::Cleared
            }
            Button::Submit => PressOutcome::Submitted(self.submit()),
        }
    }
}
