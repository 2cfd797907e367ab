use std::fmt;

use crate::color::Color;

/// A layout that breaks the role or button invariants. Setup must not
/// proceed to an answer when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    UnknownColor(String),
    WhiteRole,
    DuplicateRole(Color),
    RoleCount(usize),
    SlotCount(usize),
    ColorCount { color: Color, count: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::UnknownColor(s) => write!(f, "unknown color: {s:?}"),
            LayoutError::WhiteRole => write!(f, "white cannot be a quaternion role color"),
            LayoutError::DuplicateRole(c) => write!(f, "role color {c} assigned twice"),
            LayoutError::RoleCount(n) => write!(f, "expected 4 role colors, got {n}"),
            LayoutError::SlotCount(n) => write!(f, "expected 10 button colors, got {n}"),
            LayoutError::ColorCount { color, count } => {
                write!(f, "color {color} must be on exactly 2 buttons, found {count}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

pub type Result<T> = std::result::Result<T, LayoutError>;
