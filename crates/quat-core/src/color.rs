use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Button and equation colors. White never carries a quaternion role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    White,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::White,
    ];

    /// The four colors eligible for a quaternion role.
    pub const ROLE_COLORS: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    pub fn index(self) -> usize {
        self as usize
    }

    /// RGBA hex used when rendering the defining equation.
    pub fn equation_hex(self) -> &'static str {
        match self {
            Color::Red => "#ff0000aa",
            Color::Green => "#00cc00aa",
            Color::Blue => "#3399ffaa",
            Color::Yellow => "#ffff00aa",
            Color::White => "#ffffffaa",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::White => "White",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LayoutError::UnknownColor(s.to_string()))
    }
}

/// Quaternion coefficient slot bound to a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Real,
    I,
    J,
    K,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Real, Role::I, Role::J, Role::K];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn component_name(self) -> &'static str {
        match self {
            Role::Real => "real component",
            Role::I => "i component",
            Role::J => "j component",
            Role::K => "k component",
        }
    }
}

/// What the submit button asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    Component(Role),
    SquaredNorm,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Component(role) => f.write_str(role.component_name()),
            Selection::SquaredNorm => f.write_str("squared norm"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("red".parse::<Color>().unwrap(), Color::Red);
        assert_eq!(" YELLOW ".parse::<Color>().unwrap(), Color::Yellow);
        assert_eq!("White".parse::<Color>().unwrap(), Color::White);
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "purple".parse::<Color>(),
            Err(LayoutError::UnknownColor(_))
        ));
    }

    #[test]
    fn test_role_colors_exclude_white() {
        assert!(!Color::ROLE_COLORS.contains(&Color::White));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Color::Blue).unwrap();
        assert_eq!(json, "\"blue\"");
        let back: Color = serde_json::from_str("\"green\"").unwrap();
        assert_eq!(back, Color::Green);
    }

    #[test]
    fn test_selection_display() {
        assert_eq!(Selection::Component(Role::J).to_string(), "j component");
        assert_eq!(Selection::SquaredNorm.to_string(), "squared norm");
    }
}
