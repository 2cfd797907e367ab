use serde::Serialize;

use crate::color::{Color, Role};
use crate::constants::{BLUE_LETTERS, YELLOW_PRIMES};
use crate::edgework::{BombInfo, Port, serial_letters};
use crate::layout::{Layout, RoleAssignment};

/// Table A: one swap predicate per role color.
///
/// The four conditions read disjoint signals and are independent; any subset
/// may hold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TableA {
    /// Red carries the i or j component.
    pub red: bool,
    /// A PS/2 port is present.
    pub green: bool,
    /// The serial number contains a letter of BLUE.
    pub blue: bool,
    /// The two white buttons' digits (0 as 0) sum to a prime.
    pub yellow: bool,
}

impl TableA {
    pub fn evaluate(layout: &Layout, bomb: &impl BombInfo) -> Self {
        let red = matches!(layout.roles.role_of(Color::Red), Some(Role::I | Role::J));
        let green = bomb.is_port_present(Port::Ps2);
        let blue = serial_letters(bomb.serial_number()).any(|c| BLUE_LETTERS.contains(&c));
        let white_sum: u32 = layout
            .buttons
            .slots_of(Color::White)
            .iter()
            .map(|&slot| slot as u32 % 10)
            .sum();
        let yellow = YELLOW_PRIMES.contains(&white_sum);

        Self {
            red,
            green,
            blue,
            yellow,
        }
    }

    /// Whether the role carried by `color` swaps its max and min.
    pub fn swaps(&self, color: Color) -> bool {
        match color {
            Color::Red => self.red,
            Color::Green => self.green,
            Color::Blue => self.blue,
            Color::Yellow => self.yellow,
            Color::White => false,
        }
    }

    /// Colors whose rule applies, listed in role order (real, i, j, k).
    pub fn applicable(&self, roles: &RoleAssignment) -> Vec<Color> {
        roles
            .colors()
            .into_iter()
            .filter(|&c| self.swaps(c))
            .collect()
    }
}
