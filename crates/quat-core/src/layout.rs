use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::color::{Color, Role, Selection};
use crate::constants::{SLOT_COUNT, SLOTS_PER_COLOR};
use crate::error::{LayoutError, Result};

/// Digit value of a numbered slot: its index, except slot 0 counts as 10.
pub fn digit_value(slot: usize) -> u32 {
    if slot == 0 { 10 } else { slot as u32 }
}

/// Bijection from the four roles (real, i, j, k) to the four non-white colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RoleAssignment {
    colors: [Color; 4],
}

impl RoleAssignment {
    /// Validate four colors, interpreted in role order (real, i, j, k).
    pub fn new(colors: [Color; 4]) -> Result<Self> {
        for (i, &color) in colors.iter().enumerate() {
            if color == Color::White {
                return Err(LayoutError::WhiteRole);
            }
            if colors[..i].contains(&color) {
                return Err(LayoutError::DuplicateRole(color));
            }
        }
        Ok(Self { colors })
    }

    pub fn from_slice(colors: &[Color]) -> Result<Self> {
        let colors: [Color; 4] = colors
            .try_into()
            .map_err(|_| LayoutError::RoleCount(colors.len()))?;
        Self::new(colors)
    }

    /// Uniformly random permutation of the role colors.
    pub fn random(rng: &mut impl Rng) -> Self {
        let mut colors = Color::ROLE_COLORS;
        colors.shuffle(rng);
        Self { colors }
    }

    pub fn color(&self, role: Role) -> Color {
        self.colors[role.index()]
    }

    /// The role a color carries, `None` for White.
    pub fn role_of(&self, color: Color) -> Option<Role> {
        Role::ALL.into_iter().find(|&r| self.color(r) == color)
    }

    pub fn colors(&self) -> [Color; 4] {
        self.colors
    }
}

/// Ten numbered buttons colored two per color.
///
/// Each color's two digit values are resolved into (max, min) once at
/// construction so later stages never depend on grouping order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ButtonAssignment {
    slots: [Color; SLOT_COUNT],
    #[serde(skip)]
    pairs: [[usize; SLOTS_PER_COLOR]; 5],
}

impl ButtonAssignment {
    /// Validate a slot → color mapping. Every color must appear exactly twice.
    pub fn from_slots(slots: [Color; SLOT_COUNT]) -> Result<Self> {
        let mut counts = [0usize; 5];
        let mut pairs = [[0usize; SLOTS_PER_COLOR]; 5];
        for (slot, color) in slots.iter().enumerate() {
            let n = counts[color.index()];
            if n < SLOTS_PER_COLOR {
                pairs[color.index()][n] = slot;
            }
            counts[color.index()] += 1;
        }
        for color in Color::ALL {
            let count = counts[color.index()];
            if count != SLOTS_PER_COLOR {
                return Err(LayoutError::ColorCount { color, count });
            }
        }
        Ok(Self { slots, pairs })
    }

    pub fn from_slice(slots: &[Color]) -> Result<Self> {
        let slots: [Color; SLOT_COUNT] = slots
            .try_into()
            .map_err(|_| LayoutError::SlotCount(slots.len()))?;
        Self::from_slots(slots)
    }

    /// Uniformly random partition of the slots into one pair per color.
    pub fn random(rng: &mut impl Rng) -> Self {
        let mut order: [usize; SLOT_COUNT] = std::array::from_fn(|i| i);
        order.shuffle(rng);

        let mut slots = [Color::White; SLOT_COUNT];
        let mut pairs = [[0usize; SLOTS_PER_COLOR]; 5];
        for color in Color::ALL {
            let k = color.index() * SLOTS_PER_COLOR;
            let mut pair = [order[k], order[k + 1]];
            pair.sort_unstable();
            for slot in pair {
                slots[slot] = color;
            }
            pairs[color.index()] = pair;
        }
        Self { slots, pairs }
    }

    pub fn color_of(&self, slot: usize) -> Color {
        self.slots[slot]
    }

    pub fn slots(&self) -> [Color; SLOT_COUNT] {
        self.slots
    }

    /// The two slot indices carrying `color`.
    pub fn slots_of(&self, color: Color) -> [usize; SLOTS_PER_COLOR] {
        self.pairs[color.index()]
    }

    /// Larger digit value among the color's two slots.
    pub fn max_value(&self, color: Color) -> u32 {
        let [x, y] = self.slots_of(color);
        digit_value(x).max(digit_value(y))
    }

    /// Smaller digit value among the color's two slots.
    pub fn min_value(&self, color: Color) -> u32 {
        let [x, y] = self.slots_of(color);
        digit_value(x).min(digit_value(y))
    }
}

/// Everything decided once at setup: role colors, button colors, and the
/// colors of the submit and clear buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub roles: RoleAssignment,
    pub buttons: ButtonAssignment,
    pub submit: Color,
    pub clear: Color,
}

impl Layout {
    pub fn new(
        roles: RoleAssignment,
        buttons: ButtonAssignment,
        submit: Color,
        clear: Color,
    ) -> Self {
        Self {
            roles,
            buttons,
            submit,
            clear,
        }
    }

    /// Shuffle roles and buttons, then draw submit and clear colors (with
    /// replacement) from the numbered buttons.
    pub fn random(rng: &mut impl Rng) -> Self {
        let roles = RoleAssignment::random(rng);
        let buttons = ButtonAssignment::random(rng);
        let submit = buttons.color_of(rng.random_range(0..SLOT_COUNT));
        let clear = buttons.color_of(rng.random_range(0..SLOT_COUNT));
        Self::new(roles, buttons, submit, clear)
    }

    /// Which part of the final product the submit color asks for.
    pub fn selection(&self) -> Selection {
        self.roles
            .role_of(self.submit)
            .map_or(Selection::SquaredNorm, Selection::Component)
    }
}
