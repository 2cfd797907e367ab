//! Answer derivation: components → Table A swaps → serial inversion →
//! conjugation → ordered product → selection.
//!
//! Pure given its inputs. Every intermediate stage is kept in [`Derivation`]
//! so the trace can be logged or exported.

use serde::Serialize;

use crate::color::{Role, Selection};
use crate::edgework::{BombInfo, serial_digits};
use crate::layout::Layout;
use crate::quaternion::Quaternion;
use crate::rules::TableA;

/// The three signals the pipeline reads beyond Table A.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PipelineSignals {
    /// Digits occurring in the serial number.
    pub serial_digits: [bool; 10],
    pub lit_empty: bool,
    pub unlit_empty: bool,
    pub odd_batteries: bool,
}

impl PipelineSignals {
    pub fn from_bomb(bomb: &impl BombInfo) -> Self {
        Self {
            serial_digits: serial_digits(bomb.serial_number()),
            lit_empty: bomb.lit_indicator_count() == 0,
            unlit_empty: bomb.unlit_indicator_count() == 0,
            odd_batteries: bomb.battery_count() % 2 == 1,
        }
    }
}

/// Multiplication order of the final product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductOrder {
    /// `q1 * q2`, odd battery count.
    Q1Q2,
    /// `q2 * q1`, even battery count.
    Q2Q1,
}

impl ProductOrder {
    pub fn label(self) -> &'static str {
        match self {
            ProductOrder::Q1Q2 => "q₁q₂",
            ProductOrder::Q2Q1 => "q₂q₁",
        }
    }
}

/// `[a1, b1, c1, d1, a2, b2, c2, d2]`: role maxima then role minima.
pub type Components = [i64; 8];

/// Full trace of one answer derivation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Derivation {
    pub initial: Components,
    pub swapped: Components,
    pub inverted: Components,
    pub q1: Quaternion,
    pub q2: Quaternion,
    pub q1_conjugated: bool,
    pub q2_conjugated: bool,
    pub order: ProductOrder,
    pub product: Quaternion,
    pub selection: Selection,
    pub answer: i64,
}

impl Derivation {
    pub fn answer(&self) -> i64 {
        self.answer
    }
}

/// Max value per role color in slots 0–3, min value in slots 4–7.
pub fn build_components(layout: &Layout) -> Components {
    let mut components = [0i64; 8];
    for role in Role::ALL {
        let color = layout.roles.color(role);
        let i = role.index();
        components[i] = i64::from(layout.buttons.max_value(color));
        components[i + 4] = i64::from(layout.buttons.min_value(color));
    }
    components
}

/// Swap a role's max and min when Table A holds for its color.
pub fn apply_swaps(mut components: Components, layout: &Layout, table: &TableA) -> Components {
    for role in Role::ALL {
        if table.swaps(layout.roles.color(role)) {
            components.swap(role.index(), role.index() + 4);
        }
    }
    components
}

/// Negate every component whose last digit occurs in the serial number.
pub fn apply_serial_inversion(mut components: Components, digits: &[bool; 10]) -> Components {
    for value in components.iter_mut() {
        if digits[value.rem_euclid(10) as usize] {
            *value = -*value;
        }
    }
    components
}

pub fn derive(layout: &Layout, table: &TableA, signals: &PipelineSignals) -> Derivation {
    let initial = build_components(layout);
    let swapped = apply_swaps(initial, layout, table);
    let inverted = apply_serial_inversion(swapped, &signals.serial_digits);

    let mut q1 = Quaternion::new(inverted[0], inverted[1], inverted[2], inverted[3]);
    let mut q2 = Quaternion::new(inverted[4], inverted[5], inverted[6], inverted[7]);
    if signals.lit_empty {
        q1 = q1.conjugate();
    }
    if signals.unlit_empty {
        q2 = q2.conjugate();
    }

    let (order, product) = if signals.odd_batteries {
        (ProductOrder::Q1Q2, q1 * q2)
    } else {
        (ProductOrder::Q2Q1, q2 * q1)
    };

    let selection = layout.selection();
    let answer = match selection {
        Selection::Component(Role::Real) => product.a,
        Selection::Component(Role::I) => product.b,
        Selection::Component(Role::J) => product.c,
        Selection::Component(Role::K) => product.d,
        Selection::SquaredNorm => product.squared_norm(),
    };

    Derivation {
        initial,
        swapped,
        inverted,
        q1,
        q2,
        q1_conjugated: signals.lit_empty,
        q2_conjugated: signals.unlit_empty,
        order,
        product,
        selection,
        answer,
    }
}
