//! External signals read from the host bomb at setup.
//!
//! The engine only ever sees these through [`BombInfo`]; [`Edgework`] is a
//! plain value implementation for tests and offline tools.

use serde::{Deserialize, Serialize};

/// Port kinds that can appear on a bomb's port plates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Port {
    DviD,
    Parallel,
    Ps2,
    Rj45,
    Serial,
    StereoRca,
}

/// Read-only view of the host's edgework.
pub trait BombInfo {
    fn serial_number(&self) -> &str;
    fn is_port_present(&self, port: Port) -> bool;
    fn lit_indicator_count(&self) -> usize;
    fn unlit_indicator_count(&self) -> usize;
    fn battery_count(&self) -> u32;
}

/// Concrete edgework snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Edgework {
    pub serial: String,
    pub lit_indicators: Vec<String>,
    pub unlit_indicators: Vec<String>,
    pub batteries: u32,
    pub ports: Vec<Port>,
}

impl BombInfo for Edgework {
    fn serial_number(&self) -> &str {
        &self.serial
    }

    fn is_port_present(&self, port: Port) -> bool {
        self.ports.contains(&port)
    }

    fn lit_indicator_count(&self) -> usize {
        self.lit_indicators.len()
    }

    fn unlit_indicator_count(&self) -> usize {
        self.unlit_indicators.len()
    }

    fn battery_count(&self) -> u32 {
        self.batteries
    }
}

/// Membership table of the decimal digits occurring in a serial number.
pub fn serial_digits(serial: &str) -> [bool; 10] {
    let mut digits = [false; 10];
    for d in serial.chars().filter_map(|c| c.to_digit(10)) {
        digits[d as usize] = true;
    }
    digits
}

/// Letters of a serial number, uppercased.
pub fn serial_letters(serial: &str) -> impl Iterator<Item = char> + '_ {
    serial
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_digits() {
        let digits = serial_digits("AB1C23");
        assert_eq!(
            digits,
            [false, true, true, true, false, false, false, false, false, false]
        );
    }

    #[test]
    fn test_serial_digits_none() {
        assert_eq!(serial_digits("ABCDEF"), [false; 10]);
    }

    #[test]
    fn test_serial_letters_uppercased() {
        let letters: String = serial_letters("a1b2Zq").collect();
        assert_eq!(letters, "ABZQ");
    }

    #[test]
    fn test_edgework_bomb_info() {
        let bomb = Edgework {
            serial: "XK4LE9".into(),
            lit_indicators: vec!["BOB".into()],
            unlit_indicators: vec![],
            batteries: 3,
            ports: vec![Port::Ps2, Port::Rj45],
        };
        assert_eq!(bomb.serial_number(), "XK4LE9");
        assert!(bomb.is_port_present(Port::Ps2));
        assert!(!bomb.is_port_present(Port::Parallel));
        assert_eq!(bomb.lit_indicator_count(), 1);
        assert_eq!(bomb.unlit_indicator_count(), 0);
        assert_eq!(bomb.battery_count(), 3);
    }

    #[test]
    fn test_edgework_deserialize_defaults() {
        let bomb: Edgework =
            serde_json::from_str(r#"{"serial":"AB1C23","ports":["ps2","stereo_rca"]}"#).unwrap();
        assert_eq!(bomb.batteries, 0);
        assert!(bomb.lit_indicators.is_empty());
        assert_eq!(bomb.ports, vec![Port::Ps2, Port::StereoRca]);
    }
}
