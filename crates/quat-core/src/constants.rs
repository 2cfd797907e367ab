/// Number of numbered buttons. Slot `n` is labelled with the digit `n`.
pub const SLOT_COUNT: usize = 10;

/// Numbered buttons sharing each color.
pub const SLOTS_PER_COLOR: usize = 2;

/// Display capacity: digits plus an optional leading minus sign.
pub const MAX_INPUT_LEN: usize = 6;

/// Table A, Yellow: primes reachable by summing two distinct digits.
pub const YELLOW_PRIMES: [u32; 7] = [2, 3, 5, 7, 11, 13, 17];

/// Table A, Blue: any of these letters in the serial number.
pub const BLUE_LETTERS: [char; 4] = ['B', 'L', 'U', 'E'];

/// Prefix used when identifying a module instance in logs.
pub const MODULE_NAME: &str = "Quaternions";
