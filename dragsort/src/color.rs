use alloc::string::String;

use rand::Rng;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Returns a `#RRGGBB` color with each hex digit drawn uniformly from `rng`.
pub fn random_color_with<R: Rng>(rng: &mut R) -> String {
    let mut color = String::with_capacity(7);
    color.push('#');
    for _ in 0..6 {
        let idx = rng.random_range(0..HEX_DIGITS.len());
        color.push(HEX_DIGITS[idx] as char);
    }
    color
}

/// Returns a `#RRGGBB` color drawn from the thread-local generator.
#[cfg(feature = "std")]
#[must_use]
pub fn random_color() -> String {
    random_color_with(&mut rand::rng())
}
