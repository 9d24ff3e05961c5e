//! Conversions between integers and fixed-width minterm patterns.

use log::debug;

use crate::cube::{Bit, Cube};

/// Number of variables needed to represent every number in `numbers`.
///
/// Returns `0` for an empty input. Otherwise this is `ceil(log2(max + 1))`,
/// except that a lone `0` still gets one variable.
pub fn width(numbers: &[u64]) -> usize {
    let Some(&max) = numbers.iter().max() else {
        return 0;
    };
    let bits = (u64::BITS - max.leading_zeros()) as usize;
    let width = bits.max(1);
    debug!("width(max = {}) = {}", max, width);
    width
}

/// The `width`-bit pattern of `n`, most significant bit first.
///
/// When `width` is smaller than the bit length of `n`, the high-order bits are
/// dropped: the result is the pattern of `n mod 2^width`. Widths above 64 are
/// padded with leading zeros.
pub fn to_binary(n: u64, width: usize) -> Cube {
    let bits: Vec<Bit> = (0..width)
        .rev()
        .map(|shift| {
            if shift < 64 && (n >> shift) & 1 == 1 {
                Bit::One
            } else {
                Bit::Zero
            }
        })
        .collect();
    Cube::new(bits)
}

/// Decodes a dash-free pattern back into its integer value.
///
/// Returns `None` if the pattern contains `-` or has set bits beyond the 64th.
pub fn from_binary(cube: &Cube) -> Option<u64> {
    let mut value: u64 = 0;
    for &b in cube.bits() {
        let bit = match b {
            Bit::Dash => return None,
            Bit::Zero => 0,
            Bit::One => 1,
        };
        value = value.checked_mul(2)?.checked_add(bit)?;
    }
    Some(value)
}
