//! Gap selection and shrinking.

/// Factor by which the gap is divided after every pass.
pub const SHRINK_FACTOR: f64 = 1.3;

/// Returns the gap of the pass following one run at `gap`.
///
/// Never returns 0, so the loop always reaches a gap-1 pass.
#[inline]
#[must_use]
pub fn next_gap(gap: usize) -> usize {
    shrink(gap).max(1)
}

/// Returns the gap of the first comparison pass over `len` elements.
///
/// A `custom` gap in `1..=len` is used as is: it is the gap of the first
/// pass, not a starting length that is shrunk once before that pass.
/// Anything else, including `None`, falls back to `floor(len / 1.3)`, or to
/// `len` itself when that rounds down to 0 (only possible for `len <= 1`).
#[must_use]
pub fn initial_gap(len: usize, custom: Option<usize>) -> usize {
    match custom {
        Some(gap) if (1..=len).contains(&gap) => gap,
        _ => match shrink(len) {
            0 => len,
            gap => gap,
        },
    }
}

#[inline]
fn shrink(gap: usize) -> usize {
    (gap as f64 / SHRINK_FACTOR) as usize
}
