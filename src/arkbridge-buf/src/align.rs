//! Utilities for working with buffer alignment.

/// Aligns `value` down to the next multiple of `align`.
///
/// # Panics
///
/// Panics in debug mode when `align` is not a power of two.
#[inline(always)]
pub const fn align_down(value: usize, align: usize) -> usize {
    debug_assert!(align.is_power_of_two());
    value & !(align - 1)
}

/// Aligns `value` up to the next multiple of `align`.
///
/// # Panics
///
/// Panics in debug mode when `align` is not a power of two.
#[inline(always)]
pub const fn align_up(value: usize, align: usize) -> usize {
    align_down(value + align - 1, align)
}

/// Computes how many padding bytes are needed to bring `offset`
/// to a multiple of `align`.
///
/// An `align` of 0 or 1 never requires padding.
#[inline]
pub const fn padding_for(offset: usize, align: usize) -> usize {
    if align <= 1 {
        0
    } else {
        align_up(offset, align) - offset
    }
}
