// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common helpers shared by the path operations.

/// Make a structural copy of `value`.
///
/// The copy shares no mutable state with the original as long as `T` owns
/// its data, which holds for every type in this crate. Nested sequences are
/// copied element by element and the copy keeps the original's type.
///
/// ```
/// use easel::{deep_clone, Point};
///
/// let rings = vec![vec![Point::new(0., 0.)], vec![Point::new(1., 1.)]];
/// let mut copy = deep_clone(&rings);
/// copy[0][0].x = 5.0;
/// assert_eq!(rings[0][0].x, 0.0);
/// ```
#[inline]
pub fn deep_clone<T: Clone>(value: &T) -> T {
    value.clone()
}

/// Resolve an index that may count from the end, for element access.
///
/// Returns `None` when the index does not address an element.
pub(crate) fn element_index(index: isize, len: usize) -> Option<usize> {
    if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        let ix = index.unsigned_abs();
        (ix < len).then_some(ix)
    }
}

/// Resolve a range bound that may count from the end, clamping it to
/// `0..=len`.
pub(crate) fn clamp_index(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(len)
    }
}

/// Resolve the starting point of a backwards search.
///
/// Returns `None` when the search would start before the first element.
pub(crate) fn last_index_from(index: isize, len: usize) -> Option<usize> {
    let last = len.checked_sub(1)?;
    if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        Some(index.unsigned_abs().min(last))
    }
}
