#![forbid(unsafe_code)]

//! Geometry distribution.
//!
//! The [`distribute`] solver turns one linear extent and a list of
//! [`Bucket`]s into start/size [`Span`]s. Container widgets run it once
//! per axis: rows and columns for a grid, the single split axis for a
//! split box. It is a pure function — same inputs, same outputs.
//!
//! # Allocation rules
//!
//! - [`Bucket::Fixed`] sizes are honored exactly and never shrunk.
//! - Surplus space is split among flexible buckets with a nonzero expand
//!   weight, proportionally to weight. Integer division remainders are
//!   carried by the last eligible bucket so the sizes sum to the extent
//!   exactly.
//! - A flexible bucket with a `snap` granularity above 1 only accepts
//!   surplus in multiples of `snap`; the residue moves to the last
//!   eligible bucket, which ignores its own snap to preserve the sum.
//! - Deficit space shrinks flexible buckets proportionally to their base
//!   size, floored at zero. When fixed buckets alone exceed the extent
//!   the layout overflows silently; spans past the end are degenerate
//!   and callers withdraw the affected children.

use std::cmp::min;

/// The axis a container lays its children along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Left to right.
    Horizontal,
}

/// A layout unit consumed by [`distribute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// An exact size, used for spacing and dividers. Never shrunk.
    Fixed(u16),
    /// A base size plus a share of any surplus.
    Flexible {
        /// Size requested by the bucket's content.
        base: u16,
        /// Weight for surplus distribution. Zero means the bucket keeps
        /// its base size when surplus is available.
        expand: u16,
        /// Surplus granularity; `0` and `1` mean unrestricted.
        snap: u16,
    },
}

impl Bucket {
    /// A fixed bucket.
    #[must_use]
    pub const fn fixed(size: u16) -> Self {
        Self::Fixed(size)
    }

    /// A flexible bucket with no snap granularity.
    #[must_use]
    pub const fn flexible(base: u16, expand: u16) -> Self {
        Self::Flexible {
            base,
            expand,
            snap: 0,
        }
    }

    /// A flexible bucket that accepts surplus only in multiples of `snap`.
    #[must_use]
    pub const fn snapped(base: u16, expand: u16, snap: u16) -> Self {
        Self::Flexible { base, expand, snap }
    }
}

/// A solved position along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Offset from the start of the extent.
    pub start: u16,
    /// Allocated size.
    pub size: u16,
}

impl Span {
    /// Offset one past the end of the span.
    #[must_use]
    pub const fn end(&self) -> u16 {
        self.start.saturating_add(self.size)
    }
}

/// Solve bucket sizes and positions for one axis.
pub fn distribute(total: u16, buckets: &[Bucket]) -> Vec<Span> {
    let mut sizes: Vec<u16> = buckets
        .iter()
        .map(|b| match *b {
            Bucket::Fixed(size) => size,
            Bucket::Flexible { base, .. } => base,
        })
        .collect();

    let fixed_sum: u32 = buckets
        .iter()
        .map(|b| match *b {
            Bucket::Fixed(size) => size as u32,
            Bucket::Flexible { .. } => 0,
        })
        .sum();
    let base_sum: u32 = buckets
        .iter()
        .map(|b| match *b {
            Bucket::Fixed(_) => 0,
            Bucket::Flexible { base, .. } => base as u32,
        })
        .sum();

    if fixed_sum + base_sum <= total as u32 {
        grow(buckets, &mut sizes, total - (fixed_sum + base_sum) as u16);
    } else {
        shrink(buckets, &mut sizes, total, fixed_sum, base_sum);
    }

    let mut spans = Vec::with_capacity(sizes.len());
    let mut start = 0u16;
    for size in sizes {
        spans.push(Span { start, size });
        start = start.saturating_add(size);
    }
    spans
}

/// Distribute surplus to flexible buckets by expand weight.
fn grow(buckets: &[Bucket], sizes: &mut [u16], remaining: u16) {
    if remaining == 0 {
        return;
    }

    let eligible: Vec<usize> = buckets
        .iter()
        .enumerate()
        .filter(|&(_, b)| matches!(*b, Bucket::Flexible { expand, .. } if expand > 0))
        .map(|(i, _)| i)
        .collect();
    if eligible.is_empty() {
        // Nothing wants the surplus; it stays unallocated.
        return;
    }

    let total_weight: u32 = eligible
        .iter()
        .map(|&i| match buckets[i] {
            Bucket::Flexible { expand, .. } => expand as u32,
            Bucket::Fixed(_) => 0,
        })
        .sum();

    let mut allocated = 0u16;
    let last = eligible.len() - 1;
    for (k, &i) in eligible.iter().enumerate() {
        let extra = if k == last {
            // Last eligible bucket takes the rest, snap or no snap, so
            // the sizes sum to the extent exactly.
            remaining - allocated
        } else {
            let (expand, snap) = match buckets[i] {
                Bucket::Flexible { expand, snap, .. } => (expand as u32, snap),
                Bucket::Fixed(_) => (0, 0),
            };
            let mut share = (remaining as u32 * expand / total_weight) as u16;
            if snap > 1 {
                share -= share % snap;
            }
            min(share, remaining - allocated)
        };
        sizes[i] = sizes[i].saturating_add(extra);
        allocated += extra;
    }
}

/// Shrink flexible buckets proportionally to base size; fixed buckets
/// keep their size even when that overflows the extent.
fn shrink(buckets: &[Bucket], sizes: &mut [u16], total: u16, fixed_sum: u32, base_sum: u32) {
    let avail = (total as u32).saturating_sub(fixed_sum) as u16;

    let flex: Vec<usize> = buckets
        .iter()
        .enumerate()
        .filter(|&(_, b)| matches!(*b, Bucket::Flexible { .. }))
        .map(|(i, _)| i)
        .collect();
    if flex.is_empty() || base_sum == 0 {
        for &i in &flex {
            sizes[i] = 0;
        }
        return;
    }

    let mut allocated = 0u16;
    for &i in &flex {
        let base = match buckets[i] {
            Bucket::Flexible { base, .. } => base as u32,
            Bucket::Fixed(_) => 0,
        };
        let share = (avail as u32 * base / base_sum) as u16;
        sizes[i] = share;
        allocated += share;
    }

    // Hand the rounding leftover back one cell at a time, never past a
    // bucket's own base.
    let mut leftover = avail - allocated;
    for &i in &flex {
        if leftover == 0 {
            break;
        }
        let base = match buckets[i] {
            Bucket::Flexible { base, .. } => base,
            Bucket::Fixed(_) => 0,
        };
        let room = base.saturating_sub(sizes[i]);
        let add = min(room, leftover);
        sizes[i] += add;
        leftover -= add;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(spans: &[Span]) -> Vec<u16> {
        spans.iter().map(|s| s.size).collect()
    }

    #[test]
    fn fixed_only_exact_fit() {
        let spans = distribute(10, &[Bucket::fixed(4), Bucket::fixed(6)]);
        assert_eq!(sizes(&spans), vec![4, 6]);
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[1].start, 4);
    }

    #[test]
    fn surplus_goes_to_expanding_bucket() {
        let spans = distribute(
            20,
            &[
                Bucket::flexible(5, 0),
                Bucket::fixed(2),
                Bucket::flexible(5, 1),
            ],
        );
        assert_eq!(sizes(&spans), vec![5, 2, 13]);
    }

    #[test]
    fn surplus_split_by_weight_with_remainder_to_last() {
        // 10 surplus over weights 1:2 -> 3 and the remaining 7
        let spans = distribute(10, &[Bucket::flexible(0, 1), Bucket::flexible(0, 2)]);
        assert_eq!(sizes(&spans), vec![3, 7]);
        assert_eq!(sizes(&spans).iter().sum::<u16>(), 10);
    }

    #[test]
    fn zero_expand_keeps_base_under_surplus() {
        let spans = distribute(
            30,
            &[Bucket::flexible(4, 0), Bucket::flexible(6, 1)],
        );
        assert_eq!(spans[0].size, 4);
        assert_eq!(spans[1].size, 26);
    }

    #[test]
    fn surplus_with_no_expanding_bucket_stays_unallocated() {
        let spans = distribute(30, &[Bucket::flexible(4, 0), Bucket::fixed(6)]);
        assert_eq!(sizes(&spans), vec![4, 6]);
    }

    #[test]
    fn snap_rounds_surplus_down_to_multiple() {
        // Surplus 10 over weights 1:1 -> 5 each, but the first bucket
        // snaps to multiples of 3: it takes 3, the last takes 7.
        let spans = distribute(
            10,
            &[Bucket::snapped(0, 1, 3), Bucket::flexible(0, 1)],
        );
        assert_eq!(sizes(&spans), vec![3, 7]);
        assert_eq!(sizes(&spans).iter().sum::<u16>(), 10);
    }

    #[test]
    fn snap_on_last_bucket_yields_to_exact_sum() {
        let spans = distribute(
            10,
            &[Bucket::flexible(0, 1), Bucket::snapped(0, 1, 4)],
        );
        assert_eq!(sizes(&spans).iter().sum::<u16>(), 10);
    }

    #[test]
    fn deficit_shrinks_proportionally_to_base() {
        let spans = distribute(10, &[Bucket::flexible(10, 1), Bucket::flexible(10, 1)]);
        assert_eq!(sizes(&spans), vec![5, 5]);
    }

    #[test]
    fn deficit_never_shrinks_fixed() {
        let spans = distribute(
            8,
            &[Bucket::fixed(6), Bucket::flexible(10, 1)],
        );
        assert_eq!(sizes(&spans), vec![6, 2]);
    }

    #[test]
    fn fixed_overflow_zeroes_flexible() {
        let spans = distribute(
            4,
            &[Bucket::fixed(3), Bucket::flexible(5, 1), Bucket::fixed(3)],
        );
        assert_eq!(sizes(&spans), vec![3, 0, 3]);
        // Positions keep accumulating; the caller clips and withdraws.
        assert_eq!(spans[2].start, 3);
        assert_eq!(spans[2].end(), 6);
    }

    #[test]
    fn deficit_shrink_is_exact_sum() {
        let spans = distribute(
            8,
            &[
                Bucket::flexible(3, 1),
                Bucket::flexible(3, 1),
                Bucket::flexible(3, 1),
            ],
        );
        assert_eq!(sizes(&spans).iter().sum::<u16>(), 8);
        // No bucket grows past its base while others shrink
        for s in sizes(&spans) {
            assert!(s <= 3);
        }
    }

    #[test]
    fn empty_bucket_list() {
        assert!(distribute(10, &[]).is_empty());
    }

    #[test]
    fn zero_extent() {
        let spans = distribute(0, &[Bucket::flexible(5, 1), Bucket::fixed(2)]);
        assert_eq!(sizes(&spans), vec![0, 2]);
    }

    #[test]
    fn determinism() {
        let buckets = [
            Bucket::flexible(3, 2),
            Bucket::fixed(1),
            Bucket::snapped(4, 1, 2),
            Bucket::flexible(0, 3),
        ];
        assert_eq!(distribute(37, &buckets), distribute(37, &buckets));
    }
}
