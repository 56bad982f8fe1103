//! Summary ordering.
//!
//! Matches are ranked by total score, highest first. Equal totals are broken
//! by sequence number, most recently started first. Sequence numbers are
//! unique, so this is a total order and the sort needs no stability.

use std::cmp::Ordering;

use super::models::Match;

/// Compare two matches for summary position. `Ordering::Less` means `a` is
/// listed before `b`.
pub fn summary_order(a: &Match, b: &Match) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.sequence().cmp(&a.sequence()))
}

/// Sort a slice of match references into summary order.
pub fn rank(matches: &mut [&Match]) {
    matches.sort_unstable_by(|a, b| summary_order(a, b));
}
