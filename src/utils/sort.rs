use std::cmp::Ordering;

/// Ranking order for `(index, score)` pairs:
/// score descending, then index ascending.
///
/// `total_cmp` gives a total order, so NaN never makes the sort unstable
/// (a NaN score sorts above +inf in descending order; callers filter NaN
/// before ranking).
#[inline(always)]
pub fn rank_order(a: &(usize, f64), b: &(usize, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// Sort in place by [`rank_order`].
#[inline]
pub fn sort_by_score_desc(entries: &mut [(usize, f64)]) {
    entries.sort_unstable_by(rank_order);
}

/// Keep the best `k` entries by [`rank_order`], sorted.
///
/// For `k` much smaller than the input this partitions first
/// (O(n) select + O(k log k) sort) instead of sorting everything.
pub fn top_k_by_score(mut entries: Vec<(usize, f64)>, k: usize) -> Vec<(usize, f64)> {
    if k == 0 {
        return Vec::new();
    }
    if k < entries.len() {
        entries.select_nth_unstable_by(k - 1, rank_order);
        entries.truncate(k);
    }
    sort_by_score_desc(&mut entries);
    entries
}
