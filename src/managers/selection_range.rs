use std::ops::RangeInclusive;

/// Rows spanned by a shift-click, independent of click direction.
pub(crate) fn inclusive_index_range(
    anchor_index: usize,
    target_index: usize,
    len: usize,
) -> Option<RangeInclusive<usize>> {
    if anchor_index >= len || target_index >= len {
        return None;
    }
    Some(anchor_index.min(target_index)..=anchor_index.max(target_index))
}
