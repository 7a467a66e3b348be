use crate::Occurrence;

/// Move the last occurrence of `occurrences` into descending-frequency order.
///
/// Everything before the last element must already be sorted by descending
/// frequency. The insertion point is found by binary search over that prefix;
/// an occurrence whose frequency ties existing ones lands after all of them,
/// so equal frequencies keep their merge order.
///
/// Returns the midpoint indices probed by the search, in order. The trace is
/// empty when there was nothing to search (zero or one element).
pub fn insert_last_occurrence(occurrences: &mut Vec<Occurrence>) -> Vec<usize> {
    let mut mids = Vec::new();
    let Some(last) = occurrences.pop() else { return mids };

    // closed window [lo, hi - 1]; [0, lo) holds frequencies >= last's
    let (mut lo, mut hi) = (0, occurrences.len());
    while lo < hi {
        let mid = (lo + hi - 1) / 2;
        mids.push(mid);
        if occurrences[mid].frequency < last.frequency {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    occurrences.insert(lo, last);
    mids
}
