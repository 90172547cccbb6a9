//! Graph coloring for parallel-safe pair resolution.
//!
//! Two link pairs conflict when they touch a common cross-section (and
//! therefore a common mass point). Greedy coloring organizes candidate
//! pairs into batches with no conflicts inside a batch: pairs within a
//! batch may resolve concurrently, and running batches in color order
//! makes the accumulated result independent of evaluation order.

use corda_types::{LinkId, SectionId};

/// A candidate link pair `(i, j)` with `j − i ≥ 2`.
pub type LinkPair = (LinkId, LinkId);

/// Cross-sections touched by a pair: link `l` spans sections `l` and `l+1`.
#[inline]
fn touched_sections((i, j): LinkPair) -> [SectionId; 4] {
    let (a0, a1) = i.sections();
    let (b0, b1) = j.sections();
    [a0, a1, b0, b1]
}

/// Colors candidate pairs into conflict-free batches.
///
/// Returns `(sorted_pairs, batch_offsets)`:
/// - `sorted_pairs` — the input pairs reordered so each batch is contiguous
/// - `batch_offsets` — indices into `sorted_pairs` where each batch starts
///   (always ends with `sorted_pairs.len()`)
///
/// No two pairs inside a batch share a cross-section, hence no mass point.
pub fn color_pairs(pairs: &[LinkPair], link_count: usize) -> (Vec<LinkPair>, Vec<usize>) {
    if pairs.is_empty() {
        return (Vec::new(), vec![0]);
    }

    let section_count = link_count + 1;

    // Cross-section → pairs touching it.
    let mut section_to_pairs: Vec<Vec<usize>> = vec![Vec::new(); section_count];
    for (pi, &pair) in pairs.iter().enumerate() {
        for section in touched_sections(pair) {
            section_to_pairs[section.index()].push(pi);
        }
    }

    // Pair-pair conflict adjacency.
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); pairs.len()];
    for sharing in &section_to_pairs {
        for (i, &pi) in sharing.iter().enumerate() {
            for &pj in &sharing[i + 1..] {
                adjacency[pi].push(pj);
                adjacency[pj].push(pi);
            }
        }
    }

    // Greedy coloring: lowest color not used by any conflicting pair.
    // Degrees can exceed 64 on long chains, so track used colors with a
    // per-pair scratch vector rather than a fixed-width bitmask.
    let mut colors: Vec<usize> = vec![usize::MAX; pairs.len()];
    let mut used: Vec<bool> = Vec::new();
    let mut max_color = 0;

    for pi in 0..pairs.len() {
        used.clear();
        used.resize(max_color + 2, false);
        for &neighbor in &adjacency[pi] {
            let c = colors[neighbor];
            if c < used.len() {
                used[c] = true;
            }
        }
        let color = used
            .iter()
            .position(|&taken| !taken)
            .unwrap_or(used.len());
        colors[pi] = color;
        max_color = max_color.max(color);
    }

    // Flatten into color-ordered batches.
    let mut batches: Vec<Vec<LinkPair>> = vec![Vec::new(); max_color + 1];
    for (pi, &color) in colors.iter().enumerate() {
        batches[color].push(pairs[pi]);
    }

    let mut sorted_pairs = Vec::with_capacity(pairs.len());
    let mut batch_offsets = vec![0usize];
    for batch in &batches {
        sorted_pairs.extend_from_slice(batch);
        batch_offsets.push(sorted_pairs.len());
    }

    (sorted_pairs, batch_offsets)
}
