//! Second pass: reorder one resolved line into visual order (L1-L4).

use crate::class::BidiClass;
use crate::config::{ReorderConfig, ReorderMode};
use crate::record::CharRecord;
use crate::resolve::dump;

/// Reorder a single line of resolved records.
///
/// `records` is one line (or a whole paragraph) that already went through
/// [`crate::resolve::resolve_logical_levels`]. Display indices are
/// numbered from `base_index`, so consecutive lines of a paragraph can
/// share one index space. Calling this on records that are already in
/// visual order is not supported: there is no inverse transform.
pub fn reorder_to_visual(
    records: &mut [CharRecord],
    paragraph_level: u8,
    config: &ReorderConfig,
    base_index: usize,
) {
    reset_whitespace_levels(records, paragraph_level);

    let levels: Vec<u8> = records.iter().map(|r| r.level).collect();
    let order = reorder_visual(&levels);

    match config.mode {
        ReorderMode::DisplayIndex => {
            for (visual, &logical) in order.iter().enumerate() {
                records[logical].display_order_index = base_index + visual;
            }
        }
        ReorderMode::SwapRecords => {
            let logical: Vec<CharRecord> = records.to_vec();
            for (visual, &index) in order.iter().enumerate() {
                records[visual] = logical[index];
                records[visual].display_order_index = base_index + visual;
            }
        }
    }

    // L3 (combining marks) is not applied.

    apply_mirroring(records);
    dump("reorder", records);
}

/// L1: separators, and whitespace before them or at the end of the line,
/// go back to the paragraph level. Uses the classifier's classes since
/// resolution has already rewritten whitespace.
pub fn reset_whitespace_levels(records: &mut [CharRecord], paragraph_level: u8) {
    let mut trailing = true;
    for record in records.iter_mut().rev() {
        match record.original_class() {
            BidiClass::S | BidiClass::B => {
                record.level = paragraph_level;
                trailing = true;
            }
            BidiClass::WS if trailing => record.level = paragraph_level,
            _ => trailing = false,
        }
    }
}

/// L2: visual-to-logical index map for a line of levels.
///
/// `map[v]` is the logical index drawn at visual position `v`.
pub fn reorder_visual(levels: &[u8]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..levels.len()).collect();
    let Some(&max_level) = levels.iter().max() else {
        return order;
    };

    for level in (1..=max_level).rev() {
        let mut start = 0;
        while start < order.len() {
            if levels[order[start]] < level {
                start += 1;
                continue;
            }
            let mut end = start + 1;
            while end < order.len() && levels[order[end]] >= level {
                end += 1;
            }
            order[start..end].reverse();
            start = end;
        }
    }
    order
}

/// L4: swap in mirrored glyphs for right-to-left records.
pub fn apply_mirroring(records: &mut [CharRecord]) {
    for record in records.iter_mut() {
        if record.class == BidiClass::R {
            if let Some(mirror) = record.mirror {
                record.character = mirror;
            }
        }
    }
}
