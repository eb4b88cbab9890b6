//! First pass: logical levels for one paragraph.
//!
//! Explicit embeddings, level runs, weak and neutral type resolution and
//! implicit levels. All cursor state lives in call-scoped values, so
//! independent paragraphs can be resolved concurrently.

pub mod runs;

mod explicit;
mod implicit;
mod neutral;
mod weak;

use log::{debug, log_enabled, trace, Level};

use crate::levels::{paragraph_level, BaseDirection};
use crate::record::CharRecord;

pub use runs::{level_runs, LevelRun};

/// Outcome of [`resolve_logical_levels`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Levels were resolved at this paragraph level.
    Resolved { paragraph_level: u8 },
    /// No strong character and no forced direction: levels were left at
    /// 0, which renders as plain left-to-right text.
    NoStrongCharacter,
}

impl Resolution {
    /// Paragraph level to use for reordering.
    pub fn paragraph_level(self) -> u8 {
        match self {
            Resolution::Resolved { paragraph_level } => paragraph_level,
            Resolution::NoStrongCharacter => 0,
        }
    }
}

/// Resolve embedding and implicit levels for one paragraph, in place.
///
/// Formatting codes (`LRE`, `RLE`, `LRO`, `RLO`, `PDF`, `BN`) are removed
/// from `records`. Must run before [`crate::reorder::reorder_to_visual`].
pub fn resolve_logical_levels(records: &mut Vec<CharRecord>, base_dir: BaseDirection) -> Resolution {
    let Some(para_level) = paragraph_level(records, base_dir) else {
        debug!("bidi: no strong character in paragraph, keeping logical order");
        for record in records.iter_mut() {
            record.level = 0;
        }
        explicit::strip_formatting_codes(records);
        return Resolution::NoStrongCharacter;
    };

    explicit::resolve_explicit(records, para_level);
    dump("explicit", records);

    for run in level_runs(records) {
        let mut ctx = runs::RunContext::new(records, &run);
        weak::resolve_weak(&mut ctx);
        neutral::resolve_neutral(&mut ctx);
        implicit::resolve_implicit(&mut ctx);
    }
    dump("implicit", records);

    Resolution::Resolved {
        paragraph_level: para_level,
    }
}

pub(crate) fn dump(stage: &str, records: &[CharRecord]) {
    if !log_enabled!(Level::Trace) {
        return;
    }
    trace!("bidi: after {stage}");
    for (i, r) in records.iter().enumerate() {
        trace!(
            "{i:03} : {:02} {:?} {}({}) {:03}",
            r.level,
            r.character,
            r.class,
            r.original_class(),
            r.display_order_index
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::BidiClass::{self, *};

    fn records(classes: &[BidiClass]) -> Vec<CharRecord> {
        classes.iter().map(|&c| CharRecord::new('x', c)).collect()
    }

    fn levels(records: &[CharRecord]) -> Vec<u8> {
        records.iter().map(|r| r.level).collect()
    }

    #[test]
    fn mixed_ltr_with_rtl_segment() {
        let mut recs = records(&[L, WS, R, R, WS, L]);
        let res = resolve_logical_levels(&mut recs, BaseDirection::Auto);
        assert_eq!(res, Resolution::Resolved { paragraph_level: 0 });
        assert_eq!(levels(&recs), vec![0, 0, 1, 1, 0, 0]);
    }

    #[test]
    fn numbers_inside_rtl_are_raised_to_even_level() {
        let mut recs = records(&[R, WS, EN, EN, WS, R]);
        resolve_logical_levels(&mut recs, BaseDirection::Auto);
        assert_eq!(levels(&recs), vec![1, 1, 2, 2, 1, 1]);
    }

    #[test]
    fn no_strong_character_keeps_default_levels() {
        let mut recs = records(&[EN, WS, RLE, ON, PDF]);
        let res = resolve_logical_levels(&mut recs, BaseDirection::Auto);
        assert_eq!(res, Resolution::NoStrongCharacter);
        assert_eq!(res.paragraph_level(), 0);
        assert_eq!(levels(&recs), vec![0, 0, 0]);
        assert!(recs.iter().all(|r| !r.class.is_removed_by_x9()));
    }

    #[test]
    fn forced_direction_resolves_without_strong_characters() {
        let mut recs = records(&[EN, WS, EN]);
        let res = resolve_logical_levels(&mut recs, BaseDirection::Rtl);
        assert_eq!(res, Resolution::Resolved { paragraph_level: 1 });
        assert_eq!(levels(&recs), vec![2, 1, 2]);
    }

    #[test]
    fn embedded_rtl_inside_ltr() {
        let mut recs = records(&[L, RLE, L, PDF, L]);
        resolve_logical_levels(&mut recs, BaseDirection::Auto);
        assert_eq!(recs.len(), 3);
        assert_eq!(levels(&recs), vec![0, 2, 0]);
    }

    #[test]
    fn empty_paragraph_has_no_strong_character() {
        let mut recs = Vec::new();
        assert_eq!(
            resolve_logical_levels(&mut recs, BaseDirection::Auto),
            Resolution::NoStrongCharacter
        );
    }
}
