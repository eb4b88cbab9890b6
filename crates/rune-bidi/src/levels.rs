use serde::{Deserialize, Serialize};

use crate::class::BidiClass;
use crate::record::CharRecord;

/// Deepest explicit embedding level a push may reach.
pub const MAX_DEPTH: u8 = 125;

/// Base direction hint for paragraph analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseDirection {
    /// Detect paragraph base direction from text (first strong char).
    #[default]
    Auto,
    /// Force overall left-to-right base direction.
    Ltr,
    /// Force overall right-to-left base direction.
    Rtl,
}

impl BaseDirection {
    pub fn to_level(self) -> Option<u8> {
        match self {
            BaseDirection::Auto => None,
            BaseDirection::Ltr => Some(0),
            BaseDirection::Rtl => Some(1),
        }
    }
}

/// Paragraph direction classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphDirection {
    Ltr,
    Rtl,
    Mixed,
}

/// Level of the first strong character, or `None` when there is none.
pub fn first_strong_level(records: &[CharRecord]) -> Option<u8> {
    records.iter().find_map(|record| match record.class {
        BidiClass::L => Some(0),
        BidiClass::R | BidiClass::AL => Some(1),
        _ => None,
    })
}

/// Paragraph level for the given hint, falling back to detection.
pub fn paragraph_level(records: &[CharRecord], base_dir: BaseDirection) -> Option<u8> {
    base_dir.to_level().or_else(|| first_strong_level(records))
}

/// Summarize resolved levels: a single parity is `Ltr`/`Rtl`, both is `Mixed`.
pub fn paragraph_direction(records: &[CharRecord], para_level: u8) -> ParagraphDirection {
    let has_ltr = records.iter().any(|r| !r.is_rtl_level());
    let has_rtl = records.iter().any(|r| r.is_rtl_level());
    match (has_ltr, has_rtl) {
        (true, true) => ParagraphDirection::Mixed,
        (false, true) => ParagraphDirection::Rtl,
        (true, false) => ParagraphDirection::Ltr,
        (false, false) if para_level & 1 == 1 => ParagraphDirection::Rtl,
        (false, false) => ParagraphDirection::Ltr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(classes: &[BidiClass]) -> Vec<CharRecord> {
        classes.iter().map(|&c| CharRecord::new('x', c)).collect()
    }

    #[test]
    fn detects_paragraph_level_from_first_strong() {
        use crate::class::BidiClass::*;
        assert_eq!(first_strong_level(&records(&[WS, EN, AL, L])), Some(1));
        assert_eq!(first_strong_level(&records(&[ON, L, R])), Some(0));
    }

    #[test]
    fn no_strong_character_yields_none() {
        use crate::class::BidiClass::*;
        assert_eq!(first_strong_level(&records(&[EN, WS, ON])), None);
        assert_eq!(first_strong_level(&[]), None);
    }

    #[test]
    fn base_direction_override_ltr() {
        use crate::class::BidiClass::*;
        let recs = records(&[R, R]);
        assert_eq!(paragraph_level(&recs, BaseDirection::Ltr), Some(0));
        assert_eq!(paragraph_level(&recs, BaseDirection::Auto), Some(1));
    }

    #[test]
    fn mixed_levels_are_reported_as_mixed() {
        let mut recs = records(&[BidiClass::L, BidiClass::R]);
        recs[1].level = 1;
        assert_eq!(paragraph_direction(&recs, 0), ParagraphDirection::Mixed);
        recs[0].level = 1;
        assert_eq!(paragraph_direction(&recs, 0), ParagraphDirection::Rtl);
    }
}
