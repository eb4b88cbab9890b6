use core::ops::Range;

use crate::classify::BidiClassifier;
use crate::config::{BidiConfig, ReorderConfig};
use crate::error::{BidiError, Result};
use crate::levels::{paragraph_direction, BaseDirection, ParagraphDirection};
use crate::record::CharRecord;
use crate::reorder::reorder_to_visual;
use crate::resolve::{resolve_logical_levels, Resolution};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Logical,
    Resolved(Resolution),
    Visual(Resolution),
}

/// One paragraph of records moving from logical to visual order.
///
/// The two passes must run in order and each exactly once:
/// [`Paragraph::resolve_logical_levels`] then
/// [`Paragraph::reorder_to_visual`] (or
/// [`Paragraph::reorder_lines_to_visual`]).
#[derive(Debug, Clone)]
pub struct Paragraph {
    records: Vec<CharRecord>,
    stage: Stage,
}

impl Paragraph {
    /// Wrap records in logical order. Logical and display indices are
    /// numbered from 0.
    pub fn new(mut records: Vec<CharRecord>) -> Self {
        for (i, record) in records.iter_mut().enumerate() {
            record.logical_index = i;
            record.display_order_index = i;
        }
        Self {
            records,
            stage: Stage::Logical,
        }
    }

    pub fn from_text(text: &str, classifier: &impl BidiClassifier) -> Self {
        let records = text
            .chars()
            .enumerate()
            .map(|(i, ch)| classifier.record(ch, i))
            .collect();
        Self {
            records,
            stage: Stage::Logical,
        }
    }

    pub fn records(&self) -> &[CharRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<CharRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether any record could need right-to-left handling. Paragraphs
    /// without one come out in logical order.
    pub fn contains_rtl(&self) -> bool {
        self.records.iter().any(|r| r.original_class().is_rtl())
    }

    pub fn resolution(&self) -> Option<Resolution> {
        match self.stage {
            Stage::Logical => None,
            Stage::Resolved(res) | Stage::Visual(res) => Some(res),
        }
    }

    /// Paragraph level, once resolved. `0` when no strong character was found.
    pub fn paragraph_level(&self) -> Option<u8> {
        self.resolution().map(Resolution::paragraph_level)
    }

    pub fn direction(&self) -> Option<ParagraphDirection> {
        self.paragraph_level()
            .map(|level| paragraph_direction(&self.records, level))
    }

    pub fn levels(&self) -> Vec<u8> {
        self.records.iter().map(|r| r.level).collect()
    }

    pub fn is_visual(&self) -> bool {
        matches!(self.stage, Stage::Visual(_))
    }

    /// First pass: explicit embeddings through implicit levels.
    pub fn resolve_logical_levels(&mut self, base_dir: BaseDirection) -> Result<Resolution> {
        match self.stage {
            Stage::Logical => {}
            Stage::Resolved(_) => return Err(BidiError::AlreadyResolved),
            Stage::Visual(_) => return Err(BidiError::AlreadyVisual),
        }
        let res = resolve_logical_levels(&mut self.records, base_dir);
        self.stage = Stage::Resolved(res);
        Ok(res)
    }

    /// Second pass over the whole paragraph as a single line.
    pub fn reorder_to_visual(&mut self, config: &ReorderConfig) -> Result<()> {
        let len = self.records.len();
        self.reorder_lines_to_visual(&[0..len], config)
    }

    /// Second pass, line by line. `lines` must be contiguous ranges that
    /// together cover every record (after formatting codes were removed).
    /// Each line gets its own trailing whitespace handling and reversal;
    /// display indices stay unique across the paragraph.
    pub fn reorder_lines_to_visual(
        &mut self,
        lines: &[Range<usize>],
        config: &ReorderConfig,
    ) -> Result<()> {
        let res = match self.stage {
            Stage::Logical => return Err(BidiError::NotResolved),
            Stage::Resolved(res) => res,
            Stage::Visual(_) => return Err(BidiError::AlreadyVisual),
        };
        self.check_lines(lines)?;

        let para_level = res.paragraph_level();
        for line in lines {
            reorder_to_visual(
                &mut self.records[line.clone()],
                para_level,
                config,
                line.start,
            );
        }
        self.stage = Stage::Visual(res);
        Ok(())
    }

    /// Resolve and reorder in one call, following `config`.
    pub fn process(&mut self, config: &BidiConfig) -> Result<Resolution> {
        let res = self.resolve_logical_levels(config.paragraph.base_direction)?;
        self.reorder_to_visual(&config.reorder)?;
        Ok(res)
    }

    /// Logical indices in drawing order.
    pub fn visual_order(&self) -> Vec<usize> {
        let mut order: Vec<&CharRecord> = self.records.iter().collect();
        order.sort_by_key(|r| r.display_order_index);
        order.into_iter().map(|r| r.logical_index).collect()
    }

    /// Characters in drawing order, including mirrored glyphs.
    pub fn visual_string(&self) -> String {
        let mut order: Vec<&CharRecord> = self.records.iter().collect();
        order.sort_by_key(|r| r.display_order_index);
        order.into_iter().map(|r| r.character).collect()
    }

    fn check_lines(&self, lines: &[Range<usize>]) -> Result<()> {
        let len = self.records.len();
        let mut expected = 0;
        for line in lines {
            if line.start != expected || line.end < line.start || line.end > len {
                return Err(BidiError::InvalidLineRanges {
                    len,
                    start: line.start,
                    end: line.end,
                });
            }
            expected = line.end;
        }
        if expected != len {
            return Err(BidiError::InvalidLineRanges {
                len,
                start: expected,
                end: len,
            });
        }
        Ok(())
    }
}
