//! Level runs and the `sor`/`eor` boundary sentinels (X10).

use core::ops::Range;

use crate::class::BidiClass;
use crate::record::CharRecord;

/// A maximal span of records sharing one explicit level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRun {
    pub range: Range<usize>,
    pub level: u8,
    pub sor: BidiClass,
    pub eor: BidiClass,
}

/// Split records into level runs and compute their boundary types.
pub fn level_runs(records: &[CharRecord]) -> Vec<LevelRun> {
    let mut spans: Vec<(Range<usize>, u8)> = Vec::new();
    let mut start = 0;
    while start < records.len() {
        let level = records[start].level;
        let mut end = start + 1;
        while end < records.len() && records[end].level == level {
            end += 1;
        }
        spans.push((start..end, level));
        start = end;
    }

    let mut runs = Vec::with_capacity(spans.len());
    for (i, (range, level)) in spans.iter().enumerate() {
        let sor = match i.checked_sub(1).map(|p| spans[p].1) {
            Some(prev) => BidiClass::for_level(prev.max(*level)),
            None => records[range.start].class,
        };
        let eor = match spans.get(i + 1) {
            Some((_, next)) => BidiClass::for_level((*next).max(*level)),
            None => last_strong(&records[range.clone()]).unwrap_or(BidiClass::for_level(*level)),
        };
        runs.push(LevelRun {
            range: range.clone(),
            level: *level,
            sor,
            eor,
        });
    }
    runs
}

// The final run closes on the direction the text actually ends in, so
// strings that start in one direction and end in the other keep their
// trailing neutrals with the last strong text.
fn last_strong(records: &[CharRecord]) -> Option<BidiClass> {
    records.iter().rev().find_map(|record| match record.class {
        BidiClass::L => Some(BidiClass::L),
        BidiClass::R | BidiClass::AL => Some(BidiClass::R),
        _ => None,
    })
}

/// Cursor over one run. Reads outside the run yield `sor` before it and
/// `eor` after it.
pub(crate) struct RunContext<'a> {
    records: &'a mut [CharRecord],
    start: usize,
    end: usize,
    sor: BidiClass,
    eor: BidiClass,
}

impl<'a> RunContext<'a> {
    pub(crate) fn new(records: &'a mut [CharRecord], run: &LevelRun) -> Self {
        Self {
            records,
            start: run.range.start,
            end: run.range.end,
            sor: run.sor,
            eor: run.eor,
        }
    }

    pub(crate) fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub(crate) fn sor(&self) -> BidiClass {
        self.sor
    }

    /// Class at `index`, with sentinels past either edge of the run.
    pub(crate) fn class_at(&self, index: usize) -> BidiClass {
        if index < self.start {
            self.sor
        } else if index >= self.end {
            self.eor
        } else {
            self.records[index].class
        }
    }

    /// Class immediately before `index`.
    pub(crate) fn class_before(&self, index: usize) -> BidiClass {
        match index.checked_sub(1) {
            Some(prev) => self.class_at(prev),
            None => self.sor,
        }
    }

    pub(crate) fn set_class(&mut self, index: usize, class: BidiClass) {
        debug_assert!(self.range().contains(&index));
        self.records[index].class = class;
    }

    pub(crate) fn record(&self, index: usize) -> &CharRecord {
        &self.records[index]
    }

    pub(crate) fn record_mut(&mut self, index: usize) -> &mut CharRecord {
        &mut self.records[index]
    }

    /// End (exclusive) of the maximal run of records matching `pred`
    /// starting at `index`, clamped to the run.
    pub(crate) fn span_end(&self, index: usize, pred: impl Fn(BidiClass) -> bool) -> usize {
        let mut end = index;
        while end < self.end && pred(self.records[end].class) {
            end += 1;
        }
        end
    }
}
