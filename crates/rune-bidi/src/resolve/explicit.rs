//! Explicit embedding levels and directional overrides (X1-X9).

use log::debug;

use crate::class::BidiClass;
use crate::levels::MAX_DEPTH;
use crate::record::{CharRecord, OverrideStatus};

#[derive(Debug, Clone, Copy)]
struct Frame {
    level: u8,
    status: OverrideStatus,
}

/// Embedding stack for one paragraph. Never shared between calls.
#[derive(Debug)]
pub(crate) struct EmbeddingStack {
    frames: Vec<Frame>,
    overflow: usize,
}

impl EmbeddingStack {
    pub(crate) fn new(paragraph_level: u8) -> Self {
        let mut frames = Vec::with_capacity(MAX_DEPTH as usize + 2);
        frames.push(Frame {
            level: paragraph_level,
            status: OverrideStatus::Neutral,
        });
        Self {
            frames,
            overflow: 0,
        }
    }

    fn top(&self) -> Frame {
        // The seed frame is never popped.
        self.frames[self.frames.len() - 1]
    }

    fn push(&mut self, rtl: bool, status: OverrideStatus) {
        let current = self.top().level;
        let next = if rtl {
            (current + 1) | 1
        } else {
            (current + 2) & !1
        };
        if next > MAX_DEPTH || self.overflow > 0 {
            self.overflow += 1;
            debug!("bidi: embedding depth exceeded at level {current}, push ignored");
            return;
        }
        self.frames.push(Frame {
            level: next,
            status,
        });
    }

    fn pop(&mut self) {
        if self.overflow > 0 {
            self.overflow -= 1;
        } else if self.frames.len() > 1 {
            self.frames.pop();
        } else {
            debug!("bidi: unbalanced PDF ignored");
        }
    }
}

/// Assign explicit levels and apply overrides, then drop formatting codes.
pub(crate) fn resolve_explicit(records: &mut Vec<CharRecord>, paragraph_level: u8) {
    let mut stack = EmbeddingStack::new(paragraph_level);

    for record in records.iter_mut() {
        record.level = paragraph_level;
        match record.class {
            BidiClass::RLE => stack.push(true, OverrideStatus::Neutral),
            BidiClass::LRE => stack.push(false, OverrideStatus::Neutral),
            BidiClass::RLO => stack.push(true, OverrideStatus::ForceRtl),
            BidiClass::LRO => stack.push(false, OverrideStatus::ForceLtr),
            BidiClass::PDF => stack.pop(),
            BidiClass::BN => {}
            _ => {
                let top = stack.top();
                record.level = top.level;
                match top.status {
                    OverrideStatus::Neutral => {}
                    OverrideStatus::ForceLtr => record.class = BidiClass::L,
                    OverrideStatus::ForceRtl => record.class = BidiClass::R,
                }
            }
        }
    }

    strip_formatting_codes(records);
}

/// X9: remove every embedding, override, PDF and BN record.
pub(crate) fn strip_formatting_codes(records: &mut Vec<CharRecord>) {
    records.retain(|record| !record.class.is_removed_by_x9());
}
