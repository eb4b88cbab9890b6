use crate::class::BidiClass;

/// Directional override imposed by an enclosing `LRO`/`RLO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverrideStatus {
    #[default]
    Neutral,
    ForceLtr,
    ForceRtl,
}

/// Per-character state carried through both passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRecord {
    /// Glyph to draw. Only the mirroring step rewrites it.
    pub character: char,
    /// Working class, rewritten by each resolution rule.
    pub class: BidiClass,
    /// Embedding level, later the resolved level.
    pub level: u8,
    /// Mirror-image glyph, applied when the record resolves to `R`.
    pub mirror: Option<char>,
    /// Position at which the record is drawn. Set by reordering.
    pub display_order_index: usize,
    /// Index of the record in the caller's input.
    pub logical_index: usize,
    original_class: BidiClass,
}

impl CharRecord {
    pub fn new(character: char, class: BidiClass) -> Self {
        Self {
            character,
            class,
            level: 0,
            mirror: None,
            display_order_index: 0,
            logical_index: 0,
            original_class: class,
        }
    }

    pub fn with_mirror(mut self, mirror: Option<char>) -> Self {
        self.mirror = mirror;
        self
    }

    /// Class assigned by the classifier. Never changes.
    pub fn original_class(&self) -> BidiClass {
        self.original_class
    }

    pub fn is_rtl_level(&self) -> bool {
        self.level & 1 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn working_class_starts_from_original() {
        let mut record = CharRecord::new('(', BidiClass::ON).with_mirror(Some(')'));
        assert_eq!(record.class, BidiClass::ON);
        record.class = BidiClass::R;
        assert_eq!(record.original_class(), BidiClass::ON);
        assert_eq!(record.mirror, Some(')'));
        assert_eq!(record.level, 0);
    }
}
