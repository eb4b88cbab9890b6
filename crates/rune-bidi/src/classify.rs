//! Character classification, the engine's input seam.

use crate::class::BidiClass;
use crate::mirror::mirrored_glyph;
use crate::record::CharRecord;

/// Assigns each character its bidi class and mirror glyph.
pub trait BidiClassifier {
    fn classify(&self, ch: char) -> BidiClass;

    fn mirror(&self, ch: char) -> Option<char> {
        mirrored_glyph(ch)
    }

    /// Build a record for `ch` at logical position `index`.
    fn record(&self, ch: char, index: usize) -> CharRecord {
        let mut record = CharRecord::new(ch, self.classify(ch)).with_mirror(self.mirror(ch));
        record.logical_index = index;
        record.display_order_index = index;
        record
    }
}

/// Classifier backed by the Unicode Character Database tables shipped
/// with `unicode-bidi`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeClassifier;

impl BidiClassifier for UnicodeClassifier {
    fn classify(&self, ch: char) -> BidiClass {
        unicode_bidi::bidi_class(ch).into()
    }
}

impl<F> BidiClassifier for F
where
    F: Fn(char) -> BidiClass,
{
    fn classify(&self, ch: char) -> BidiClass {
        self(ch)
    }
}
