//! Bidi categories as consumed by the engine.

use core::fmt;
use core::str::FromStr;

use crate::error::BidiError;

/// Bidirectional category of a character.
///
/// This is the closed set the engine understands. Classifiers must map
/// anything else (for example the isolate controls) onto one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BidiClass {
    /// Strong left-to-right.
    L,
    /// Strong right-to-left.
    R,
    /// Arabic letter.
    AL,
    /// European number.
    EN,
    /// European separator.
    ES,
    /// European terminator.
    ET,
    /// Arabic number.
    AN,
    /// Common separator.
    CS,
    /// Nonspacing mark.
    NSM,
    /// Boundary neutral.
    BN,
    /// Paragraph separator.
    B,
    /// Segment separator.
    S,
    /// Whitespace.
    WS,
    /// Other neutral.
    ON,
    /// Left-to-right embedding.
    LRE,
    /// Right-to-left embedding.
    RLE,
    /// Left-to-right override.
    LRO,
    /// Right-to-left override.
    RLO,
    /// Pop directional format.
    PDF,
}

impl BidiClass {
    pub const ALL: [BidiClass; 19] = [
        BidiClass::L,
        BidiClass::R,
        BidiClass::AL,
        BidiClass::EN,
        BidiClass::ES,
        BidiClass::ET,
        BidiClass::AN,
        BidiClass::CS,
        BidiClass::NSM,
        BidiClass::BN,
        BidiClass::B,
        BidiClass::S,
        BidiClass::WS,
        BidiClass::ON,
        BidiClass::LRE,
        BidiClass::RLE,
        BidiClass::LRO,
        BidiClass::RLO,
        BidiClass::PDF,
    ];

    /// `L`, `R` or `AL`.
    pub fn is_strong(self) -> bool {
        matches!(self, BidiClass::L | BidiClass::R | BidiClass::AL)
    }

    /// `B`, `S`, `WS` or `ON`.
    pub fn is_neutral(self) -> bool {
        matches!(self, BidiClass::B | BidiClass::S | BidiClass::WS | BidiClass::ON)
    }

    /// Explicit formatting codes removed by the embedding resolver.
    pub fn is_removed_by_x9(self) -> bool {
        matches!(
            self,
            BidiClass::RLE
                | BidiClass::LRE
                | BidiClass::RLO
                | BidiClass::LRO
                | BidiClass::PDF
                | BidiClass::BN
        )
    }

    /// Classes that make a paragraph need bidi processing at all.
    pub fn is_rtl(self) -> bool {
        matches!(
            self,
            BidiClass::R | BidiClass::AL | BidiClass::RLE | BidiClass::RLO
        )
    }

    /// Boundary class for a level: `R` when odd, `L` when even.
    pub fn for_level(level: u8) -> Self {
        if level & 1 == 1 {
            BidiClass::R
        } else {
            BidiClass::L
        }
    }

    /// Short Unicode name, e.g. `"AN"`.
    pub fn as_str(self) -> &'static str {
        match self {
            BidiClass::L => "L",
            BidiClass::R => "R",
            BidiClass::AL => "AL",
            BidiClass::EN => "EN",
            BidiClass::ES => "ES",
            BidiClass::ET => "ET",
            BidiClass::AN => "AN",
            BidiClass::CS => "CS",
            BidiClass::NSM => "NSM",
            BidiClass::BN => "BN",
            BidiClass::B => "B",
            BidiClass::S => "S",
            BidiClass::WS => "WS",
            BidiClass::ON => "ON",
            BidiClass::LRE => "LRE",
            BidiClass::RLE => "RLE",
            BidiClass::LRO => "LRO",
            BidiClass::RLO => "RLO",
            BidiClass::PDF => "PDF",
        }
    }
}

impl fmt::Display for BidiClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for BidiClass {
    type Err = BidiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BidiClass::ALL
            .iter()
            .copied()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| BidiError::UnknownClass(s.to_string()))
    }
}

impl From<unicode_bidi::BidiClass> for BidiClass {
    fn from(class: unicode_bidi::BidiClass) -> Self {
        use unicode_bidi::BidiClass as U;
        match class {
            U::L => BidiClass::L,
            U::R => BidiClass::R,
            U::AL => BidiClass::AL,
            U::EN => BidiClass::EN,
            U::ES => BidiClass::ES,
            U::ET => BidiClass::ET,
            U::AN => BidiClass::AN,
            U::CS => BidiClass::CS,
            U::NSM => BidiClass::NSM,
            U::BN => BidiClass::BN,
            U::B => BidiClass::B,
            U::S => BidiClass::S,
            U::WS => BidiClass::WS,
            U::ON => BidiClass::ON,
            U::LRE => BidiClass::LRE,
            U::RLE => BidiClass::RLE,
            U::LRO => BidiClass::LRO,
            U::RLO => BidiClass::RLO,
            U::PDF => BidiClass::PDF,
            // Isolates are not part of the supported set.
            U::LRI | U::RLI | U::FSI | U::PDI => BidiClass::ON,
        }
    }
}

/// Parse a whitespace separated list of class names, e.g. `"L R R L"`.
pub fn parse_classes(input: &str) -> Result<Vec<BidiClass>, BidiError> {
    input.split_whitespace().map(str::parse).collect()
}
