//! Mirrored glyph lookup for right-to-left text.
//!
//! Covers brackets, quotation marks and the common relational operators.
//! Full Unicode `Bidi_Mirroring_Glyph` data is larger than this.

/// Return the mirror-image counterpart of `ch`, if it has one.
pub fn mirrored_glyph(ch: char) -> Option<char> {
    let mirror = match ch {
        '(' => ')',
        ')' => '(',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        '<' => '>',
        '>' => '<',
        '«' => '»',
        '»' => '«',
        '‹' => '›',
        '›' => '‹',
        '≤' => '≥',
        '≥' => '≤',
        '⁅' => '⁆',
        '⁆' => '⁅',
        '⟨' => '⟩',
        '⟩' => '⟨',
        '⟪' => '⟫',
        '⟫' => '⟪',
        '〈' => '〉',
        '〉' => '〈',
        '《' => '》',
        '》' => '《',
        '「' => '」',
        '」' => '「',
        '『' => '』',
        '』' => '『',
        '【' => '】',
        '】' => '【',
        _ => return None,
    };
    Some(mirror)
}
