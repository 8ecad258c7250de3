//! The fixed character sets that count as gremlins.

/// Characters that render as a blank but are not U+0020. Each becomes a plain space.
pub const SPACE_LIKE: &[char] = &[
    '\u{00A0}', // no-break space
    '\u{1680}', // ogham space mark
    '\u{180E}', // mongolian vowel separator
    '\u{2000}', // en quad
    '\u{2001}', // em quad
    '\u{2002}', // en space
    '\u{2003}', // em space
    '\u{2004}', // three-per-em space
    '\u{2005}', // four-per-em space
    '\u{2006}', // six-per-em space
    '\u{2007}', // figure space
    '\u{2008}', // punctuation space
    '\u{2009}', // thin space
    '\u{200A}', // hair space
    '\u{202F}', // narrow no-break space
    '\u{205F}', // medium mathematical space
    '\u{3000}', // ideographic space
    '\u{FEFF}', // byte order mark
];

/// Zero-width, control and separator characters. Each is deleted.
pub const REMOVE: &[char] = &[
    '\u{00AD}', // soft hyphen
    '\u{200B}', // zero width space
    '\u{200C}', // zero width non-joiner
    '\u{200D}', // zero width joiner
    '\u{2060}', // word joiner
    '\u{2063}', // invisible separator
    '\u{2028}', // line separator
    '\u{2029}', // paragraph separator
    // C0 controls, minus tab, LF and CR
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{0004}', '\u{0005}', '\u{0006}',
    '\u{0007}', '\u{0008}', '\u{000B}', '\u{000C}', '\u{000E}', '\u{000F}', '\u{0010}',
    '\u{0011}', '\u{0012}', '\u{0013}', '\u{0014}', '\u{0015}', '\u{0016}', '\u{0017}',
    '\u{0018}', '\u{0019}', '\u{001A}', '\u{001B}', '\u{001C}', '\u{001D}', '\u{001E}',
    '\u{001F}',
    '\u{007F}', // delete
];

/// How a gremlin is dealt with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gremlin {
    /// Replaced by U+0020
    SpaceLike,
    /// Deleted
    Invisible,
}

impl Gremlin {
    /// The character that takes this gremlin's place, if any.
    pub fn replacement(self) -> Option<char> {
        match self {
            Gremlin::SpaceLike => Some(' '),
            Gremlin::Invisible => None,
        }
    }
}

/// Classify a single character. `None` means it is kept as-is.
///
/// Mirrors [`SPACE_LIKE`] and [`REMOVE`] exactly.
pub fn classify(c: char) -> Option<Gremlin> {
    match c {
        '\u{00A0}' | '\u{1680}' | '\u{180E}' | '\u{2000}'..='\u{200A}' | '\u{202F}'
        | '\u{205F}' | '\u{3000}' | '\u{FEFF}' => Some(Gremlin::SpaceLike),
        '\t' | '\n' | '\r' => None,
        '\u{0000}'..='\u{001F}'
        | '\u{007F}'
        | '\u{00AD}'
        | '\u{200B}'..='\u{200D}'
        | '\u{2060}'
        | '\u{2063}'
        | '\u{2028}'
        | '\u{2029}' => Some(Gremlin::Invisible),
        _ => None,
    }
}

pub fn is_gremlin(c: char) -> bool {
    classify(c).is_some()
}
