use crate::gremlins::{classify, is_gremlin, Gremlin};
use std::borrow::Cow;

/// Replace space-like gremlins with U+0020 and drop the invisible ones.
///
/// Text without gremlins is returned borrowed, so an owned result always
/// differs from the input.
pub fn clean(input: &str) -> Cow<'_, str> {
    let Some(first) = input.find(is_gremlin) else {
        return Cow::Borrowed(input);
    };

    let mut out = String::with_capacity(input.len());
    out.push_str(&input[..first]);
    for c in input[first..].chars() {
        match classify(c) {
            None => out.push(c),
            Some(gremlin) => {
                if let Some(replacement) = gremlin.replacement() {
                    out.push(replacement);
                }
            }
        }
    }
    Cow::Owned(out)
}

/// Count the gremlins [`clean`] would touch
pub fn tally(input: &str) -> Tally {
    let mut tally = Tally::default();
    for c in input.chars() {
        match classify(c) {
            Some(Gremlin::SpaceLike) => tally.replaced += 1,
            Some(Gremlin::Invisible) => tally.removed += 1,
            None => {}
        }
    }
    tally
}

/// Number of characters replaced and removed by a clean
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub replaced: usize,
    pub removed: usize,
}

impl Tally {
    pub fn is_clean(&self) -> bool {
        self.replaced == 0 && self.removed == 0
    }

    pub fn total(&self) -> usize {
        self.replaced + self.removed
    }
}
