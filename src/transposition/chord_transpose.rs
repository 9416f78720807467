//! Single chord transposition
//!
//! Only the root moves. Everything after the root spelling is copied
//! verbatim, and a token whose root is not a scale name comes back as-is.

use crate::models::ChordToken;
use super::offset::SemitoneOffset;

pub struct ChordTransposer;

impl ChordTransposer {
    pub fn transpose(token: &ChordToken, offset: SemitoneOffset) -> String {
        match token.root {
            Some(root) => {
                let new_root = root.shifted(offset.semitones());
                format!("{}{}", new_root.as_str(), token.suffix)
            }
            None => token.text.clone(),
        }
    }
}
