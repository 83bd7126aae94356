//! One bit per letter: bit 0 is `A`, bit 25 is `Z`.
//!
//! Two words share no letters exactly when the AND of their masks is zero,
//! which is the only test the search ever performs.

use crate::error::{Error, Result};

pub type LetterMask = u32;

pub const ALPHABET_SIZE: u32 = 26;

/// Position of an uppercase ASCII letter in the alphabet.
pub fn letter_index(c: u8) -> Option<u32> {
    c.is_ascii_uppercase().then(|| (c - b'A') as u32)
}

/// Mask of the distinct letters in `word`.
///
/// # Panics
///
/// If `word` contains anything but `A`..=`Z`. Use [`try_letter_mask`] on
/// unchecked input.
pub fn letter_mask(word: &str) -> LetterMask {
    word.bytes().fold(0, |mask, c| {
        assert!(c.is_ascii_uppercase(), "not an uppercase letter in {word:?}");
        mask | 1 << (c - b'A')
    })
}

pub fn try_letter_mask(word: &str) -> Result<LetterMask> {
    let mut mask = 0;
    for c in word.chars() {
        let idx = u8::try_from(c)
            .ok()
            .and_then(letter_index)
            .ok_or_else(|| Error::InvalidLetter {
                word: word.to_string(),
                letter: c,
            })?;
        mask |= 1 << idx;
    }
    Ok(mask)
}

/// The letters of `mask` in alphabetical order.
pub fn mask_letters(mask: LetterMask) -> String {
    (0..ALPHABET_SIZE)
        .filter(|n| mask & (1 << n) != 0)
        .map(|n| (b'A' + n as u8) as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_mask() {
        assert_eq!(letter_mask("AAAAA"), 0b1);
        assert_eq!(letter_mask("BBBBB"), 0b10);
        assert_eq!(letter_mask("ZZZZZ"), 0b10_0000_0000_0000_0000_0000_0000);
        assert_eq!(letter_mask("AZHKG"), 0b10_0000_0000_0000_0100_1100_0001);
        assert_eq!(letter_mask(""), 0);
    }

    #[test]
    #[should_panic(expected = "not an uppercase letter")]
    fn test_letter_mask_rejects_lowercase() {
        letter_mask("glyph");
    }

    #[test]
    #[should_panic(expected = "not an uppercase letter")]
    fn test_letter_mask_rejects_punctuation() {
        letter_mask("CAN'T");
    }

    #[test]
    fn test_distinct_letters_popcount() {
        assert_eq!(letter_mask("WALTZ").count_ones(), 5);
        assert_eq!(letter_mask("APPLE").count_ones(), 4);
    }

    #[test]
    fn test_try_letter_mask_rejects_non_letters() {
        assert_eq!(try_letter_mask("GLYPH").unwrap(), letter_mask("GLYPH"));
        match try_letter_mask("CAN'T") {
            Err(Error::InvalidLetter { word, letter }) => {
                assert_eq!(word, "CAN'T");
                assert_eq!(letter, '\'');
            }
            other => panic!("expected InvalidLetter, got {other:?}"),
        }
        assert!(matches!(
            try_letter_mask("glyph"),
            Err(Error::InvalidLetter { letter: 'g', .. })
        ));
        assert!(matches!(
            try_letter_mask("ÉCRIT"),
            Err(Error::InvalidLetter { letter: 'É', .. })
        ));
    }

    #[test]
    fn test_mask_letters() {
        assert_eq!(mask_letters(letter_mask("WALTZ")), "ALTWZ");
        assert_eq!(mask_letters(0), "");
        assert_eq!(letter_index(b'A'), Some(0));
        assert_eq!(letter_index(b'Z'), Some(25));
        assert_eq!(letter_index(b'a'), None);
    }
}
