//! Pitch-class decoding
//!
//! Maps the leading alphabetic run of a note token to a letter or rest
//! kind plus its sounding accidental, per the active dialect. This is a
//! pure lookup; octave marks and duration digits are handled by the
//! note-block builder.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::{Accidental, Dialect, NoteName, PitchClass, PitchKind};

use super::errors::ConversionError;

/// Exact-match table for the regular accidental suffixes
static ACCIDENTAL_SUFFIXES: Lazy<HashMap<&'static str, Accidental>> = Lazy::new(|| {
    HashMap::from([
        ("is", Accidental::Sharp),
        ("es", Accidental::Flat),
        ("isis", Accidental::DoubleSharp),
        ("eses", Accidental::DoubleFlat),
    ])
});

/// Decode the pitch-class substring of a note token.
///
/// A single character resolves through the letter table; the basic
/// dialect additionally accepts `r` (rest), `R` (full-measure rest) and
/// `s` (spacer). Longer input decodes its first character as the letter
/// and the remainder as an accidental suffix ("fis" is F sharp, "deses"
/// is D double-flat).
pub fn decode_pitch_class(markup: &str, dialect: Dialect) -> Result<PitchClass, ConversionError> {
    let mut chars = markup.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return Err(ConversionError::PitchClass(markup.to_string())),
    };

    if chars.next().is_none() {
        return decode_single(first, dialect).ok_or_else(|| {
            ConversionError::PitchClass(markup.to_string())
        });
    }

    // Longer than one character: the first character must be a letter,
    // the rest an accidental suffix.
    let letter = match decode_single(first, dialect) {
        Some(PitchClass {
            kind: PitchKind::Letter(letter),
            ..
        }) => letter,
        _ => return Err(ConversionError::PitchClass(markup.to_string())),
    };

    let suffix = &markup[first.len_utf8()..];
    let accidental = match (letter, suffix) {
        // Irregular shorthand spellings: "as" spells a single sharp,
        // "es" a flat.
        (NoteName::A, "s") => Accidental::Sharp,
        (NoteName::E, "s") => Accidental::Flat,
        _ => match ACCIDENTAL_SUFFIXES.get(suffix) {
            Some(accidental) => *accidental,
            None => return Err(ConversionError::PitchClass(markup.to_string())),
        },
    };

    Ok(PitchClass::pitched(letter, Some(accidental)))
}

/// Decode one character: a pitch letter, or a rest/space kind in the
/// basic dialect.
fn decode_single(c: char, dialect: Dialect) -> Option<PitchClass> {
    if let Some(letter) = NoteName::from_char(c) {
        return Some(PitchClass::pitched(letter, None));
    }
    if dialect == Dialect::Basic {
        return match c {
            'r' => Some(PitchClass::unpitched(PitchKind::Rest)),
            'R' => Some(PitchClass::unpitched(PitchKind::MeasureRest)),
            's' => Some(PitchClass::unpitched(PitchKind::Space)),
            _ => None,
        };
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(markup: &str) -> PitchClass {
        decode_pitch_class(markup, Dialect::Basic).unwrap()
    }

    #[test]
    fn test_plain_letters() {
        assert_eq!(decode("f"), PitchClass::pitched(NoteName::F, None));
        assert_eq!(decode("a"), PitchClass::pitched(NoteName::A, None));
    }

    #[test]
    fn test_regular_suffixes() {
        assert_eq!(
            decode("fis"),
            PitchClass::pitched(NoteName::F, Some(Accidental::Sharp))
        );
        assert_eq!(
            decode("ges"),
            PitchClass::pitched(NoteName::G, Some(Accidental::Flat))
        );
        assert_eq!(
            decode("fisis"),
            PitchClass::pitched(NoteName::F, Some(Accidental::DoubleSharp))
        );
        assert_eq!(
            decode("deses"),
            PitchClass::pitched(NoteName::D, Some(Accidental::DoubleFlat))
        );
    }

    #[test]
    fn test_irregular_shorthands() {
        assert_eq!(
            decode("as"),
            PitchClass::pitched(NoteName::A, Some(Accidental::Sharp))
        );
        assert_eq!(
            decode("es"),
            PitchClass::pitched(NoteName::E, Some(Accidental::Flat))
        );
    }

    #[test]
    fn test_decoding_is_pure() {
        let first = decode("fis");
        let second = decode("fis");
        assert_eq!(first, second);
    }

    #[test]
    fn test_unrecognized_letter_fails() {
        assert_eq!(
            decode_pitch_class("z", Dialect::Basic),
            Err(ConversionError::PitchClass("z".to_string()))
        );
    }

    #[test]
    fn test_unrecognized_suffix_fails() {
        assert_eq!(
            decode_pitch_class("fs", Dialect::Basic),
            Err(ConversionError::PitchClass("fs".to_string()))
        );
        assert_eq!(
            decode_pitch_class("fi", Dialect::Basic),
            Err(ConversionError::PitchClass("fi".to_string()))
        );
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(decode_pitch_class("", Dialect::Basic).is_err());
    }

    #[test]
    fn test_basic_dialect_rest_kinds() {
        assert_eq!(decode("r"), PitchClass::unpitched(PitchKind::Rest));
        assert_eq!(decode("R"), PitchClass::unpitched(PitchKind::MeasureRest));
        assert_eq!(decode("s"), PitchClass::unpitched(PitchKind::Space));
    }

    #[test]
    fn test_enhanced_dialect_rejects_rest_kinds() {
        for markup in ["r", "R", "s"] {
            assert_eq!(
                decode_pitch_class(markup, Dialect::Enhanced),
                Err(ConversionError::PitchClass(markup.to_string())),
                "{markup:?} should not decode in the enhanced dialect"
            );
        }
    }

    #[test]
    fn test_suffix_on_rest_kind_fails() {
        // "r" decodes alone in the basic dialect, but a suffix needs a
        // letter in front of it.
        assert_eq!(
            decode_pitch_class("res", Dialect::Basic),
            Err(ConversionError::PitchClass("res".to_string()))
        );
    }
}
