// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Conversion between 8-bit RGBA and hex color strings.
//!
//! Output format is exactly `rrggbbaa`: each channel as 2 lowercase hex
//! digits, no `#` prefix. Input accepts an optional leading `#` and the
//! shorthand forms: 3 or 4 digits expand by duplicating each digit, 6 digits
//! get an implicit `ff` alpha.

use nom::{IResult, Parser,
          bytes::complete::take_while1,
          character::complete::char,
          combinator::{all_consuming, opt},
          sequence::preceded};

use super::packed_to_rgba255;
use crate::{ColorError, ColorResult, HexString, LossyConvertToByte, RgbaValue};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Format an 8-bit RGBA record as an 8-character lowercase hex string.
#[must_use]
pub fn rgba255_to_hex(rgba255: RgbaValue) -> HexString {
    let mut acc = HexString::new();
    for channel in [rgba255.red, rgba255.green, rgba255.blue, rgba255.alpha] {
        let byte = channel.to_u8_lossy();
        acc.push(HEX_DIGITS[usize::from(byte >> 4)] as char);
        acc.push(HEX_DIGITS[usize::from(byte & 0x0F)] as char);
    }
    acc
}

/// Recognize an optional `#` followed by one or more ASCII hex digits.
fn hex_digits(input: &str) -> IResult<&str, &str> {
    preceded(
        opt(char('#')),
        take_while1(|character: char| character.is_ascii_hexdigit()),
    )
    .parse(input)
}

/// Parse a hex color string into an 8-bit RGBA record.
///
/// Accepted forms (with or without a leading `#`): `rgb`, `rgba`, `rrggbb`,
/// `rrggbbaa`. Shorthand digits are duplicated (`f00` becomes `ff0000`), and
/// a missing alpha defaults to `ff`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHexFormat`] when the input contains non-hex
/// characters or normalizes to a digit count other than 8.
pub fn hex_to_rgba255(input: &str) -> ColorResult<RgbaValue> {
    let Ok((_, digits)) = all_consuming(hex_digits).parse(input) else {
        return Err(reject(input));
    };

    let mut normalized = HexString::new();
    match digits.len() {
        3 | 4 => {
            for digit in digits.chars() {
                normalized.push(digit);
                normalized.push(digit);
            }
        }
        6 | 8 => normalized.push_str(digits),
        _ => return Err(reject(input)),
    }
    if normalized.len() == 6 {
        normalized.push_str("ff");
    }

    let packed = u32::from_str_radix(&normalized, 16).map_err(|_| reject(input))?;
    Ok(packed_to_rgba255(packed))
}

fn reject(input: &str) -> ColorError {
    tracing::debug!(input, "rejected hex color string");
    ColorError::InvalidHexFormat {
        input: input.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> RgbaValue {
        RgbaValue {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[test_case(rgba(255.0, 0.0, 0.0, 255.0), "ff0000ff")]
    #[test_case(rgba(0.0, 0.0, 0.0, 0.0), "00000000")]
    #[test_case(rgba(1.0, 2.0, 3.0, 4.0), "01020304")]
    #[test_case(rgba(171.0, 204.0, 242.0, 255.0), "abccf2ff")]
    fn test_rgba255_to_hex(rgba255: RgbaValue, expected: &str) {
        assert_eq!(&rgba255_to_hex(rgba255)[..], expected);
    }

    #[test_case("#f00", rgba(255.0, 0.0, 0.0, 255.0); "shorthand rgb with hash")]
    #[test_case("f00", rgba(255.0, 0.0, 0.0, 255.0); "shorthand rgb")]
    #[test_case("#1234", rgba(17.0, 34.0, 51.0, 68.0); "shorthand rgba")]
    #[test_case("abccf2", rgba(171.0, 204.0, 242.0, 255.0); "six digits implicit alpha")]
    #[test_case("#01020304", rgba(1.0, 2.0, 3.0, 4.0); "full eight digits")]
    #[test_case("FF0000FF", rgba(255.0, 0.0, 0.0, 255.0); "uppercase digits")]
    fn test_hex_to_rgba255(input: &str, expected: RgbaValue) {
        assert_eq!(hex_to_rgba255(input).unwrap(), expected);
    }

    #[test_case(""; "empty")]
    #[test_case("#"; "hash only")]
    #[test_case("#ff000"; "five digits")]
    #[test_case("ff00000"; "seven digits")]
    #[test_case("ff0000ff0"; "nine digits")]
    #[test_case("gggggg"; "not hex digits")]
    #[test_case("#ff00zz"; "trailing junk")]
    #[test_case("ff 00 00"; "embedded spaces")]
    fn test_hex_to_rgba255_rejects(input: &str) {
        assert_eq!(
            hex_to_rgba255(input),
            Err(ColorError::InvalidHexFormat {
                input: input.into()
            })
        );
    }

    #[test]
    fn test_round_trip_is_exact() {
        for channel in (0..=255).step_by(17) {
            let rgba255 = rgba(
                f64::from(channel),
                f64::from(255 - channel),
                f64::from(channel / 3),
                f64::from(channel),
            );
            let hex = rgba255_to_hex(rgba255);
            assert_eq!(hex_to_rgba255(&hex).unwrap(), rgba255);
        }
    }
}
