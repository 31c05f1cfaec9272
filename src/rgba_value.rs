// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB and RGBA value records.
//!
//! These records are contextual-scale: the same shape carries 8-bit channels
//! (0-255) or normalized channels (0-1) depending on which converter produced
//! them. Channels are `f64` because arithmetic opt-outs
//! ([`Color::add`](crate::Color::add) with overflow allowed,
//! [`Color::subtract`](crate::Color::subtract) with negatives allowed) can
//! legitimately move a channel outside the byte range.

/// Lossy conversion of a wide numeric channel into a single byte.
///
/// Out-of-range values saturate at the byte boundaries and `NaN` maps to 0,
/// which is the behavior of Rust's float-to-int `as` casts.
pub trait LossyConvertToByte {
    fn to_u8_lossy(self) -> u8;
}

impl LossyConvertToByte for f64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn to_u8_lossy(self) -> u8 { self as u8 }
}

/// An alpha-less RGB color record.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct RgbValue {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

/// An RGB color record with an alpha channel.
///
/// This is also the shape of the canonical representation held by
/// [`Color`](crate::Color), where every channel is an integer-valued `f64` on
/// the 0-255 scale.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct RgbaValue {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl RgbValue {
    /// Attach an alpha channel, producing an [`RgbaValue`].
    ///
    /// The alpha is taken verbatim; it must already be on the same scale as
    /// the RGB channels (255 for fully-opaque 8-bit records, 1.0 for
    /// normalized records).
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> RgbaValue {
        RgbaValue {
            red: self.red,
            green: self.green,
            blue: self.blue,
            alpha,
        }
    }
}

mod convenience_conversions {
    use super::{RgbValue, RgbaValue};

    impl From<(f64, f64, f64)> for RgbValue {
        fn from((red, green, blue): (f64, f64, f64)) -> Self {
            Self { red, green, blue }
        }
    }

    impl From<(f64, f64, f64, f64)> for RgbaValue {
        fn from((red, green, blue, alpha): (f64, f64, f64, f64)) -> Self {
            Self {
                red,
                green,
                blue,
                alpha,
            }
        }
    }

    /// Drop the alpha channel.
    impl From<RgbaValue> for RgbValue {
        fn from(rgba: RgbaValue) -> Self {
            Self {
                red: rgba.red,
                green: rgba.green,
                blue: rgba.blue,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_with_alpha() {
        let rgb = RgbValue {
            red: 1.0,
            green: 2.0,
            blue: 3.0,
        };
        let rgba = rgb.with_alpha(255.0);
        assert_eq!(
            (rgba.red, rgba.green, rgba.blue, rgba.alpha),
            (1.0, 2.0, 3.0, 255.0)
        );
    }

    #[test]
    fn test_drop_alpha() {
        let rgba = RgbaValue {
            red: 10.0,
            green: 20.0,
            blue: 30.0,
            alpha: 128.0,
        };
        assert_eq!(
            RgbValue::from(rgba),
            RgbValue {
                red: 10.0,
                green: 20.0,
                blue: 30.0
            }
        );
    }

    #[test_case(0.0, 0)]
    #[test_case(255.0, 255)]
    #[test_case(127.6, 127)]
    #[test_case(-42.0, 0)]
    #[test_case(300.0, 255)]
    #[test_case(f64::NAN, 0)]
    fn test_to_u8_lossy(input: f64, expected: u8) {
        assert_eq!(input.to_u8_lossy(), expected);
    }
}
