// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`Color`] value: one canonical 8-bit RGBA color with lazily memoized
//! derived representations and arithmetic.
//!
//! A `Color` is created only through its named constructors, which normalize
//! the input model into canonical 8-bit RGBA and discard the original. It has
//! no mutating methods; every arithmetic operation returns a new `Color`. The
//! per-representation cache cells transition from unset to set at most once,
//! so a constructed `Color` can be shared across threads freely.

use core::fmt;

use once_cell::sync::OnceCell;
use smallvec::SmallVec;

use crate::{CmykValue, CmykaValue, ColorResult, HexString, HslValue, HslaValue,
            HsvValue, HsvaValue, RgbValue, RgbaValue, convert};

/// Conventional ramp size for [`Color::shades`].
pub const DEFAULT_SHADE_COUNT: usize = 10;

/// Conventional step for [`Color::lighter`] and [`Color::darker`].
pub const DEFAULT_LIGHTEN_STEP: f64 = 0.1;

pub mod sizing {
    use super::{Color, SmallVec};

    /// A ramp built with [`DEFAULT_SHADE_COUNT`](super::DEFAULT_SHADE_COUNT)
    /// holds 11 colors, so the default case stays on the stack.
    pub const MAX_SHADE_RAMP_INLINE_SIZE: usize = 11;
    pub type InlineVecShades = SmallVec<[Color; MAX_SHADE_RAMP_INLINE_SIZE]>;
}

/// A single immutable color.
///
/// The canonical representation is 8-bit RGBA; every other representation is
/// derived from it on first access and cached for the lifetime of the value.
///
/// ```rust
/// use rgba_color::Color;
///
/// let red = Color::from_rgba255(255.0, 0.0, 0.0, 255.0);
/// assert_eq!(&red.hexa()[..], "ff0000ff");
/// assert_eq!(red.hsv().hue, 0.0);
/// assert!(red.is_dark());
/// ```
#[derive(Clone)]
pub struct Color {
    rgba255: RgbaValue,
    rgba1: OnceCell<RgbaValue>,
    rgb255: OnceCell<RgbValue>,
    rgb1: OnceCell<RgbValue>,
    packed: OnceCell<u32>,
    hsva: OnceCell<HsvaValue>,
    hsv: OnceCell<HsvValue>,
    hsla: OnceCell<HslaValue>,
    hsl: OnceCell<HslValue>,
    cmyka: OnceCell<CmykaValue>,
    cmyk: OnceCell<CmykValue>,
    hexa: OnceCell<HexString>,
    hex: OnceCell<HexString>,
}

mod constructor_impl {
    use super::*;

    impl Color {
        /// The only way a `Color` comes to exist: wrap an already-canonical
        /// 8-bit RGBA record with an empty cache.
        pub(super) fn new(rgba255: RgbaValue) -> Self {
            Self {
                rgba255,
                rgba1: OnceCell::new(),
                rgb255: OnceCell::new(),
                rgb1: OnceCell::new(),
                packed: OnceCell::new(),
                hsva: OnceCell::new(),
                hsv: OnceCell::new(),
                hsla: OnceCell::new(),
                hsl: OnceCell::new(),
                cmyka: OnceCell::new(),
                cmyk: OnceCell::new(),
                hexa: OnceCell::new(),
                hex: OnceCell::new(),
            }
        }

        /// From 8-bit RGBA channels (0-255 each); every channel is rounded to
        /// the nearest integer. Out-of-range inputs are not validated.
        #[must_use]
        pub fn from_rgba255(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
            Self::new(RgbaValue {
                red: red.round(),
                green: green.round(),
                blue: blue.round(),
                alpha: alpha.round(),
            })
        }

        /// From normalized RGBA channels (0-1 each).
        #[must_use]
        pub fn from_rgba1(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
            Self::new(convert::rgba1_to_rgba255(RgbaValue {
                red,
                green,
                blue,
                alpha,
            }))
        }

        /// From 8-bit RGB channels; alpha defaults to fully opaque.
        #[must_use]
        pub fn from_rgb255(red: f64, green: f64, blue: f64) -> Self {
            Self::from_rgba255(red, green, blue, 255.0)
        }

        /// From normalized RGB channels; alpha defaults to fully opaque.
        #[must_use]
        pub fn from_rgb1(red: f64, green: f64, blue: f64) -> Self {
            Self::from_rgba1(red, green, blue, 1.0)
        }

        /// From a packed big-endian `u32` (`r` in the most significant byte,
        /// `a` in the least significant one).
        #[must_use]
        pub fn from_packed(value: u32) -> Self {
            Self::new(convert::packed_to_rgba255(value))
        }

        /// From HSVA: hue in degrees, saturation/value 0-1, alpha 0-255.
        #[must_use]
        pub fn from_hsva(hue: f64, saturation: f64, value: f64, alpha: f64) -> Self {
            Self::new(convert::hsva_to_rgba255(HsvaValue {
                hue,
                saturation,
                value,
                alpha: alpha / 255.0,
            }))
        }

        /// From HSV: hue in degrees, saturation/value 0-1; fully opaque.
        #[must_use]
        pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
            Self::from_hsva(hue, saturation, value, 255.0)
        }

        /// From HSLA: hue in degrees, saturation/lightness 0-1, alpha 0-255.
        #[must_use]
        pub fn from_hsla(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
            Self::new(convert::hsla_to_rgba255(HslaValue {
                hue,
                saturation,
                lightness,
                alpha: alpha / 255.0,
            }))
        }

        /// From HSL: hue in degrees, saturation/lightness 0-1; fully opaque.
        ///
        /// Note: this constructor feeds its arguments through the HSV path,
        /// so the third argument is treated as HSV value, not lightness. The
        /// result matches [`Color::from_hsv`] called with the same arguments,
        /// not [`Color::from_hsla`].
        #[must_use]
        pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
            Self::from_hsva(hue, saturation, lightness, 255.0)
        }

        /// From CMYKA: components 0-100, alpha 0-255.
        #[must_use]
        pub fn from_cmyka(cyan: f64, magenta: f64, yellow: f64, key: f64, alpha: f64) -> Self {
            Self::new(convert::cmyka_to_rgba255(CmykaValue {
                cyan,
                magenta,
                yellow,
                key,
                alpha: alpha / 255.0,
            }))
        }

        /// From CMYK components (0-100 each); fully opaque.
        #[must_use]
        pub fn from_cmyk(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Self {
            Self::from_cmyka(cyan, magenta, yellow, key, 255.0)
        }

        /// From a hex color string (optional leading `#`; 3, 4, 6, or 8 hex
        /// digits).
        ///
        /// # Errors
        ///
        /// Returns [`ColorError::InvalidHexFormat`](crate::ColorError) for
        /// anything else.
        pub fn try_from_hex(input: &str) -> ColorResult<Self> {
            convert::hex_to_rgba255(input).map(Self::new)
        }

        /// Infallible variant of [`Color::try_from_hex`].
        ///
        /// # Panics
        ///
        /// Panics if the input string is not a valid hex color format.
        #[must_use]
        pub fn from_hex(input: &str) -> Self {
            #[allow(clippy::match_wild_err_arm)]
            match Self::try_from_hex(input) {
                Ok(color) => color,
                Err(_) => panic!("Invalid hex color format: {input}"),
            }
        }
    }
}

mod accessor_impl {
    use super::*;

    impl Color {
        /// The canonical 8-bit RGBA representation.
        #[must_use]
        pub fn rgba255(&self) -> RgbaValue { self.rgba255 }

        /// Normalized (0-1) RGBA.
        #[must_use]
        pub fn rgba1(&self) -> RgbaValue {
            *self
                .rgba1
                .get_or_init(|| convert::rgba255_to_rgba1(self.rgba255))
        }

        /// 8-bit RGB (alpha dropped).
        #[must_use]
        pub fn rgb255(&self) -> RgbValue {
            *self.rgb255.get_or_init(|| RgbValue::from(self.rgba255))
        }

        /// Normalized (0-1) RGB (alpha dropped).
        #[must_use]
        pub fn rgb1(&self) -> RgbValue {
            *self.rgb1.get_or_init(|| RgbValue::from(self.rgba1()))
        }

        /// Packed big-endian `u32` (`r<<24 | g<<16 | b<<8 | a`).
        #[must_use]
        pub fn packed(&self) -> u32 {
            *self
                .packed
                .get_or_init(|| convert::rgba255_to_packed(self.rgba255))
        }

        /// HSVA: hue in rounded degrees, saturation/value rounded 0-100,
        /// alpha 0-1.
        #[must_use]
        pub fn hsva(&self) -> HsvaValue {
            *self
                .hsva
                .get_or_init(|| convert::rgba255_to_hsva(self.rgba255))
        }

        /// HSV projection of [`Color::hsva`].
        #[must_use]
        pub fn hsv(&self) -> HsvValue {
            *self.hsv.get_or_init(|| HsvValue::from(self.hsva()))
        }

        /// HSLA: hue in rounded degrees, saturation/lightness rounded 0-100,
        /// alpha 0-1.
        #[must_use]
        pub fn hsla(&self) -> HslaValue {
            *self
                .hsla
                .get_or_init(|| convert::rgba255_to_hsla(self.rgba255))
        }

        /// HSL projection of [`Color::hsla`].
        #[must_use]
        pub fn hsl(&self) -> HslValue {
            *self.hsl.get_or_init(|| HslValue::from(self.hsla()))
        }

        /// CMYKA: components rounded 0-100, alpha 0-1.
        #[must_use]
        pub fn cmyka(&self) -> CmykaValue {
            *self
                .cmyka
                .get_or_init(|| convert::rgba255_to_cmyka(self.rgba255))
        }

        /// CMYK projection of [`Color::cmyka`].
        #[must_use]
        pub fn cmyk(&self) -> CmykValue {
            *self.cmyk.get_or_init(|| CmykValue::from(self.cmyka()))
        }

        /// 8-character lowercase `rrggbbaa` hex string.
        #[must_use]
        pub fn hexa(&self) -> HexString {
            self.hexa
                .get_or_init(|| convert::rgba255_to_hex(self.rgba255))
                .clone()
        }

        /// 6-character lowercase `rrggbb` hex string (the first 6 characters
        /// of [`Color::hexa`]).
        #[must_use]
        pub fn hex(&self) -> HexString {
            self.hex
                .get_or_init(|| HexString::from_str(&self.hexa()[0..6]))
                .clone()
        }

        /// Sum of the three RGB channels on the 8-bit scale.
        #[must_use]
        pub fn rgb255_sum(&self) -> f64 {
            self.rgba255.red + self.rgba255.green + self.rgba255.blue
        }

        /// Sum of all four RGBA channels on the 8-bit scale.
        #[must_use]
        pub fn rgba255_sum(&self) -> f64 { self.rgb255_sum() + self.rgba255.alpha }

        /// Average of the three RGB channels on the 8-bit scale.
        #[must_use]
        pub fn rgb255_avg(&self) -> f64 { self.rgb255_sum() / 3.0 }

        /// Average of all four RGBA channels on the 8-bit scale.
        #[must_use]
        pub fn rgba255_avg(&self) -> f64 { self.rgba255_sum() / 4.0 }

        /// Sum of the three RGB channels on the normalized scale.
        #[must_use]
        pub fn rgb1_sum(&self) -> f64 {
            let rgba1 = self.rgba1();
            rgba1.red + rgba1.green + rgba1.blue
        }

        /// Sum of all four RGBA channels on the normalized scale.
        #[must_use]
        pub fn rgba1_sum(&self) -> f64 { self.rgb1_sum() + self.rgba1().alpha }

        /// Average of the three RGB channels on the normalized scale.
        #[must_use]
        pub fn rgb1_avg(&self) -> f64 { self.rgb1_sum() / 3.0 }

        /// Average of all four RGBA channels on the normalized scale.
        #[must_use]
        pub fn rgba1_avg(&self) -> f64 { self.rgba1_sum() / 4.0 }

        /// Whether the 8-bit RGB average falls below 127.
        #[must_use]
        pub fn is_dark(&self) -> bool { self.rgb255_avg() < 127.0 }

        /// The complement of [`Color::is_dark`].
        #[must_use]
        pub fn is_light(&self) -> bool { !self.is_dark() }

        /// A new color with each RGB channel replaced by its 255-complement;
        /// alpha is kept.
        #[must_use]
        pub fn inverted(&self) -> Color {
            Color::from_rgba255(
                255.0 - self.rgba255.red,
                255.0 - self.rgba255.green,
                255.0 - self.rgba255.blue,
                self.rgba255.alpha,
            )
        }
    }
}

mod arithmetic_impl {
    use super::*;

    /// Alpha defaulting shared by [`Color::subtract`], [`Color::diff`], and
    /// [`Color::add`]: an absent or zero alpha falls back to the common alpha
    /// of the two operands, or 255 when they disagree.
    fn resolve_alpha(alpha: Option<f64>, lhs: RgbaValue, rhs: RgbaValue) -> f64 {
        match alpha {
            Some(value) if value != 0.0 => value,
            _ => {
                if lhs.alpha == rhs.alpha {
                    lhs.alpha
                } else {
                    255.0
                }
            }
        }
    }

    impl Color {
        /// Per-channel RGB subtraction.
        ///
        /// Each of r, g, b, and the resolved alpha is clamped to >= 0 unless
        /// `allow_negative` is set.
        #[must_use]
        pub fn subtract(&self, other: &Color, alpha: Option<f64>, allow_negative: bool) -> Color {
            let lhs = self.rgba255;
            let rhs = other.rgba255;

            let mut red = lhs.red - rhs.red;
            let mut green = lhs.green - rhs.green;
            let mut blue = lhs.blue - rhs.blue;
            let mut alpha = resolve_alpha(alpha, lhs, rhs);

            if !allow_negative {
                red = red.max(0.0);
                green = green.max(0.0);
                blue = blue.max(0.0);
                alpha = alpha.max(0.0);
            }

            Color::from_rgba255(red, green, blue, alpha)
        }

        /// Per-channel absolute RGB difference.
        #[must_use]
        pub fn diff(&self, other: &Color, alpha: Option<f64>) -> Color {
            let lhs = self.rgba255;
            let rhs = other.rgba255;

            Color::from_rgba255(
                (lhs.red - rhs.red).abs(),
                (lhs.green - rhs.green).abs(),
                (lhs.blue - rhs.blue).abs(),
                resolve_alpha(alpha, lhs, rhs),
            )
        }

        /// Per-channel RGB addition.
        ///
        /// An absent alpha defaults to 255 outright; a zero alpha falls back
        /// to the common-or-255 rule. Each of r, g, b, and the resolved alpha
        /// is clamped to <= 255 unless `allow_overflow` is set.
        #[must_use]
        pub fn add(&self, other: &Color, alpha: Option<f64>, allow_overflow: bool) -> Color {
            let lhs = self.rgba255;
            let rhs = other.rgba255;

            let mut red = lhs.red + rhs.red;
            let mut green = lhs.green + rhs.green;
            let mut blue = lhs.blue + rhs.blue;
            let mut alpha = resolve_alpha(alpha.or(Some(255.0)), lhs, rhs);

            if !allow_overflow {
                red = red.min(255.0);
                green = green.min(255.0);
                blue = blue.min(255.0);
                alpha = alpha.min(255.0);
            }

            Color::from_rgba255(red, green, blue, alpha)
        }

        /// Per-channel half-difference: each RGB channel becomes
        /// `(self - other) / 2`. An absent alpha defaults to the average of
        /// the two operand alphas (a supplied zero is respected).
        #[must_use]
        pub fn mix(&self, other: &Color, alpha: Option<f64>) -> Color {
            let lhs = self.rgba255;
            let rhs = other.rgba255;

            Color::from_rgba255(
                (lhs.red - rhs.red) / 2.0,
                (lhs.green - rhs.green) / 2.0,
                (lhs.blue - rhs.blue) / 2.0,
                alpha.unwrap_or((lhs.alpha + rhs.alpha) / 2.0),
            )
        }

        /// Scale the RGB channels by `multiplier`.
        ///
        /// Channels are clamped to <= 255 unless `allow_overflow` is set;
        /// there is no lower clamp. An absent alpha defaults to this color's
        /// alpha (a supplied zero is respected).
        #[must_use]
        pub fn multiply(&self, multiplier: f64, alpha: Option<f64>, allow_overflow: bool) -> Color {
            let lhs = self.rgba255;

            let mut red = lhs.red * multiplier;
            let mut green = lhs.green * multiplier;
            let mut blue = lhs.blue * multiplier;

            if !allow_overflow {
                red = red.min(255.0);
                green = green.min(255.0);
                blue = blue.min(255.0);
            }

            Color::from_rgba255(red, green, blue, alpha.unwrap_or(lhs.alpha))
        }

        /// Scale the RGB channels by `1 / divisor`.
        #[must_use]
        pub fn divide(&self, divisor: f64, alpha: Option<f64>) -> Color {
            self.multiply(1.0 / divisor, alpha, false)
        }

        /// Brighten by a fraction ([`DEFAULT_LIGHTEN_STEP`] is the
        /// conventional step): `multiply(1 + percent)`.
        #[must_use]
        pub fn lighter(&self, percent: f64) -> Color {
            self.multiply(1.0 + percent, None, false)
        }

        /// Darken by a fraction: [`Color::lighter`] with a negated step.
        #[must_use]
        pub fn darker(&self, percent: f64) -> Color { self.lighter(-percent) }

        /// An ordered ramp of shades centered on this color.
        ///
        /// The ramp steps by `255/count` per shade. The darker and lighter
        /// sides split proportionally to where the RGB average sits in the
        /// 0-255 range (each side rounded up, then the larger side gives up
        /// one slot; ties decrement the lighter side). Darker shades come
        /// first, most-subtracted leading, then this color, then lighter
        /// shades in increasing distance. Shades are built with clamped
        /// [`Color::subtract`]/[`Color::add`] against a grey of `k * step`,
        /// keeping this color's alpha. A non-degenerate split yields
        /// `count + 1` colors; an exact-integer split yields `count`.
        #[must_use]
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation,
                clippy::cast_sign_loss)]
        pub fn shades(&self, count: usize) -> sizing::InlineVecShades {
            let step = 255.0 / count as f64;
            let darker_steps = self.rgb255_avg() / step;

            let mut darker_count = darker_steps.ceil() as usize;
            let mut lighter_count = (count as f64 - darker_steps).ceil() as usize;
            if darker_count > lighter_count {
                darker_count -= 1;
            } else {
                lighter_count = lighter_count.saturating_sub(1);
            }

            let alpha = self.rgba255.alpha;
            let mut ramp = sizing::InlineVecShades::new();

            for index in (1..=darker_count).rev() {
                let grey = step * index as f64;
                ramp.push(self.subtract(
                    &Color::from_rgb255(grey, grey, grey),
                    Some(alpha),
                    false,
                ));
            }

            ramp.push(self.clone());

            for index in 1..=lighter_count {
                let grey = step * index as f64;
                ramp.push(self.add(&Color::from_rgb255(grey, grey, grey), Some(alpha), false));
            }

            ramp
        }
    }
}

mod convenience_conversions {
    use super::*;

    impl From<u32> for Color {
        fn from(value: u32) -> Self { Self::from_packed(value) }
    }

    impl From<RgbaValue> for Color {
        /// Treats the record as 8-bit RGBA and rounds each channel.
        fn from(rgba255: RgbaValue) -> Self {
            Self::from_rgba255(rgba255.red, rgba255.green, rgba255.blue, rgba255.alpha)
        }
    }

    impl TryFrom<&str> for Color {
        type Error = crate::ColorError;

        fn try_from(input: &str) -> Result<Self, Self::Error> {
            Self::try_from_hex(input)
        }
    }
}

mod trait_impls {
    use super::*;

    /// Opaque black.
    impl Default for Color {
        fn default() -> Self { Self::from_rgba255(0.0, 0.0, 0.0, 255.0) }
    }

    /// Two colors are equal when their canonical representations are; the
    /// memoization state is never observable.
    impl PartialEq for Color {
        fn eq(&self, other: &Self) -> bool { self.rgba255 == other.rgba255 }
    }

    impl fmt::Debug for Color {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            let RgbaValue {
                red,
                green,
                blue,
                alpha,
            } = self.rgba255;
            write!(formatter, "Color({red},{green},{blue},{alpha})")
        }
    }

    /// Lossless stringification as `#rrggbbaa`.
    impl fmt::Display for Color {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "#{}", self.hexa())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_from_rgba255_rounds_each_channel() {
        let color = Color::from_rgba255(10.4, 10.5, -0.4, 254.6);
        assert_eq!(color.rgba255(), RgbaValue {
            red: 10.0,
            green: 11.0,
            blue: -0.0,
            alpha: 255.0
        });
    }

    #[test]
    fn test_alpha_defaults_for_rgb_constructors() {
        assert_eq!(Color::from_rgb255(1.0, 2.0, 3.0).rgba255().alpha, 255.0);
        assert_eq!(Color::from_rgb1(0.5, 0.5, 0.5).rgba255().alpha, 255.0);
    }

    #[test]
    fn test_from_rgba1_scales_and_rounds() {
        let color = Color::from_rgba1(1.0, 0.5, 0.0, 1.0);
        assert_eq!(color.rgba255(), RgbaValue {
            red: 255.0,
            green: 128.0,
            blue: 0.0,
            alpha: 255.0
        });
    }

    #[test]
    fn test_packed_round_trip() {
        let green = Color::from_rgba255(0.0, 255.0, 0.0, 255.0);
        assert_eq!(green.packed(), 16_711_935);
        assert_eq!(Color::from_packed(green.packed()), green);
    }

    #[test]
    fn test_hexa_and_hex_projection() {
        let red = Color::from_rgba255(255.0, 0.0, 0.0, 255.0);
        assert_eq!(&red.hexa()[..], "ff0000ff");
        assert_eq!(&red.hex()[..], "ff0000");
    }

    #[test]
    fn test_try_from_hex_shorthand() {
        let color = Color::try_from_hex("#f00").unwrap();
        assert_eq!(&color.hexa()[..], "ff0000ff");
        assert_eq!(color.rgba255(), RgbaValue {
            red: 255.0,
            green: 0.0,
            blue: 0.0,
            alpha: 255.0
        });
    }

    #[test]
    fn test_try_from_hex_rejects_malformed_input() {
        assert!(Color::try_from_hex("#ff000").is_err());
        assert!(Color::try_from("not a color").is_err());
    }

    #[test]
    #[should_panic(expected = "Invalid hex color format")]
    fn test_from_hex_panics_on_malformed_input() { let _color = Color::from_hex("#ff000"); }

    #[test]
    fn test_accessors_are_idempotent() {
        let color = Color::from_rgba255(12.0, 34.0, 56.0, 78.0);
        assert_eq!(color.hsva(), color.hsva());
        assert_eq!(color.hsla(), color.hsla());
        assert_eq!(color.cmyka(), color.cmyka());
        assert_eq!(color.hexa(), color.hexa());
        assert_eq!(color.packed(), color.packed());
        // Projections after their parents were cached.
        assert_eq!(color.hsv(), HsvValue::from(color.hsva()));
        assert_eq!(color.hsl(), HslValue::from(color.hsla()));
        assert_eq!(color.cmyk(), CmykValue::from(color.cmyka()));
        assert_eq!(&color.hex()[..], &color.hexa()[0..6]);
    }

    #[test]
    fn test_equality_ignores_memoization_state() {
        let warm = Color::from_rgba255(200.0, 100.0, 50.0, 255.0);
        let cold = Color::from_rgba255(200.0, 100.0, 50.0, 255.0);
        let _prime_the_cache = warm.hsva();
        assert_eq!(warm, cold);
    }

    #[test]
    fn test_sums_and_averages() {
        let color = Color::from_rgba255(51.0, 102.0, 153.0, 255.0);
        assert_eq!(color.rgb255_sum(), 306.0);
        assert_eq!(color.rgba255_sum(), 561.0);
        assert_eq!(color.rgb255_avg(), 102.0);
        assert_eq!(color.rgba255_avg(), 140.25);
        // The normalized scale accumulates float error, compare with a
        // tolerance.
        assert!((color.rgb1_sum() - 1.2).abs() < 1e-12);
        assert!((color.rgba1_sum() - 2.2).abs() < 1e-12);
        assert!((color.rgb1_avg() - 0.4).abs() < 1e-12);
        assert!((color.rgba1_avg() - 0.55).abs() < 1e-12);
    }

    #[test_case(0.0, 0.0, 0.0, true; "black is dark")]
    #[test_case(255.0, 255.0, 255.0, false; "white is light")]
    #[test_case(255.0, 0.0, 0.0, true; "pure red averages dark")]
    #[test_case(127.0, 127.0, 127.0, false; "average 127 is light")]
    #[test_case(126.0, 127.0, 127.0, true; "just below the threshold")]
    fn test_is_dark(red: f64, green: f64, blue: f64, expected: bool) {
        let color = Color::from_rgb255(red, green, blue);
        assert_eq!(color.is_dark(), expected);
        // Mutually exclusive and exhaustive.
        assert_eq!(color.is_light(), !expected);
    }

    #[test]
    fn test_inverted() {
        let black = Color::from_rgba255(0.0, 0.0, 0.0, 255.0);
        assert_eq!(black.inverted(), Color::from_rgba255(255.0, 255.0, 255.0, 255.0));

        let color = Color::from_rgba255(12.0, 200.0, 99.0, 42.0);
        assert_eq!(color.inverted().rgba255().alpha, 42.0);
        assert_eq!(color.inverted().inverted(), color);
    }

    #[test]
    fn test_add_clamps_at_255() {
        let base = Color::from_rgba255(10.0, 20.0, 30.0, 255.0);
        let bright = Color::from_rgba255(250.0, 250.0, 250.0, 255.0);
        let sum = base.add(&bright, None, false);
        assert_eq!(sum.rgba255(), RgbaValue {
            red: 255.0,
            green: 255.0,
            blue: 255.0,
            alpha: 255.0
        });
    }

    #[test]
    fn test_add_overflow_opt_out() {
        let base = Color::from_rgba255(10.0, 20.0, 30.0, 255.0);
        let bright = Color::from_rgba255(250.0, 250.0, 250.0, 255.0);
        let sum = base.add(&bright, None, true);
        assert_eq!(sum.rgba255(), RgbaValue {
            red: 260.0,
            green: 270.0,
            blue: 280.0,
            alpha: 255.0
        });
    }

    #[test]
    fn test_add_alpha_rules() {
        let lhs = Color::from_rgba255(0.0, 0.0, 0.0, 100.0);
        let rhs = Color::from_rgba255(0.0, 0.0, 0.0, 100.0);
        // Absent alpha defaults to 255 outright.
        assert_eq!(lhs.add(&rhs, None, false).rgba255().alpha, 255.0);
        // A zero alpha falls back to the common alpha of the operands.
        assert_eq!(lhs.add(&rhs, Some(0.0), false).rgba255().alpha, 100.0);
        // A supplied nonzero alpha wins.
        assert_eq!(lhs.add(&rhs, Some(40.0), false).rgba255().alpha, 40.0);
    }

    #[test]
    fn test_subtract_clamps_at_zero() {
        let dark = Color::from_rgba255(10.0, 20.0, 30.0, 255.0);
        let bright = Color::from_rgba255(100.0, 15.0, 100.0, 255.0);
        let difference = dark.subtract(&bright, None, false);
        assert_eq!(difference.rgba255(), RgbaValue {
            red: 0.0,
            green: 5.0,
            blue: 0.0,
            alpha: 255.0
        });
    }

    #[test]
    fn test_subtract_negative_opt_out() {
        let dark = Color::from_rgba255(10.0, 20.0, 30.0, 255.0);
        let bright = Color::from_rgba255(100.0, 15.0, 100.0, 255.0);
        let difference = dark.subtract(&bright, None, true);
        assert_eq!(difference.rgba255(), RgbaValue {
            red: -90.0,
            green: 5.0,
            blue: -70.0,
            alpha: 255.0
        });
    }

    #[test]
    fn test_subtract_alpha_rules() {
        let lhs = Color::from_rgba255(50.0, 50.0, 50.0, 200.0);
        let matching = Color::from_rgba255(1.0, 2.0, 3.0, 200.0);
        let differing = Color::from_rgba255(1.0, 2.0, 3.0, 90.0);
        // Common operand alpha is kept, disagreement resolves to 255.
        assert_eq!(lhs.subtract(&matching, None, false).rgba255().alpha, 200.0);
        assert_eq!(lhs.subtract(&differing, None, false).rgba255().alpha, 255.0);
        // Zero behaves like absent.
        assert_eq!(lhs.subtract(&matching, Some(0.0), false).rgba255().alpha, 200.0);
    }

    #[test]
    fn test_diff_takes_absolute_differences() {
        let lhs = Color::from_rgba255(200.0, 100.0, 50.0, 255.0);
        let rhs = Color::from_rgba255(100.0, 150.0, 25.0, 128.0);
        let difference = lhs.diff(&rhs, None);
        assert_eq!(difference.rgba255(), RgbaValue {
            red: 100.0,
            green: 50.0,
            blue: 25.0,
            alpha: 255.0
        });
        assert_eq!(lhs.diff(&rhs, Some(77.0)).rgba255().alpha, 77.0);
    }

    #[test]
    fn test_mix_is_a_half_difference() {
        let lhs = Color::from_rgba255(200.0, 100.0, 50.0, 255.0);
        let rhs = Color::from_rgba255(100.0, 50.0, 25.0, 255.0);
        let mixed = lhs.mix(&rhs, None);
        assert_eq!(mixed.rgba255(), RgbaValue {
            red: 50.0,
            green: 25.0,
            blue: 13.0,
            alpha: 255.0
        });
    }

    #[test]
    fn test_mix_can_go_negative_and_averages_alpha() {
        let lhs = Color::from_rgba255(100.0, 0.0, 0.0, 100.0);
        let rhs = Color::from_rgba255(200.0, 0.0, 0.0, 200.0);
        let mixed = lhs.mix(&rhs, None);
        assert_eq!(mixed.rgba255().red, -50.0);
        assert_eq!(mixed.rgba255().alpha, 150.0);
        // A supplied zero alpha is respected, unlike subtract/add/diff.
        assert_eq!(lhs.mix(&rhs, Some(0.0)).rgba255().alpha, 0.0);
    }

    #[test]
    fn test_multiply_scales_and_clamps() {
        let base = Color::from_rgba255(100.0, 100.0, 100.0, 200.0);
        assert_eq!(base.multiply(2.0, None, false).rgba255(), RgbaValue {
            red: 200.0,
            green: 200.0,
            blue: 200.0,
            alpha: 200.0
        });
        assert_eq!(base.multiply(3.0, None, false).rgba255().red, 255.0);
        assert_eq!(base.multiply(3.0, None, true).rgba255().red, 300.0);
        // A supplied zero alpha is respected.
        assert_eq!(base.multiply(1.0, Some(0.0), false).rgba255().alpha, 0.0);
    }

    #[test]
    fn test_divide_is_the_multiplicative_inverse() {
        let base = Color::from_rgba255(100.0, 100.0, 100.0, 255.0);
        assert_eq!(base.divide(2.0, None), base.multiply(0.5, None, false));
    }

    #[test]
    fn test_lighter_and_darker() {
        let base = Color::from_rgba255(100.0, 100.0, 100.0, 255.0);
        assert_eq!(base.lighter(DEFAULT_LIGHTEN_STEP).rgba255().red, 110.0);
        assert_eq!(base.darker(DEFAULT_LIGHTEN_STEP).rgba255().red, 90.0);
    }

    #[test]
    fn test_shades_ramp_is_ordered_around_the_base() {
        let base = Color::from_rgba255(100.0, 100.0, 100.0, 255.0);
        let ramp = base.shades(4);
        let expected: Vec<Color> = [0.0, 36.0, 100.0, 164.0, 228.0]
            .iter()
            .map(|&level| Color::from_rgba255(level, level, level, 255.0))
            .collect();
        assert_eq!(ramp.to_vec(), expected);
    }

    #[test]
    fn test_shades_of_black_only_go_lighter() {
        let black = Color::from_rgba255(0.0, 0.0, 0.0, 255.0);
        let ramp = black.shades(DEFAULT_SHADE_COUNT);
        assert_eq!(ramp.len(), 10);
        assert_eq!(ramp[0], black);
        for pair in ramp.windows(2) {
            assert!(pair[0].rgb255_avg() < pair[1].rgb255_avg());
        }
    }

    #[test]
    fn test_shades_keep_the_base_alpha() {
        let translucent = Color::from_rgba255(100.0, 100.0, 100.0, 128.0);
        for shade in translucent.shades(4) {
            assert_eq!(shade.rgba255().alpha, 128.0);
        }
    }

    #[test]
    fn test_from_hsl_routes_through_the_hsv_path() {
        let via_hsl = Color::from_hsl(120.0, 1.0, 0.5);
        assert_eq!(via_hsl, Color::from_hsv(120.0, 1.0, 0.5));
        assert_eq!(via_hsl.rgba255(), RgbaValue {
            red: 0.0,
            green: 128.0,
            blue: 0.0,
            alpha: 255.0
        });
        // The HSLA path interprets the same arguments differently.
        assert_eq!(
            Color::from_hsla(120.0, 1.0, 0.5, 255.0).rgba255(),
            RgbaValue {
                red: 0.0,
                green: 255.0,
                blue: 0.0,
                alpha: 255.0
            }
        );
    }

    #[test]
    fn test_hsva_constructor_alpha_passes_through() {
        assert_eq!(Color::from_hsva(0.0, 1.0, 1.0, 128.0).rgba255().alpha, 128.0);
        assert_eq!(Color::from_hsla(0.0, 1.0, 0.5, 64.0).rgba255().alpha, 64.0);
        assert_eq!(
            Color::from_cmyka(0.0, 0.0, 0.0, 0.0, 32.0).rgba255().alpha,
            32.0
        );
    }

    #[test]
    fn test_from_cmyk_reconstructs_grey_levels() {
        assert_eq!(
            Color::from_cmyk(0.0, 0.0, 0.0, 50.0),
            Color::from_rgba255(128.0, 128.0, 128.0, 255.0)
        );
        // Magenta and yellow never reach the output channels.
        assert_eq!(
            Color::from_cmyk(0.0, 100.0, 100.0, 0.0),
            Color::from_rgba255(255.0, 255.0, 255.0, 255.0)
        );
    }

    #[test]
    fn test_display_and_debug() {
        let color = Color::from_rgba255(255.0, 0.0, 0.0, 255.0);
        assert_eq!(color.to_string(), "#ff0000ff");
        assert_eq!(format!("{color:?}"), "Color(255,0,0,255)");
    }

    #[test]
    fn test_default_is_opaque_black() {
        assert_eq!(Color::default(), Color::from_rgba255(0.0, 0.0, 0.0, 255.0));
    }

    #[test]
    fn test_from_u32_matches_from_packed() {
        assert_eq!(Color::from(0x00FF_00FFu32), Color::from_packed(0x00FF_00FF));
    }

    /// A constructed color can be handed to another thread and read there;
    /// the memoization cells are thread-safe.
    #[test]
    fn test_color_is_send_and_sync() {
        let color = Color::from_rgba255(1.0, 2.0, 3.0, 255.0);
        let handle = std::thread::spawn(move || color.hexa());
        assert_eq!(&handle.join().unwrap()[..], "01020304");
    }
}
