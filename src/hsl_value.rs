// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! HSL (hue, saturation, lightness) records.
//!
//! Same scale conventions as the HSV records: accessor output carries the hue
//! in rounded degrees and saturation/lightness rounded on the 0-100 scale,
//! converter input interprets saturation/lightness on the 0-1 scale, and the
//! record alpha is always 0-1.

/// An alpha-less HSL color record.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct HslValue {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

/// An HSL color record with an alpha channel (0-1 scale).
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct HslaValue {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl HslValue {
    /// Attach an alpha channel (0-1 scale), producing an [`HslaValue`].
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> HslaValue {
        HslaValue {
            hue: self.hue,
            saturation: self.saturation,
            lightness: self.lightness,
            alpha,
        }
    }
}

/// Drop the alpha channel.
impl From<HslaValue> for HslValue {
    fn from(hsla: HslaValue) -> Self {
        Self {
            hue: hsla.hue,
            saturation: hsla.saturation,
            lightness: hsla.lightness,
        }
    }
}
