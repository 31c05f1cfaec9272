// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Conversion between the 8-bit (0-255) and normalized (0-1) RGBA scales.

use crate::RgbaValue;

/// Rescale an 8-bit RGBA record to the normalized 0-1 scale.
///
/// No rounding happens in this direction; the normalized channels keep full
/// `f64` precision so downstream conversions round only once.
#[must_use]
pub fn rgba255_to_rgba1(rgba255: RgbaValue) -> RgbaValue {
    RgbaValue {
        red: rgba255.red / 255.0,
        green: rgba255.green / 255.0,
        blue: rgba255.blue / 255.0,
        alpha: rgba255.alpha / 255.0,
    }
}

/// Rescale a normalized 0-1 RGBA record to the 8-bit scale, rounding each
/// channel to the nearest integer.
#[must_use]
pub fn rgba1_to_rgba255(rgba1: RgbaValue) -> RgbaValue {
    RgbaValue {
        red: (rgba1.red * 255.0).round(),
        green: (rgba1.green * 255.0).round(),
        blue: (rgba1.blue * 255.0).round(),
        alpha: (rgba1.alpha * 255.0).round(),
    }
}
