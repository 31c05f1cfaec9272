// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Conversion between 8-bit RGBA and HSVA.
//!
//! Both directions use the trigonometry-free piecewise formulas; hue is
//! handled in sixths of a turn internally and scaled to degrees on output.

use super::{rgba1_to_rgba255, rgba255_to_rgba1};
use crate::{HsvaValue, RgbaValue};

/// Convert an HSVA record to 8-bit RGBA.
///
/// Input scales: hue in degrees, saturation/value 0-1, alpha 0-1. Each RGB
/// channel is `v - v*s*clamp(min(k, 4-k), 0, 1)` with `k = (n + h/60) mod 6`
/// evaluated at n = 5 (red), 3 (green), 1 (blue).
#[must_use]
pub fn hsva_to_rgba255(hsva: HsvaValue) -> RgbaValue {
    let HsvaValue {
        hue,
        saturation,
        value,
        alpha,
    } = hsva;

    let channel = |n: f64| {
        let k = (n + hue / 60.0) % 6.0;
        value - value * saturation * k.min(4.0 - k).clamp(0.0, 1.0)
    };

    rgba1_to_rgba255(RgbaValue {
        red: channel(5.0),
        green: channel(3.0),
        blue: channel(1.0),
        alpha,
    })
}

/// Convert an 8-bit RGBA record to HSVA.
///
/// Output scales: hue rounded to whole degrees in [0, 360), saturation and
/// value rounded on the 0-100 scale, alpha 0-1. A negative hue fraction is
/// wrapped by adding 6 before scaling by 60.
#[must_use]
pub fn rgba255_to_hsva(rgba255: RgbaValue) -> HsvaValue {
    let rgba1 = rgba255_to_rgba1(rgba255);
    let value = rgba1.red.max(rgba1.green).max(rgba1.blue);
    let chroma = value - rgba1.red.min(rgba1.green).min(rgba1.blue);

    let hue_sixths = if chroma == 0.0 {
        0.0
    } else if value == rgba1.red {
        (rgba1.green - rgba1.blue) / chroma
    } else if value == rgba1.green {
        2.0 + (rgba1.blue - rgba1.red) / chroma
    } else {
        4.0 + (rgba1.red - rgba1.green) / chroma
    };
    let hue_sixths = if hue_sixths < 0.0 {
        hue_sixths + 6.0
    } else {
        hue_sixths
    };

    let saturation = if value == 0.0 { 0.0 } else { chroma / value };

    HsvaValue {
        hue: (60.0 * hue_sixths).round(),
        saturation: (saturation * 100.0).round(),
        value: (value * 100.0).round(),
        alpha: rgba1.alpha,
    }
}
