// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Conversion between 8-bit RGBA and HSLA.
//!
//! Uses the same hue branch math as the HSV converter; lightness is the
//! midpoint of the channel extremes.

use super::{rgba1_to_rgba255, rgba255_to_rgba1};
use crate::{HslaValue, RgbaValue};

/// Convert an HSLA record to 8-bit RGBA.
///
/// Input scales: hue in degrees, saturation/lightness 0-1, alpha 0-1. Each
/// RGB channel is `l - a*clamp(min(k-3, 9-k), -1, 1)` with
/// `a = s*min(l, 1-l)` and `k = (n + h/30) mod 12`, evaluated at n = 0 (red),
/// 8 (green), 4 (blue).
#[must_use]
pub fn hsla_to_rgba255(hsla: HslaValue) -> RgbaValue {
    let HslaValue {
        hue,
        saturation,
        lightness,
        alpha,
    } = hsla;

    let amplitude = saturation * lightness.min(1.0 - lightness);
    let channel = |n: f64| {
        let k = (n + hue / 30.0) % 12.0;
        lightness - amplitude * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
    };

    rgba1_to_rgba255(RgbaValue {
        red: channel(0.0),
        green: channel(8.0),
        blue: channel(4.0),
        alpha,
    })
}

/// Convert an 8-bit RGBA record to HSLA.
///
/// Output scales: hue rounded to whole degrees in [0, 360), saturation and
/// lightness rounded on the 0-100 scale, alpha 0-1. Saturation is chroma
/// divided by `1 - |2l - 1|`, guarded at the degenerate extremes.
#[must_use]
pub fn rgba255_to_hsla(rgba255: RgbaValue) -> HslaValue {
    let rgba1 = rgba255_to_rgba1(rgba255);
    let max = rgba1.red.max(rgba1.green).max(rgba1.blue);
    let chroma = max - rgba1.red.min(rgba1.green).min(rgba1.blue);
    let range = 1.0 - (max + max - chroma - 1.0).abs();

    let hue_sixths = if chroma == 0.0 {
        0.0
    } else if max == rgba1.red {
        (rgba1.green - rgba1.blue) / chroma
    } else if max == rgba1.green {
        2.0 + (rgba1.blue - rgba1.red) / chroma
    } else {
        4.0 + (rgba1.red - rgba1.green) / chroma
    };
    let hue_sixths = if hue_sixths < 0.0 {
        hue_sixths + 6.0
    } else {
        hue_sixths
    };

    let saturation = if range == 0.0 { 0.0 } else { chroma / range };

    HslaValue {
        hue: (60.0 * hue_sixths).round(),
        saturation: (saturation * 100.0).round(),
        lightness: (((max + max - chroma) / 2.0) * 100.0).round(),
        alpha: rgba1.alpha,
    }
}
