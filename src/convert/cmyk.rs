// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Conversion between 8-bit RGBA and CMYKA.

use super::{rgba1_to_rgba255, rgba255_to_rgba1};
use crate::{CmykaValue, RgbaValue};

/// Convert an 8-bit RGBA record to CMYKA.
///
/// `k = min(1-r, 1-g, 1-b)`, then `c/m/y = (1 - channel - k) / (1 - k)`,
/// each rounded on the 0-100 scale. Pure black makes `1 - k` zero and the
/// chromatic components come out as NaN; the division is deliberately not
/// guarded, callers own the input domain.
#[must_use]
pub fn rgba255_to_cmyka(rgba255: RgbaValue) -> CmykaValue {
    let rgba1 = rgba255_to_rgba1(rgba255);

    let key = (1.0 - rgba1.red)
        .min(1.0 - rgba1.green)
        .min(1.0 - rgba1.blue);
    let cyan = (1.0 - rgba1.red - key) / (1.0 - key);
    let magenta = (1.0 - rgba1.green - key) / (1.0 - key);
    let yellow = (1.0 - rgba1.blue - key) / (1.0 - key);

    CmykaValue {
        cyan: (cyan * 100.0).round(),
        magenta: (magenta * 100.0).round(),
        yellow: (yellow * 100.0).round(),
        key: (key * 100.0).round(),
        alpha: rgba1.alpha,
    }
}

/// Convert a CMYKA record (components 0-100, alpha 0-1) to 8-bit RGBA.
///
/// All three RGB channels are computed from the single cyan-based expression
/// `1 - min(1, c*(1-k) + k)`; the magenta and yellow components do not
/// participate, so the output is always a grey level determined by cyan and
/// key alone.
#[must_use]
pub fn cmyka_to_rgba255(cmyka: CmykaValue) -> RgbaValue {
    let cyan = cmyka.cyan / 100.0;
    let key = cmyka.key / 100.0;

    let level = 1.0 - (cyan * (1.0 - key) + key).min(1.0);

    rgba1_to_rgba255(RgbaValue {
        red: level,
        green: level,
        blue: level,
        alpha: cmyka.alpha,
    })
}
