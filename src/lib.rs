// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # rgba_color
//!
//! This crate represents a single color and converts between color models:
//! 8-bit RGBA, normalized [0, 1] RGBA, packed 32-bit integer, HSV/HSVA,
//! HSL/HSLA, CMYK/CMYKA, and hexadecimal string. On top of the conversions it
//! offers arithmetic over the 8-bit RGBA representation: add, subtract, diff,
//! multiply/divide, mix, lighten/darken, and shade ramps.
//!
//! # Architecture
//!
//! There are two strictly layered components:
//!
//! - **Converters** ([`mod@convert`]): stateless pure functions mapping one
//!   color representation to another. The canonical pivot is always the 8-bit
//!   RGBA record; no converter goes model-to-model directly.
//! - **[`Color`]**: an immutable value holding one canonical 8-bit RGBA
//!   record, deriving every other representation lazily on first access and
//!   caching it for the lifetime of the value. All arithmetic returns new
//!   values; nothing mutates in place.
//!
//! # Color models
//!
//! | Model | Record | Scales |
//! |---|---|---|
//! | 8-bit RGBA | [`RgbaValue`] | channels 0-255 |
//! | Normalized RGBA | [`RgbaValue`] | channels 0-1 |
//! | Packed integer | `u32` | big-endian `r<<24 \| g<<16 \| b<<8 \| a` |
//! | HSV / HSVA | [`HsvValue`] / [`HsvaValue`] | hue in degrees; see record docs |
//! | HSL / HSLA | [`HslValue`] / [`HslaValue`] | hue in degrees; see record docs |
//! | CMYK / CMYKA | [`CmykValue`] / [`CmykaValue`] | components 0-100 |
//! | Hex string | [`HexString`] | `rrggbbaa`, lowercase |
//!
//! # Examples
//!
//! Construct from any model, read any model:
//!
//! ```rust
//! use rgba_color::Color;
//!
//! let red = Color::try_from_hex("#f00").unwrap();
//! assert_eq!(&red.hexa()[..], "ff0000ff");
//! assert_eq!(red.rgba255().red, 255.0);
//! assert_eq!(red.hsv().hue, 0.0);
//!
//! let green = Color::from_hsv(120.0, 1.0, 1.0);
//! assert_eq!(green, Color::from_rgb255(0.0, 255.0, 0.0));
//! assert_eq!(green.packed(), 0x00FF_00FF);
//! ```
//!
//! Arithmetic saturates at the channel bounds unless told otherwise:
//!
//! ```rust
//! use rgba_color::Color;
//!
//! let base = Color::from_rgba255(10.0, 20.0, 30.0, 255.0);
//! let bright = Color::from_rgba255(250.0, 250.0, 250.0, 255.0);
//! let clamped = base.add(&bright, None, false);
//! assert_eq!(clamped.rgba255().red, 255.0);
//!
//! let grey = Color::from_rgb255(100.0, 100.0, 100.0);
//! assert_eq!(grey.lighter(0.1).rgba255().red, 110.0);
//! assert_eq!(grey.shades(4).len(), 5);
//! ```
//!
//! # Input domains
//!
//! The converters do no validation: out-of-range numeric inputs are the
//! caller's responsibility, and degenerate inputs (pure black in the CMYK
//! direction) propagate NaN rather than fail. The one fallible operation is
//! hex parsing, which reports [`ColorError::InvalidHexFormat`] for malformed
//! strings.

// Attach.
pub mod convert;

mod cmyk_value;
mod color;
mod error;
mod hex_value;
mod hsl_value;
mod hsv_value;
mod rgba_value;

// Re-export.
pub use cmyk_value::*;
pub use color::*;
pub use convert::*;
pub use error::*;
pub use hex_value::*;
pub use hsl_value::*;
pub use hsv_value::*;
pub use rgba_value::*;
