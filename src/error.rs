// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error type for the fallible parts of the crate.
//!
//! The only structural failure mode is a malformed hex color string; every
//! numeric conversion accepts out-of-domain inputs without validation (the
//! caller owns the input domain, and NaN propagation is an accepted outcome).

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced when constructing a color from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ColorError {
    /// The input is not a hex color string: after stripping an optional
    /// leading `#`, it must consist solely of 3, 4, 6, or 8 ASCII hex digits.
    #[error("invalid hex color format: {input:?}")]
    #[diagnostic(code(rgba_color::invalid_hex_format))]
    InvalidHexFormat { input: String },
}

pub type ColorResult<T> = Result<T, ColorError>;
