// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CMYK (cyan, magenta, yellow, key) records.
//!
//! The four subtractive components are on the 0-100 scale in both directions.
//! The record alpha is on the 0-1 scale; the constructor boundary
//! ([`Color::from_cmyka`](crate::Color::from_cmyka)) accepts 0-255.

/// An alpha-less CMYK color record (components 0-100).
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct CmykValue {
    pub cyan: f64,
    pub magenta: f64,
    pub yellow: f64,
    pub key: f64,
}

/// A CMYK color record with an alpha channel (0-1 scale).
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct CmykaValue {
    pub cyan: f64,
    pub magenta: f64,
    pub yellow: f64,
    pub key: f64,
    pub alpha: f64,
}

impl CmykValue {
    /// Attach an alpha channel (0-1 scale), producing a [`CmykaValue`].
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> CmykaValue {
        CmykaValue {
            cyan: self.cyan,
            magenta: self.magenta,
            yellow: self.yellow,
            key: self.key,
            alpha,
        }
    }
}

/// Drop the alpha channel.
impl From<CmykaValue> for CmykValue {
    fn from(cmyka: CmykaValue) -> Self {
        Self {
            cyan: cmyka.cyan,
            magenta: cmyka.magenta,
            yellow: cmyka.yellow,
            key: cmyka.key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_alpha_round_trip() {
        let cmyk = CmykValue {
            cyan: 0.0,
            magenta: 50.0,
            yellow: 75.0,
            key: 50.0,
        };
        let cmyka = cmyk.with_alpha(1.0);
        assert_eq!(CmykValue::from(cmyka), cmyk);
    }
}
