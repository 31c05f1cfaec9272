// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Inline string storage for hex color strings.

use smallstr::SmallString;

/// A full `rrggbbaa` hex string is 8 ASCII characters, so the backing buffer
/// never spills to the heap.
pub const HEX_STRING_STORAGE_SIZE: usize = 8;

/// Inline string holding a lowercase hex color string: 8 characters for the
/// `rrggbbaa` form, 6 for the alpha-less `rrggbb` projection. Derefs to
/// `&str`.
pub type HexString = SmallString<[u8; HEX_STRING_STORAGE_SIZE]>;
