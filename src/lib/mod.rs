//! The sixteen HTML 4.01 colors as a clamped, read-only swatch table for color pickers.

pub mod palettes;
