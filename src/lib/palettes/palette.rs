use std::fmt::{Display, Formatter};

use crate::palettes::color::Color;

/// A palette laid out as a grid of hues (rows) and shades (columns).
///
/// Lookups never fail: indices outside the grid are clamped to the nearest edge,
/// so a picker driven by stale or computed UI state always gets a color back.
pub trait ColorPalette {
	/// Number of hue rows.
	fn color_count(&self) -> usize;

	/// Number of shade columns.
	fn shade_count(&self) -> usize;

	/// Returns the color at the given position, clamping each index into range.
	fn get_color(&self, color_index: isize, shade_index: isize) -> Color;

	/// Every color in the grid, one `Vec` per hue row.
	fn swatches(&self) -> Vec<Vec<Color>> {
		(0..self.color_count())
			.map(|row| {
				(0..self.shade_count())
					.map(|shade| self.get_color(row as isize, shade as isize))
					.collect()
			})
			.collect()
	}

	/// Finds the first cell (row-major) holding `color`.
	fn position_of(&self, color: Color) -> Option<(usize, usize)> {
		self.swatches().iter().enumerate().find_map(|(row, shades)| {
			shades.iter().position(|c| *c == color).map(|shade| (row, shade))
		})
	}
}

/// Clamps a signed index into `[0, len - 1]`. `len` must not be zero.
pub const fn clamp_index(index: isize, len: usize) -> usize {
	let max = len - 1;
	if index < 0 {
		0
	} else if index as usize > max {
		max
	} else {
		index as usize
	}
}

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Entry {
	pub color: Color,
	pub name: String,
}

/// A flat, ordered list of named colors.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Palette {
	pub colors: Vec<Entry>,
}

impl Palette {
	pub fn push_color(&mut self, c: Color) {
		self.colors.push(Entry { color: c, ..Default::default() });
	}

	pub fn push_named_color(&mut self, c: Color, name: String) {
		self.colors.push(Entry { color: c, name });
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	pub fn render(&self, format: PaletteFormat) -> Result<String, PaletteError> {
		match format {
			PaletteFormat::Gpl => Ok(self.to_gpl_string("Untitled", 0)),
			PaletteFormat::Hex => Ok(self.to_hex_string()),
			PaletteFormat::Json => self.to_json_string(),
		}
	}
}

impl From<Vec<Color>> for Palette {
	fn from(v: Vec<Color>) -> Self {
		let mut pal = Palette::default();
		for c in v {
			pal.push_color(c);
		}
		pal
	}
}

#[derive(Debug)]
pub enum PaletteError {
	InvalidColor { value: String, msg: String },
	UnknownColorName(String),
	Json(serde_json::Error),
}

impl Display for PaletteError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteError::InvalidColor { value, msg } => write!(f, "Invalid color \"{value}\": {msg}"),
			PaletteError::UnknownColorName(name) => write!(f, "Unknown color name \"{name}\""),
			PaletteError::Json(e) => write!(f, "json error: {e}"),
		}
	}
}

impl std::error::Error for PaletteError {}

impl From<serde_json::Error> for PaletteError {
	fn from(e: serde_json::Error) -> Self {
		PaletteError::Json(e)
	}
}

#[derive(clap::ValueEnum, Clone, Copy, Default, Debug, PartialEq)]
pub enum PaletteFormat {
	Gpl, // .gpl
	#[default]
	Hex, // .hex
	Json, // .json
}

impl Display for PaletteFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteFormat::Gpl => write!(f, "gpl"),
			PaletteFormat::Hex => write!(f, "hex"),
			PaletteFormat::Json => write!(f, "json"),
		}
	}
}
