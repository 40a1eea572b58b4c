use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::palettes::palette::PaletteError;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(?:#|0[xX])?(?P<hex>[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$").unwrap()
});

/// A color with 8-bit red, green, blue, and alpha channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
	pub a: u8,
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	/// Creates a fully opaque color.
	pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
		Self { a: 0xFF, r, g, b }
	}

	/// Unpacks a `0xAARRGGBB` value.
	pub const fn from_argb(v: u32) -> Self {
		Self {
			a: (v >> 24) as u8,
			r: (v >> 16) as u8,
			g: (v >> 8) as u8,
			b: v as u8,
		}
	}

	pub const fn to_argb(&self) -> u32 {
		((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
	}

	pub const fn is_opaque(&self) -> bool {
		self.a == 0xFF
	}
}

impl Default for Color {
	fn default() -> Self {
		Self::from_rgb(0, 0, 0)
	}
}

impl From<[u8; 3]> for Color {
	fn from(v: [u8; 3]) -> Self {
		Self::from_rgb(v[0], v[1], v[2])
	}
}

/// Reads `0xRRGGBB`. The top byte is ignored and the result is opaque.
impl From<u32> for Color {
	fn from(v: u32) -> Self {
		Self::from_argb(v | 0xFF00_0000)
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if self.is_opaque() {
			write!(f, "#{:06X}", self.to_argb() & 0x00FF_FFFF)
		} else {
			write!(f, "#{:08X}", self.to_argb())
		}
	}
}

impl FromStr for Color {
	type Err = PaletteError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		let hex = HEX_COLOR.captures(trimmed)
			.and_then(|c| c.name("hex"))
			.ok_or_else(|| PaletteError::InvalidColor {
				value: trimmed.to_string(),
				msg: "Expected RRGGBB or AARRGGBB hex digits".to_string(),
			})?
			.as_str();

		// the regex only lets hex digits through, so this can't overflow a u32
		let parsed_int = u32::from_str_radix(hex, 16)
			.map_err(|e| PaletteError::InvalidColor { value: trimmed.to_string(), msg: e.to_string() })?;

		if hex.len() == 6 {
			Ok(Color::from(parsed_int))
		} else {
			Ok(Color::from_argb(parsed_int))
		}
	}
}

impl Serialize for Color {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_string())
	}
}

impl<'de> Deserialize<'de> for Color {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse::<Color>().map_err(de::Error::custom)
	}
}
