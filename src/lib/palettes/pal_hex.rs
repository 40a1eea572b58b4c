use std::fmt::Write;

use crate::palettes::palette::Palette;

// https://github.com/aseprite/aseprite/blob/8323a555007e1db9670b098ce4b1b9c5f8b3d7ad/src/doc/file/hex_file.cpp

impl Palette {
	/// One lowercase `rrggbb` line per color. Alpha is dropped.
	pub fn to_hex_string(&self) -> String {
		let mut out = String::new();
		for entry in &self.colors {
			let c = entry.color;
			let _ = writeln!(out, "{:02x}{:02x}{:02x}", c.r, c.g, c.b);
		}
		out
	}
}
