use std::fmt::Write;

use crate::palettes::palette::Palette;

// https://github.com/aseprite/aseprite/blob/8323a555007e1db9670b098ce4b1b9c5f8b3d7ad/src/doc/file/gpl_file.cpp

const GIMP_MAGIC: &str = "GIMP Palette";

impl Palette {
	/// Renders the palette as a GIMP palette. Unnamed entries are written as "Untitled".
	pub fn to_gpl_string(&self, name: &str, columns: usize) -> String {
		let mut out = String::new();

		// writing into a String can't fail
		let _ = writeln!(out, "{GIMP_MAGIC}");
		let _ = writeln!(out, "Name: {name}");
		let _ = writeln!(out, "Columns: {columns}");
		let _ = writeln!(out, "#");

		for entry in &self.colors {
			let c = entry.color;
			let entry_name = if entry.name.is_empty() { "Untitled" } else { entry.name.as_str() };
			let _ = writeln!(out, "{:>3} {:>3} {:>3}\t{entry_name}", c.r, c.g, c.b);
		}

		out
	}
}
