use crate::palettes::color::Color;
use crate::palettes::palette::{Palette, PaletteError};

impl Palette {
	/// A pretty-printed JSON array of `"#RRGGBB"` strings.
	pub fn to_json_string(&self) -> Result<String, PaletteError> {
		let colors = self.colors.iter().map(|e| e.color).collect::<Vec<Color>>();
		Ok(serde_json::to_string_pretty(&colors)?)
	}
}
