use colored::{ColoredString, Colorize};
use sixteen_palette::palettes::color::Color;

const SWATCH: &str = "      ";

/// A block of background color followed by the color's hex code.
pub(crate) fn swatch(color: Color) -> String {
	format!("{} {}", swatch_block(color), color.to_string().dimmed())
}

fn swatch_block(color: Color) -> ColoredString {
	SWATCH.on_truecolor(color.r, color.g, color.b)
}
