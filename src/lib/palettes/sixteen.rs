use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::palettes::color::Color;
use crate::palettes::palette::{clamp_index, ColorPalette, Palette, PaletteError};

// https://en.wikipedia.org/wiki/Web_colors#HTML_color_names
// https://en.wikipedia.org/wiki/List_of_software_palettes

/// The sixteen named colors of HTML 4.01, in palette row order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SixteenColor {
	White,
	Silver,
	Gray,
	Black,
	Red,
	Maroon,
	Yellow,
	Olive,
	Lime,
	Green,
	Aqua,
	Teal,
	Blue,
	Navy,
	Fuchsia,
	Purple,
}

impl SixteenColor {
	pub const ALL: [SixteenColor; 16] = [
		SixteenColor::White,
		SixteenColor::Silver,
		SixteenColor::Gray,
		SixteenColor::Black,
		SixteenColor::Red,
		SixteenColor::Maroon,
		SixteenColor::Yellow,
		SixteenColor::Olive,
		SixteenColor::Lime,
		SixteenColor::Green,
		SixteenColor::Aqua,
		SixteenColor::Teal,
		SixteenColor::Blue,
		SixteenColor::Navy,
		SixteenColor::Fuchsia,
		SixteenColor::Purple,
	];

	/// The palette row this hue occupies.
	pub const fn index(&self) -> usize {
		*self as usize
	}

	pub const fn name(&self) -> &'static str {
		match self {
			SixteenColor::White => "White",
			SixteenColor::Silver => "Silver",
			SixteenColor::Gray => "Gray",
			SixteenColor::Black => "Black",
			SixteenColor::Red => "Red",
			SixteenColor::Maroon => "Maroon",
			SixteenColor::Yellow => "Yellow",
			SixteenColor::Olive => "Olive",
			SixteenColor::Lime => "Lime",
			SixteenColor::Green => "Green",
			SixteenColor::Aqua => "Aqua",
			SixteenColor::Teal => "Teal",
			SixteenColor::Blue => "Blue",
			SixteenColor::Navy => "Navy",
			SixteenColor::Fuchsia => "Fuchsia",
			SixteenColor::Purple => "Purple",
		}
	}

	pub const fn color(&self) -> Color {
		match self {
			SixteenColor::White => Color::from_argb(0xFFFFFFFF),
			SixteenColor::Silver => Color::from_argb(0xFFC0C0C0),
			SixteenColor::Gray => Color::from_argb(0xFF808080),
			SixteenColor::Black => Color::from_argb(0xFF000000),
			SixteenColor::Red => Color::from_argb(0xFFFF0000),
			SixteenColor::Maroon => Color::from_argb(0xFF800000),
			SixteenColor::Yellow => Color::from_argb(0xFFFFFF00),
			SixteenColor::Olive => Color::from_argb(0xFF808000),
			SixteenColor::Lime => Color::from_argb(0xFF00FF00),
			SixteenColor::Green => Color::from_argb(0xFF008000),
			SixteenColor::Aqua => Color::from_argb(0xFF00FFFF),
			SixteenColor::Teal => Color::from_argb(0xFF008080),
			SixteenColor::Blue => Color::from_argb(0xFF0000FF),
			SixteenColor::Navy => Color::from_argb(0xFF000080),
			SixteenColor::Fuchsia => Color::from_argb(0xFFFF00FF),
			SixteenColor::Purple => Color::from_argb(0xFF800080),
		}
	}
}

impl Display for SixteenColor {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.name())
	}
}

impl FromStr for SixteenColor {
	type Err = PaletteError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let wanted = s.trim().to_lowercase();
		if wanted == "grey" {
			return Ok(SixteenColor::Gray);
		}

		SixteenColor::ALL.into_iter()
			.find(|c| c.name().to_lowercase() == wanted)
			.ok_or_else(|| PaletteError::UnknownColorName(s.trim().to_string()))
	}
}

/// Index of the standard shade in every row.
pub const DEFAULT_SHADE_INDEX: usize = 0;

const COLOR_COUNT: usize = 16;
const SHADE_COUNT: usize = 2;

// column 1 is the darker HTML counterpart; hues that already are the dark half keep themselves
const COLOR_CHART: [[SixteenColor; SHADE_COUNT]; COLOR_COUNT] = [
	[SixteenColor::White, SixteenColor::Silver],
	[SixteenColor::Silver, SixteenColor::Gray],
	[SixteenColor::Gray, SixteenColor::Black],
	[SixteenColor::Black, SixteenColor::Black],
	[SixteenColor::Red, SixteenColor::Maroon],
	[SixteenColor::Maroon, SixteenColor::Maroon],
	[SixteenColor::Yellow, SixteenColor::Olive],
	[SixteenColor::Olive, SixteenColor::Olive],
	[SixteenColor::Lime, SixteenColor::Green],
	[SixteenColor::Green, SixteenColor::Green],
	[SixteenColor::Aqua, SixteenColor::Teal],
	[SixteenColor::Teal, SixteenColor::Teal],
	[SixteenColor::Blue, SixteenColor::Navy],
	[SixteenColor::Navy, SixteenColor::Navy],
	[SixteenColor::Fuchsia, SixteenColor::Purple],
	[SixteenColor::Purple, SixteenColor::Purple],
];

/// The standard sixteen color palette from the HTML 4.01 specification,
/// with a standard and a dark shade for every hue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SixteenColorPalette;

impl SixteenColorPalette {
	pub const fn new() -> Self {
		Self
	}

	/// Clamps both indices and returns the named hue stored in that cell.
	pub const fn get_entry(color_index: isize, shade_index: isize) -> SixteenColor {
		COLOR_CHART[clamp_index(color_index, COLOR_COUNT)][clamp_index(shade_index, SHADE_COUNT)]
	}

	const fn standard(c: SixteenColor) -> Color {
		COLOR_CHART[c.index()][DEFAULT_SHADE_INDEX].color()
	}

	/// `#FFFFFFFF`
	pub const fn white() -> Color {
		Self::standard(SixteenColor::White)
	}

	/// `#FFC0C0C0`
	pub const fn silver() -> Color {
		Self::standard(SixteenColor::Silver)
	}

	/// `#FF808080`
	pub const fn gray() -> Color {
		Self::standard(SixteenColor::Gray)
	}

	/// `#FF000000`
	pub const fn black() -> Color {
		Self::standard(SixteenColor::Black)
	}

	/// `#FFFF0000`
	pub const fn red() -> Color {
		Self::standard(SixteenColor::Red)
	}

	/// `#FF800000`
	pub const fn maroon() -> Color {
		Self::standard(SixteenColor::Maroon)
	}

	/// `#FFFFFF00`
	pub const fn yellow() -> Color {
		Self::standard(SixteenColor::Yellow)
	}

	/// `#FF808000`
	pub const fn olive() -> Color {
		Self::standard(SixteenColor::Olive)
	}

	/// `#FF00FF00`
	pub const fn lime() -> Color {
		Self::standard(SixteenColor::Lime)
	}

	/// `#FF008000`
	pub const fn green() -> Color {
		Self::standard(SixteenColor::Green)
	}

	/// `#FF00FFFF`
	pub const fn aqua() -> Color {
		Self::standard(SixteenColor::Aqua)
	}

	/// `#FF008080`
	pub const fn teal() -> Color {
		Self::standard(SixteenColor::Teal)
	}

	/// `#FF0000FF`
	pub const fn blue() -> Color {
		Self::standard(SixteenColor::Blue)
	}

	/// `#FF000080`
	pub const fn navy() -> Color {
		Self::standard(SixteenColor::Navy)
	}

	/// `#FFFF00FF`
	pub const fn fuchsia() -> Color {
		Self::standard(SixteenColor::Fuchsia)
	}

	/// `#FF800080`
	pub const fn purple() -> Color {
		Self::standard(SixteenColor::Purple)
	}

	/// Flattens the table row by row into a named palette.
	pub fn to_palette(&self) -> Palette {
		let mut pal = Palette::default();
		for row in &COLOR_CHART {
			for entry in row {
				pal.push_named_color(entry.color(), entry.name().to_string());
			}
		}
		pal
	}
}

impl ColorPalette for SixteenColorPalette {
	fn color_count(&self) -> usize {
		COLOR_COUNT
	}

	fn shade_count(&self) -> usize {
		SHADE_COUNT
	}

	fn get_color(&self, color_index: isize, shade_index: isize) -> Color {
		Self::get_entry(color_index, shade_index).color()
	}
}
