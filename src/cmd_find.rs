use anyhow::{anyhow, Result};
use sixteen_palette::palettes::color::Color;
use sixteen_palette::palettes::palette::ColorPalette;
use sixteen_palette::palettes::sixteen::SixteenColorPalette;

use crate::commands::FindArgs;
use crate::common::swatch;

pub(crate) fn print_find(args: &FindArgs, debug: bool) -> Result<()> {
	let color: Color = args.color.parse()?;

	if debug {
		eprintln!("parsed \"{}\" as {color:?}", args.color);
	}

	let (row, shade) = SixteenColorPalette::new()
		.position_of(color)
		.ok_or_else(|| anyhow!("{color} is not part of the palette"))?;

	let entry = SixteenColorPalette::get_entry(row as isize, shade as isize);
	println!("{} {entry} (row {row}, shade {shade})", swatch(color));

	Ok(())
}
