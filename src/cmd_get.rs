use anyhow::Result;
use sixteen_palette::palettes::palette::{clamp_index, ColorPalette};
use sixteen_palette::palettes::sixteen::{SixteenColor, SixteenColorPalette, DEFAULT_SHADE_INDEX};

use crate::commands::{GetArgs, NamedArgs};
use crate::common::swatch;

pub(crate) fn print_get(args: &GetArgs, debug: bool) -> Result<()> {
	let palette = SixteenColorPalette::new();

	if debug {
		let row = clamp_index(args.color_index, palette.color_count());
		let shade = clamp_index(args.shade_index, palette.shade_count());
		if row as isize != args.color_index || shade as isize != args.shade_index {
			eprintln!("clamped ({}, {}) to ({row}, {shade})", args.color_index, args.shade_index);
		}
	}

	let entry = SixteenColorPalette::get_entry(args.color_index, args.shade_index);
	let color = palette.get_color(args.color_index, args.shade_index);
	println!("{} {entry}", swatch(color));

	Ok(())
}

pub(crate) fn print_named(args: &NamedArgs, debug: bool) -> Result<()> {
	let named: SixteenColor = args.name.parse()?;

	if debug {
		eprintln!("\"{}\" is row {}", args.name, named.index());
	}

	let color = SixteenColorPalette::new().get_color(named.index() as isize, DEFAULT_SHADE_INDEX as isize);
	println!("{} {named}", swatch(color));

	Ok(())
}
