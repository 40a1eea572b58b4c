use anyhow::Result;
use colored::Colorize;
use sixteen_palette::palettes::palette::ColorPalette;
use sixteen_palette::palettes::sixteen::SixteenColorPalette;

use crate::common::swatch;

pub(crate) fn print_grid(debug: bool) -> Result<()> {
	let palette = SixteenColorPalette::new();

	if debug {
		eprintln!("grid: {} colors x {} shades", palette.color_count(), palette.shade_count());
	}

	for row in 0..palette.color_count() as isize {
		let name = format!("{:<8}", SixteenColorPalette::get_entry(row, 0).name());
		let mut line = format!("{row:>2} {}", name.bold());
		for shade in 0..palette.shade_count() as isize {
			line.push_str("  ");
			line.push_str(&swatch(palette.get_color(row, shade)));
		}
		println!("{line}");
	}

	Ok(())
}
