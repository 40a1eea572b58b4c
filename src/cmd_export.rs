use anyhow::Result;
use sixteen_palette::palettes::palette::PaletteFormat;
use sixteen_palette::palettes::sixteen::SixteenColorPalette;

use crate::commands::ExportArgs;

pub(crate) fn print_export(args: &ExportArgs, debug: bool) -> Result<()> {
	let pal = SixteenColorPalette::new().to_palette();

	if debug {
		eprintln!("exporting {} entries as {}", pal.len(), args.format);
	}

	let out = match args.format {
		PaletteFormat::Gpl => pal.to_gpl_string(&args.name, 2),
		format => pal.render(format)?,
	};
	print!("{out}");

	Ok(())
}
