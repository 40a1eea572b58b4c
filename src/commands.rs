use clap::Parser;
use clap::Subcommand;
use const_format::formatcp;

use sixteen_palette::palettes::palette::PaletteFormat;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{PKG_VERSION} [{BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Previews and queries the sixteen-color HTML palette")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	#[arg(long, global = true, help = "Prints lookup details to stderr.")]
	pub debug: bool,

	#[arg(long, global = true, help = "Disables colored output.")]
	pub no_color: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct GetArgs {
	#[arg(help = "The hue row. Out-of-range values are clamped.")]
	pub color_index: isize,
	#[arg(help = "The shade column. Out-of-range values are clamped.", default_value_t = 0)]
	pub shade_index: isize,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct NamedArgs {
	#[arg(help = "A color name like \"teal\" or \"fuchsia\".")]
	pub name: String,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct FindArgs {
	#[arg(help = "A hex color like #008080 or FF008080.")]
	pub color: String,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ExportArgs {
	#[arg(short, long, value_enum, help = "The output format.", default_value_t = PaletteFormat::default())]
	pub format: PaletteFormat,
	#[arg(short, long, help = "The palette name written to GIMP palettes.", default_value = "Sixteen Colors")]
	pub name: String,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Prints every hue with both shades.")]
	Grid,
	#[command(about = "Looks up a color by row and shade index.", allow_negative_numbers = true)]
	Get(GetArgs),
	#[command(about = "Looks up the standard shade of a named color.")]
	Named(NamedArgs),
	#[command(about = "Finds the first cell holding a color.")]
	Find(FindArgs),
	#[command(about = "Writes the flattened palette to stdout.")]
	Export(ExportArgs),
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn cli_definition() {
		Cli::command().debug_assert();
	}

	#[test]
	fn get_accepts_negative_indices() {
		let cli = Cli::try_parse_from(["sixteen", "get", "-5", "-1"]).unwrap();
		match cli.command {
			Some(Commands::Get(args)) => {
				assert_eq!(args.color_index, -5);
				assert_eq!(args.shade_index, -1);
			}
			other => panic!("unexpected command {other:?}"),
		}
	}

	#[test]
	fn export_defaults_to_hex() {
		let cli = Cli::try_parse_from(["sixteen", "export"]).unwrap();
		match cli.command {
			Some(Commands::Export(args)) => assert_eq!(args.format, PaletteFormat::Hex),
			other => panic!("unexpected command {other:?}"),
		}
	}
}
