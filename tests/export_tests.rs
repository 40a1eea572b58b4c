use sixteen_palette::palettes::palette::{Palette, PaletteFormat};
use sixteen_palette::palettes::sixteen::SixteenColorPalette;

const FORMATS: [PaletteFormat; 3] = [PaletteFormat::Gpl, PaletteFormat::Hex, PaletteFormat::Json];

#[test]
fn export_hex() {
	let out = SixteenColorPalette::new().to_palette().to_hex_string();
	let lines = out.lines().collect::<Vec<&str>>();

	assert_eq!(lines.len(), 32);
	assert_eq!(&lines[..4], &["ffffff", "c0c0c0", "c0c0c0", "808080"]);
	assert_eq!(lines[31], "800080");
	assert!(out.ends_with('\n'));
}

#[test]
fn export_gpl() {
	let out = SixteenColorPalette::new().to_palette().to_gpl_string("Sixteen Colors", 2);
	let lines = out.lines().collect::<Vec<&str>>();

	assert_eq!(lines.len(), 4 + 32);
	assert_eq!(lines[0], "GIMP Palette");
	assert_eq!(lines[1], "Name: Sixteen Colors");
	assert_eq!(lines[2], "Columns: 2");
	assert_eq!(lines[3], "#");
	assert_eq!(lines[4], "255 255 255\tWhite");
	assert_eq!(lines[5], "192 192 192\tSilver");
	assert_eq!(lines[9], "  0   0   0\tBlack");
	assert_eq!(lines[35], "128   0 128\tPurple");
}

#[test]
fn export_gpl_unnamed() {
	let pal = Palette::from(vec![SixteenColorPalette::red()]);
	let out = pal.to_gpl_string("Red", 0);
	assert!(out.ends_with("255   0   0\tUntitled\n"));
}

#[test]
fn export_json() {
	let out = SixteenColorPalette::new().to_palette().to_json_string().unwrap();
	let colors: Vec<String> = serde_json::from_str(&out).unwrap();

	assert_eq!(colors.len(), 32);
	assert_eq!(colors[0], "#FFFFFF");
	assert_eq!(colors[21], "#008080");
	assert_eq!(colors[28], "#FF00FF");
}

#[test]
fn export_render() {
	let pal = SixteenColorPalette::new().to_palette();
	for format in FORMATS {
		println!("Rendering {}…", format.to_string().to_uppercase());

		let out = pal.render(format).unwrap();
		assert!(out.contains("ffffff") || out.contains("FFFFFF") || out.contains("255 255 255"));
	}

	assert_eq!(pal.render(PaletteFormat::Hex).unwrap(), pal.to_hex_string());
	assert!(pal.render(PaletteFormat::Gpl).unwrap().contains("Name: Untitled"));
}

#[test]
fn export_empty() {
	let pal = Palette::default();
	assert!(pal.is_empty());
	assert_eq!(pal.to_hex_string(), "");
	assert_eq!(pal.to_json_string().unwrap(), "[]");
}
