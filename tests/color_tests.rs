use sixteen_palette::palettes::color::Color;
use sixteen_palette::palettes::sixteen::{SixteenColor, SixteenColorPalette};

fn colors_valid() -> Vec<(&'static str, Color)> {
	vec![
		("008080", SixteenColorPalette::teal()),
		("#008080", SixteenColorPalette::teal()),
		("0x008080", SixteenColorPalette::teal()),
		("  #c0c0c0 ", SixteenColorPalette::silver()),
		("FF800080", SixteenColorPalette::purple()),
		("#80FF0000", Color { a: 0x80, r: 0xFF, g: 0, b: 0 }),
		("#00000000", Color { a: 0, r: 0, g: 0, b: 0 }),
	]
}

fn colors_invalid() -> Vec<&'static str> {
	vec!["", "#", "fff", "#12345", "1234567", "#GGGGGG", "##008080", "0x#008080", "teal"]
}

#[test]
fn color_parsing() {
	for (s, expected) in colors_valid() {
		assert_eq!(s.parse::<Color>().unwrap(), expected, "{s}");
	}

	for s in colors_invalid() {
		let _ = s.parse::<Color>().unwrap_err();
	}
}

#[test]
#[should_panic(expected = "InvalidColor { value: \"#12345\", msg: \"Expected RRGGBB or AARRGGBB hex digits\" }")]
fn color_parsing_short() {
	"#12345".parse::<Color>().unwrap();
}

#[test]
fn color_formatting() {
	assert_eq!(SixteenColorPalette::navy().to_string(), "#000080");
	assert_eq!(SixteenColorPalette::white().to_string(), "#FFFFFF");
	assert_eq!(Color::from_argb(0x7F123456).to_string(), "#7F123456");
	assert_eq!(SixteenColorPalette::olive().to_argb(), 0xFF808000);
	assert_eq!(Color::from(0x00FF00_u32), SixteenColorPalette::lime());
	assert_eq!(Color::from([0xFF, 0xFF, 0x00]), SixteenColorPalette::yellow());
	assert_eq!(Color::default(), SixteenColorPalette::black());
}

#[test]
fn color_serde() {
	let json = serde_json::to_string(&SixteenColorPalette::maroon()).unwrap();
	assert_eq!(json, "\"#800000\"");

	let back: Color = serde_json::from_str("\"#FF00FF\"").unwrap();
	assert_eq!(back, SixteenColorPalette::fuchsia());

	let _ = serde_json::from_str::<Color>("\"nope\"").unwrap_err();
}

#[test]
fn color_names() {
	assert_eq!("Teal".parse::<SixteenColor>().unwrap(), SixteenColor::Teal);
	assert_eq!(" fuchsia ".parse::<SixteenColor>().unwrap(), SixteenColor::Fuchsia);
	assert_eq!("GREY".parse::<SixteenColor>().unwrap(), SixteenColor::Gray);
	assert_eq!("gray".parse::<SixteenColor>().unwrap(), SixteenColor::Gray);
	assert_eq!(SixteenColor::Navy.to_string(), "Navy");

	for c in SixteenColor::ALL {
		assert_eq!(c.name().parse::<SixteenColor>().unwrap(), c);
	}
}

#[test]
#[should_panic(expected = "UnknownColorName(\"magenta\")")]
fn color_names_unknown() {
	"magenta".parse::<SixteenColor>().unwrap();
}
