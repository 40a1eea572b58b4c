pub mod color;
pub mod pal_gpl;
pub mod pal_hex;
pub mod pal_json;
pub mod palette;
pub mod sixteen;
