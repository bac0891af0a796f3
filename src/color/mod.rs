mod convert;
mod hsv;

pub use convert::{hsv16_to_rgb, rgb_to_u32};
pub use hsv::{Color, Hsv16};
use smart_leds::RGB8;

pub type Rgb = RGB8;
