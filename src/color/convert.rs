use crate::color::{Hsv16, Rgb};

/// Convert a 16-bit hue HSV color to RGB
///
/// The hue circle is split into 1530 steps (six sectors of 255), then
/// saturation and value are applied with 8-bit fixed-point scaling. Matches
/// the conversion used by common `NeoPixel` drivers, so colors look the same
/// as on the reference hardware.
#[allow(clippy::cast_possible_truncation)]
pub fn hsv16_to_rgb(color: Hsv16) -> Rgb {
    let hue = ((u32::from(color.hue) * 1530 + 32768) / 65536) as u16;

    let (r, g, b): (u16, u16, u16) = if hue < 510 {
        if hue < 255 { (255, hue, 0) } else { (510 - hue, 255, 0) }
    } else if hue < 1020 {
        if hue < 765 {
            (0, 255, hue - 510)
        } else {
            (0, 1020 - hue, 255)
        }
    } else if hue < 1530 {
        if hue < 1275 {
            (hue - 1020, 0, 255)
        } else {
            (255, 0, 1530 - hue)
        }
    } else {
        // 1530 rounds back to pure red
        (255, 0, 0)
    };

    let v1 = 1 + u32::from(color.val);
    let s1 = 1 + u32::from(color.sat);
    let s2 = 255 - u32::from(color.sat);

    let apply =
        |channel: u16| -> u8 { (((((u32::from(channel) * s1) >> 8) + s2) * v1) >> 8) as u8 };

    Rgb {
        r: apply(r),
        g: apply(g),
        b: apply(b),
    }
}

/// Pack an RGB color into a `0x00RRGGBB` value
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}
