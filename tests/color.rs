mod tests {
    use moe_badge_led::color::{Color, Hsv16, Rgb, hsv16_to_rgb, rgb_to_u32};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_hsv16_to_rgb_primaries() {
        assert_eq!(hsv16_to_rgb(Hsv16::new(0, 255, 255)), RED);
        assert_eq!(hsv16_to_rgb(Hsv16::new(21845, 255, 255)), GREEN);
        assert_eq!(hsv16_to_rgb(Hsv16::new(65535, 255, 255)), RED);
    }

    #[test]
    fn test_hsv16_to_rgb_extremes() {
        assert_eq!(hsv16_to_rgb(Hsv16::new(12345, 0, 255)), WHITE);
        assert_eq!(hsv16_to_rgb(Hsv16::new(12345, 255, 0)), BLACK);
        assert_eq!(hsv16_to_rgb(Hsv16::new(0, 0, 0)), BLACK);
    }

    #[test]
    fn test_rgb_to_u32() {
        assert_eq!(
            rgb_to_u32(Rgb {
                r: 0x12,
                g: 0x34,
                b: 0x56
            }),
            0x0012_3456
        );
        assert_eq!(rgb_to_u32(WHITE), 0x00ff_ffff);
    }

    #[test]
    fn test_color_force_flags() {
        let eased = Color::new(100, 200, 50);
        assert!(!eased.force_hue && !eased.force_sat && !eased.force_val);

        let forced = Color::forced(Hsv16::new(100, 200, 50));
        assert!(forced.force_hue && forced.force_sat && forced.force_val);
        assert_eq!(forced.hsv(), Hsv16::new(100, 200, 50));
        assert_eq!(Color::from(Hsv16::new(100, 200, 50)), forced);
    }
}
