mod tests {
    use moe_badge_led::math8::{
        degrees_to_hue, map8, map8_to_16, scale_brightness, triangle8, wrap_phase,
    };

    #[test]
    fn test_scale_brightness() {
        assert_eq!(scale_brightness(255, 255), 254);
        assert_eq!(scale_brightness(128, 255), 127);
        assert_eq!(scale_brightness(200, 128), 100);
        assert_eq!(scale_brightness(200, 0), 0);
    }

    #[test]
    fn test_triangle8() {
        assert_eq!(triangle8(0), 0);
        assert_eq!(triangle8(1), 2);
        assert_eq!(triangle8(127), 254);
        assert_eq!(triangle8(128), 254);
        assert_eq!(triangle8(255), 0);
    }

    #[test]
    fn test_map8_endpoints() {
        assert_eq!(map8(0, 0, 150, 255, 150), 255);
        assert_eq!(map8(150, 0, 150, 255, 150), 150);
        assert_eq!(map8(255, 150, 255, 150, 255), 255);
    }

    #[test]
    fn test_map_degenerate_range_saturates() {
        assert_eq!(map8(42, 7, 7, 0, 100), u8::MAX);
        assert_eq!(map8_to_16(42, 7, 7, 0, 100), u16::MAX);
    }

    #[test]
    fn test_map8_to_16_endpoints() {
        assert_eq!(map8_to_16(0, 0, 128, 1450, 10200), 1450);
        assert_eq!(map8_to_16(128, 0, 128, 1450, 10200), 10200);
        assert_eq!(map8_to_16(255, 128, 255, 10200, 1450), 1450);
    }

    #[test]
    fn test_wrap_phase() {
        assert!((wrap_phase(370.0, 360.0) - 10.0).abs() < 1e-3);
        assert!((wrap_phase(-30.0, 360.0) - 330.0).abs() < 1e-3);
        assert!(wrap_phase(360.0, 360.0).abs() < 1e-3);
        assert_eq!(wrap_phase(f32::NAN, 360.0), 0.0);
    }

    #[test]
    fn test_degrees_to_hue() {
        assert_eq!(degrees_to_hue(0.0), 0);
        assert_eq!(degrees_to_hue(180.0), 32767);
        assert!(degrees_to_hue(359.99) > 65530);
    }
}
