mod tests {
    use moe_badge_led::color::{Color, Hsv16};
    use moe_badge_led::filter::{
        ANGER_HUE, BasicFilter, COLD_HUE, ColorFilter, Filter, FilterProfile, FullFilter, Mood,
        morph,
    };

    /// Full filter with the initial reset already consumed
    fn settled_full() -> FullFilter<2> {
        let mut filter = FullFilter::new();
        filter.tick();
        filter
    }

    #[test]
    fn test_morph_gauge_extremes() {
        for target in [0u16, 1, 255, 256, 20000, 34600, 64250, 65535] {
            for value in [0u16, 1, 100, 32768, 40000, 65535] {
                assert_eq!(morph(target, value, 0), value);
                assert_eq!(morph(target, value, 255), target);
            }
        }
    }

    #[test]
    fn test_morph_takes_shorter_path() {
        // 64250 is closer to 1000 going backwards through 0
        let moved = morph(64250, 1000, 128);
        assert!(moved < 1000 || moved > 64250);

        let moved = morph(20000, 10000, 128);
        assert!(moved > 10000 && moved < 20000);
    }

    #[test]
    fn test_morph_moves_small_gaps() {
        assert!(morph(100, 0, 200) > 0);
    }

    #[test]
    fn test_basic_converges_without_overshoot() {
        for start in [0u8, 37, 200, 255] {
            for target in [0u8, 90, 255] {
                let mut filter: BasicFilter<1> = BasicFilter::new();
                filter.filter(0, Color::with_force(0, start, start, false, true, true));

                let mut last = start;
                let mut ticks = 0;
                while last != target {
                    let out = filter.filter(0, Color::new(0, target, target));
                    if start <= target {
                        assert!(out.val >= last && out.val <= target);
                    } else {
                        assert!(out.val <= last && out.val >= target);
                    }
                    assert_eq!(out.sat, out.val);
                    last = out.val;
                    ticks += 1;
                    assert!(ticks <= 64);
                }
            }
        }
    }

    #[test]
    fn test_basic_force_snaps() {
        let mut filter: BasicFilter<1> = BasicFilter::new();
        filter.filter(0, Color::new(0, 0, 0));
        let out = filter.filter(0, Color::with_force(0, 10, 222, false, false, true));
        assert_eq!(out.val, 222);
        assert_eq!(filter.last_color(0).map(|last| last.val), Some(222));
        assert_ne!(out.sat, 10);
    }

    #[test]
    fn test_basic_passes_hue_through() {
        let mut filter: BasicFilter<1> = BasicFilter::new();
        let out = filter.filter(0, Color::new(43210, 0, 0));
        assert_eq!(out.hue, 43210);
    }

    #[test]
    fn test_basic_disabled_is_pass_through() {
        let mut filter: BasicFilter<1> = BasicFilter::new();
        filter.set_enabled(false);
        let out = filter.filter(0, Color::new(5, 200, 100));
        assert_eq!(out, Hsv16::new(5, 200, 100));
    }

    #[test]
    fn test_full_reset_snaps_first_frame() {
        let mut filter: FullFilter<2> = FullFilter::new();
        assert!(filter.is_reset_pending());
        let out = filter.filter(0, Color::new(1000, 200, 100));
        assert_eq!(out, Hsv16::new(1000, 200, 100));

        filter.tick();
        assert!(!filter.is_reset_pending());
        let out = filter.filter(0, Color::new(1000, 0, 0));
        assert_eq!(out.sat, 200 - (200 / 24 + 1));
        assert_eq!(out.val, 100 - (100 / 40 + 1));
    }

    #[test]
    fn test_full_force_val_snaps() {
        let mut filter = settled_full();
        filter.filter(0, Color::new(0, 0, 0));
        let out = filter.filter(0, Color::with_force(0, 0, 240, false, false, true));
        assert_eq!(out.val, 240);
        assert_eq!(filter.last_color(0).map(|last| last.val), Some(240));
    }

    #[test]
    fn test_full_converges_without_overshoot() {
        let mut filter = settled_full();
        filter.filter(1, Color::with_force(0, 255, 255, false, true, true));
        let mut last = 255;
        let mut ticks = 0;
        while last != 3 {
            let out = filter.filter(1, Color::new(0, 3, 3));
            assert!(out.val <= last && out.val >= 3);
            last = out.val;
            ticks += 1;
            assert!(ticks <= 200);
        }
    }

    #[test]
    fn test_full_mood_floors() {
        let mut filter = settled_full();
        filter.set_mood(Mood::Cold, true);
        filter.set_mood(Mood::Anger, true);
        for _ in 0..10 {
            filter.tick();
        }
        let anger = filter.gauges().level(Mood::Anger);
        let strongest = filter.gauges().strongest();
        assert_eq!(anger, 60);
        assert_eq!(filter.gauges().level(Mood::Cold), 10);
        assert_eq!(strongest, 60);

        let out = filter.filter(0, Color::new(20000, 0, 0));
        assert!(out.sat >= strongest);
        assert!(out.val >= anger);
    }

    #[test]
    fn test_full_cold_pulls_hue() {
        let mut filter = settled_full();
        filter.set_mood(Mood::Cold, true);
        for _ in 0..255 {
            filter.tick();
        }
        assert_eq!(filter.gauges().level(Mood::Cold), 255);
        let out = filter.filter(0, Color::new(0, 0, 0));
        assert_eq!(out.hue, COLD_HUE);
        assert_eq!(out.sat, 255);
    }

    #[test]
    fn test_full_forced_hue_skips_moods() {
        let mut filter = settled_full();
        filter.set_mood(Mood::Cold, true);
        for _ in 0..255 {
            filter.tick();
        }
        let out = filter.filter(0, Color::with_force(1234, 0, 0, true, false, false));
        assert_eq!(out.hue, 1234);
    }

    #[test]
    fn test_full_anger_pulsation_dip() {
        let mut filter = settled_full();
        filter.set_mood(Mood::Anger, true);
        for _ in 0..45 {
            filter.tick();
        }
        assert_eq!(filter.gauges().level(Mood::Anger), 255);
        assert_eq!(filter.gauges().pulsation(), 24);

        let out = filter.filter(0, Color::new(0, 0, 0));
        assert_eq!(out.val, 255 - 24);
        assert_eq!(out.hue, ANGER_HUE);
    }

    #[test]
    fn test_full_gauges_decay() {
        let mut filter = settled_full();
        filter.set_mood(Mood::Anger, true);
        filter.set_mood(Mood::Heat, true);
        for _ in 0..3 {
            filter.tick();
        }
        filter.set_mood(Mood::Anger, false);
        filter.set_mood(Mood::Heat, false);
        filter.tick();
        assert_eq!(filter.gauges().level(Mood::Anger), 14);
        assert_eq!(filter.gauges().level(Mood::Heat), 2);
        assert_eq!(filter.gauges().pulsation(), 0);
    }

    #[test]
    fn test_full_disabled_freezes() {
        let mut filter = settled_full();
        filter.set_mood(Mood::Drunk, true);
        filter.set_enabled(false);
        filter.tick();
        assert_eq!(filter.gauges().level(Mood::Drunk), 0);
        let out = filter.filter(0, Color::new(9, 8, 7));
        assert_eq!(out, Hsv16::new(9, 8, 7));

        filter.set_enabled(true);
        assert!(filter.is_reset_pending());
    }

    #[test]
    fn test_full_reset_last_color() {
        let mut filter = settled_full();
        filter.filter(0, Color::new(0, 0, 0));
        filter.reset_last_color();
        let out = filter.filter(0, Color::new(0, 180, 90));
        assert_eq!((out.sat, out.val), (180, 90));
    }

    #[test]
    fn test_color_filter_profiles() {
        let mut pass: ColorFilter<1> = ColorFilter::new(FilterProfile::PassThrough);
        assert_eq!(pass.filter(0, Color::new(1, 2, 3)), Hsv16::new(1, 2, 3));
        assert!(pass.gauges().is_none());

        let basic: ColorFilter<1> = ColorFilter::new(FilterProfile::Basic);
        assert_eq!(basic.profile(), FilterProfile::Basic);
        assert!(basic.gauges().is_none());

        let mut full: ColorFilter<1> = ColorFilter::new(FilterProfile::default());
        assert_eq!(full.profile(), FilterProfile::Full);
        full.set_mood(Mood::Heat, true);
        full.tick();
        assert_eq!(full.gauges().map(|gauges| gauges.level(Mood::Heat)), Some(1));
    }
}
