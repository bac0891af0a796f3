mod tests {
    use moe_badge_led::color::Rgb;
    use moe_badge_led::effect::EffectConfig;
    use moe_badge_led::frame_scheduler::{
        DEFAULT_FRAME_DURATION, MAX_FRAME_DURATION, MIN_FRAME_DURATION,
    };
    use moe_badge_led::{
        Animator, AnimatorConfig, Duration, FrameScheduler, Instant, OutputDriver, TickSource,
    };

    #[derive(Default)]
    struct CountingDriver {
        shows: usize,
    }

    impl OutputDriver for CountingDriver {
        fn set_pixel(&mut self, _index: usize, _color: Rgb) {}

        fn show(&mut self) {
            self.shows += 1;
        }
    }

    fn scheduler() -> FrameScheduler<CountingDriver, 1> {
        let mut animator = Animator::new(CountingDriver::default(), AnimatorConfig::default());
        animator.set_mode(0, EffectConfig::breath());
        animator.set_enabled(0, true);
        FrameScheduler::new(animator)
    }

    #[test]
    fn test_frame_duration_is_clamped() {
        let animator = Animator::<CountingDriver, 1>::new(
            CountingDriver::default(),
            AnimatorConfig::default(),
        );
        let scheduler = FrameScheduler::with_frame_duration(animator, Duration::from_millis(5));
        assert_eq!(scheduler.frame_duration(), MIN_FRAME_DURATION);

        let animator = Animator::<CountingDriver, 1>::new(
            CountingDriver::default(),
            AnimatorConfig::default(),
        );
        let scheduler = FrameScheduler::with_frame_duration(animator, Duration::from_millis(100));
        assert_eq!(scheduler.frame_duration(), MAX_FRAME_DURATION);

        assert_eq!(DEFAULT_FRAME_DURATION, Duration::from_millis(20));
    }

    #[test]
    fn test_tick_paces_frames() {
        let mut scheduler = scheduler();

        let result = scheduler.tick(Instant::from_millis(0));
        assert!(result.rendered);
        assert_eq!(result.next_deadline, Instant::from_millis(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));

        let result = scheduler.tick(Instant::from_millis(5));
        assert!(!result.rendered);
        assert_eq!(result.sleep_duration, Duration::from_millis(15));

        let result = scheduler.tick(Instant::from_millis(20));
        assert!(result.rendered);
        assert_eq!(result.next_deadline, Instant::from_millis(40));
        assert_eq!(scheduler.animator().driver().shows, 2);
    }

    #[test]
    fn test_drift_resets_schedule() {
        let mut scheduler = scheduler();
        scheduler.tick(Instant::from_millis(0));

        let result = scheduler.tick(Instant::from_millis(200));
        assert!(result.rendered);
        assert_eq!(result.next_deadline, Instant::from_millis(220));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));
    }

    #[test]
    fn test_suspended_scheduler_skips_frames() {
        let mut scheduler = scheduler();
        scheduler.suspend();
        assert!(scheduler.is_suspended());
        assert!(!scheduler.tick(Instant::from_millis(0)).rendered);

        scheduler.resume();
        assert!(scheduler.tick(Instant::from_millis(0)).rendered);
    }

    #[test]
    fn test_acknowledge_resumes() {
        let mut scheduler = scheduler();
        scheduler.acknowledge(Duration::from_millis(1));
        assert!(!scheduler.is_suspended());
        assert_eq!(scheduler.animator().driver().shows, 1);
        assert!(scheduler.tick(Instant::from_millis(0)).rendered);
        assert_eq!(scheduler.animator_mut().driver().shows, 2);
    }
}
