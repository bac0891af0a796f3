mod tests {
    use moe_badge_led::color::{Hsv16, Rgb};
    use moe_badge_led::effect::{EffectConfig, EffectId, SwordPreset};
    use moe_badge_led::filter::{FilterProfile, Mood};
    use moe_badge_led::{
        Animator, AnimatorConfig, Command, CommandChannel, OutputDriver, TryReceiveError,
        TrySendError,
    };

    struct NullDriver;

    impl OutputDriver for NullDriver {
        fn set_pixel(&mut self, _index: usize, _color: Rgb) {}

        fn show(&mut self) {}
    }

    #[test]
    fn test_channel_is_fifo_and_bounded() {
        let channel: CommandChannel<2> = CommandChannel::new();
        let sender = channel.sender();
        let receiver = channel.receiver();

        assert_eq!(receiver.try_receive(), Err(TryReceiveError));
        assert!(sender.try_send(Command::ClearAll).is_ok());
        assert!(sender.try_send(Command::ResetFilter).is_ok());
        assert_eq!(
            sender.try_send(Command::SetEnabledAll(true)),
            Err(TrySendError(Command::SetEnabledAll(true)))
        );
        assert_eq!(channel.len(), 2);

        assert_eq!(receiver.try_receive(), Ok(Command::ClearAll));
        assert_eq!(receiver.try_receive(), Ok(Command::ResetFilter));
        assert!(channel.is_empty());
    }

    #[test]
    fn test_process_commands_applies_in_order() {
        let channel: CommandChannel<8> = CommandChannel::new();
        let sender = channel.sender();
        let mut animator: Animator<NullDriver, 3> =
            Animator::new(NullDriver, AnimatorConfig::default());

        let commands = [
            Command::SetMode {
                index: 0,
                effect: EffectConfig::breath(),
            },
            Command::SetMode {
                index: 0,
                effect: EffectConfig::sword(0, SwordPreset::Fire),
            },
            Command::SetMode {
                index: 1,
                effect: EffectConfig::simple(Hsv16::new(1, 2, 3)),
            },
            Command::SetEnabledAll(true),
            Command::SetEnabled {
                index: 2,
                enabled: false,
            },
            Command::SetBrightnessLevel { index: 0, level: 3 },
            Command::SetBrightnessScaleAll(77),
            Command::SetMood {
                mood: Mood::Heat,
                active: true,
            },
        ];
        for command in commands {
            sender.try_send(command).unwrap();
        }

        assert_eq!(animator.process_commands(&channel.receiver()), 8);
        assert!(channel.is_empty());

        assert_eq!(animator.effect_id(0), Some(EffectId::Sword));
        assert_eq!(animator.effect_id(1), Some(EffectId::Simple));
        assert!(animator.is_enabled(0) && animator.is_enabled(1));
        assert!(!animator.is_enabled(2));
        assert_eq!(
            animator
                .effect(0)
                .and_then(|effect| effect.brightness_level())
                .map(|level| level.get()),
            Some(3)
        );
        assert_eq!(animator.arena().brightness_scale(2), Some(77));
        assert!(animator.gauges().unwrap().is_active(Mood::Heat));
    }

    #[test]
    fn test_remaining_commands() {
        let mut animator: Animator<NullDriver, 2> = Animator::new(
            NullDriver,
            AnimatorConfig {
                filter: FilterProfile::Full,
                seed: 1,
            },
        );
        animator.apply(Command::SetMode {
            index: 1,
            effect: EffectConfig::gaming(0),
        });
        animator.apply(Command::SetBrightnessLevelAll(0));
        animator.apply(Command::SetBrightnessScale { index: 1, scale: 5 });
        animator.apply(Command::SetFilterEnabled(false));
        assert_eq!(
            animator
                .effect(1)
                .and_then(|effect| effect.brightness_level())
                .map(|level| level.get()),
            Some(0)
        );
        assert_eq!(animator.arena().brightness_scale(1), Some(5));
        assert!(!animator.filter().is_enabled());

        animator.apply(Command::ClearMode(1));
        assert!(animator.effect(1).is_none());
        animator.apply(Command::SetMode {
            index: 0,
            effect: EffectConfig::icy(),
        });
        animator.apply(Command::ClearAll);
        assert!(animator.effect(0).is_none());
    }
}
