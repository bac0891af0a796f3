//! Small integer helpers shared by effects and filters

/// Scale an 8-bit value by `scale / 256`
///
/// Unlike a normalized multiply, `scale = 255` dims the value by one step.
/// Effects rely on this exact rounding.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale_brightness(value: u8, scale: u8) -> u8 {
    ((value as u16 * scale as u16) / 256) as u8
}

/// Triangle wave over one 8-bit lap
///
/// Rises by 2 per step from 0 at `counter = 0` to 254 at `127`/`128`, then
/// falls back to 0 at `255`.
#[inline]
pub const fn triangle8(counter: u8) -> u8 {
    if counter < 128 {
        counter * 2
    } else {
        (255 - counter) * 2
    }
}

/// Move `current` one easing step toward `target`
///
/// The step is `distance / DIVISOR + 1`, so every call makes progress and
/// the result never passes `target` for `DIVISOR >= 2`.
#[inline]
pub const fn ease_step<const DIVISOR: u8>(current: u8, target: u8) -> u8 {
    if current == target {
        current
    } else if current > target {
        current - ((current - target) / DIVISOR + 1)
    } else {
        current + ((target - current) / DIVISOR + 1)
    }
}

/// Linear remap computed in `i32`, clamped into `[min, max]`
///
/// A zero-width input range yields `max`.
#[inline]
const fn map_clamped(
    x: i32,
    in_min: i32,
    in_max: i32,
    out_min: i32,
    out_max: i32,
    min: i32,
    max: i32,
) -> i32 {
    let width = in_max - in_min;
    if width == 0 {
        return max;
    }
    let mapped = (x - in_min) * (out_max - out_min) / width + out_min;
    if mapped < min {
        min
    } else if mapped > max {
        max
    } else {
        mapped
    }
}

/// Remap an 8-bit value from `[in_min, in_max]` to `[out_min, out_max]`
///
/// Returns `u8::MAX` when `in_min == in_max`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn map8(x: u8, in_min: u8, in_max: u8, out_min: u8, out_max: u8) -> u8 {
    map_clamped(
        x as i32,
        in_min as i32,
        in_max as i32,
        out_min as i32,
        out_max as i32,
        0,
        u8::MAX as i32,
    ) as u8
}

/// Remap an 8-bit value onto a 16-bit range
///
/// Returns `u16::MAX` when `in_min == in_max`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn map8_to_16(x: u8, in_min: u8, in_max: u8, out_min: u16, out_max: u16) -> u16 {
    map_clamped(
        x as i32,
        in_min as i32,
        in_max as i32,
        out_min as i32,
        out_max as i32,
        0,
        u16::MAX as i32,
    ) as u16
}

/// Wrap a phase into `[0, period)`
pub fn wrap_phase(value: f32, period: f32) -> f32 {
    let mut wrapped = libm::fmodf(value, period);
    if !wrapped.is_finite() {
        return 0.0;
    }
    if wrapped < 0.0 {
        wrapped += period;
    }
    if wrapped >= period {
        wrapped -= period;
    }
    wrapped
}

/// Convert degrees in `[0, 360)` to a 16-bit hue
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn degrees_to_hue(degrees: f32) -> u16 {
    (degrees * (65535.0 / 360.0)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_step_never_overshoots() {
        for current in 0..=255u8 {
            for target in [0u8, 1, 17, 128, 254, 255] {
                let next = ease_step::<10>(current, target);
                if current <= target {
                    assert!(next >= current && next <= target);
                } else {
                    assert!(next < current && next >= target);
                }
            }
        }
    }

    #[test]
    fn map_clamped_saturates() {
        assert_eq!(map_clamped(300, 0, 255, 0, 255, 0, 255), 255);
        assert_eq!(map_clamped(-10, 0, 255, 0, 255, 0, 255), 0);
    }
}
