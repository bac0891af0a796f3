use fastrand::Rng;

/// Frames a LED stays calm after a twinkle
pub(crate) const TWINKLE_COOLDOWN: u8 = 32;

/// Random twinkle trigger with a cooldown
///
/// Keeps the same LED from sparkling on consecutive frames.
#[derive(Debug, Clone)]
pub(crate) struct TwinkleCooldown {
    remaining: u8,
}

impl TwinkleCooldown {
    /// Start with a random cooldown so neighbouring LEDs drift apart
    pub(crate) fn new(rng: &mut Rng) -> Self {
        Self {
            remaining: rng.u8(0..TWINKLE_COOLDOWN),
        }
    }

    /// Advance one frame
    ///
    /// Once the cooldown has run out, fires with probability `1 / one_in` and
    /// re-arms the cooldown.
    pub(crate) fn poll(&mut self, rng: &mut Rng, one_in: u8) -> bool {
        if self.remaining > 0 {
            self.remaining -= 1;
            return false;
        }
        if rng.u8(0..one_in.max(1)) == 0 {
            self.remaining = TWINKLE_COOLDOWN;
            return true;
        }
        false
    }

    pub(crate) const fn remaining(&self) -> u8 {
        self.remaining
    }
}
