use swissmon_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::mons::Creature;

/// Highest probability any capture attempt can have.
pub const MAX_CAPTURE_RATE: f64 = 0.99;

/// Every factor that goes into the odds of capturing a creature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureModifiers {
    /// Catch rate of the target's species.
    pub base_rate: f64,
    pub hp_modifier: f64,
    pub level_modifier: f64,
    /// Catch bonus of the capture tool.
    pub ball_modifier: f64,
    /// Flat bonus from the target's status condition.
    pub status_bonus: f64,
}

impl CaptureModifiers {
    /// Collects the modifiers for throwing a capture tool with the given bonus at a creature.
    pub fn new(target: &Creature, ball_modifier: f64) -> Self {
        Self {
            base_rate: target.species().catch_rate,
            hp_modifier: hp_modifier(target.hp(), target.max_hp()),
            level_modifier: level_modifier(target.level()),
            ball_modifier,
            status_bonus: target
                .status()
                .map(|status| status.capture_bonus())
                .unwrap_or(0.0),
        }
    }

    /// The probability of the attempt succeeding, in `[0, 0.99]`.
    pub fn final_rate(&self) -> f64 {
        let rate = self.base_rate * self.hp_modifier * self.level_modifier * self.ball_modifier
            + self.status_bonus;
        rate.clamp(0.0, MAX_CAPTURE_RATE)
    }

    /// Rolls the attempt. Always draws exactly once.
    pub fn attempt(&self, prng: &mut dyn PseudoRandomNumberGenerator) -> bool {
        let draw = rand_util::unit(prng);
        let rate = self.final_rate();
        log::debug!(
            "capture: base={} hp={} level={} ball={} status={} rate={rate} draw={draw}",
            self.base_rate,
            self.hp_modifier,
            self.level_modifier,
            self.ball_modifier,
            self.status_bonus,
        );
        draw < rate
    }
}

/// Weakened creatures are easier to capture.
pub fn hp_modifier(hp: u16, max_hp: u16) -> f64 {
    let ratio = hp as f64 / max_hp.max(1) as f64;
    if ratio <= 0.25 {
        2.0
    } else if ratio <= 0.5 {
        1.5
    } else {
        1.0 + (1.0 - ratio) * 0.5
    }
}

/// Higher levels are harder to capture. Levels below 5 produce a modifier above 1.0.
pub fn level_modifier(level: u8) -> f64 {
    (1.0 - (level as f64 - 5.0) * 0.01).max(0.5)
}
