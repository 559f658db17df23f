//! Learning-rate schedules

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Learning rate α as a function of the game index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LearningRateSchedule {
    /// Same α for every game
    Constant { alpha: f64 },
    /// α = initial · factor^⌊game / every⌋
    StepDecay {
        initial: f64,
        factor: f64,
        every: usize,
    },
}

impl LearningRateSchedule {
    pub const DEFAULT_ALPHA: f64 = 0.1;
    pub const DEFAULT_DECAY_PERIOD: usize = 1000;

    pub fn constant(alpha: f64) -> Self {
        LearningRateSchedule::Constant { alpha }
    }

    pub fn step_decay(initial: f64, factor: f64, every: usize) -> Self {
        LearningRateSchedule::StepDecay {
            initial,
            factor,
            every,
        }
    }

    /// α for the game with index `game` (0-based)
    pub fn alpha(&self, game: usize) -> f64 {
        match *self {
            LearningRateSchedule::Constant { alpha } => alpha,
            LearningRateSchedule::StepDecay {
                initial,
                factor,
                every,
            } => {
                let steps = (game / every.max(1)).min(i32::MAX as usize) as i32;
                initial * factor.powi(steps)
            }
        }
    }

    pub fn initial_alpha(&self) -> f64 {
        self.alpha(0)
    }

    /// Check that α lies in [0, 1] and a decay is well formed.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| Err(Error::InvalidConfiguration { message });
        let alpha = self.initial_alpha();
        if !(0.0..=1.0).contains(&alpha) {
            return invalid(format!("learning rate {alpha} must be in [0, 1]"));
        }
        if let LearningRateSchedule::StepDecay { factor, every, .. } = *self {
            if !(factor > 0.0 && factor <= 1.0) {
                return invalid(format!("decay factor {factor} must be in (0, 1]"));
            }
            if every == 0 {
                return invalid("decay period must be at least one game".to_string());
            }
        }
        Ok(())
    }
}

impl Default for LearningRateSchedule {
    fn default() -> Self {
        Self::constant(Self::DEFAULT_ALPHA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_schedule() {
        let schedule = LearningRateSchedule::default();
        assert_eq!(schedule.alpha(0), 0.1);
        assert_eq!(schedule.alpha(49_999), 0.1);
    }

    #[test]
    fn test_step_decay_changes_every_period() {
        let schedule = LearningRateSchedule::step_decay(0.1, 0.9, 1000);
        assert_eq!(schedule.alpha(0), 0.1);
        assert_eq!(schedule.alpha(999), 0.1);
        assert!((schedule.alpha(1000) - 0.09).abs() < 1e-12);
        assert!((schedule.alpha(2500) - 0.081).abs() < 1e-12);
    }

    #[test]
    fn test_validation() {
        assert!(LearningRateSchedule::default().validate().is_ok());
        assert!(LearningRateSchedule::constant(1.5).validate().is_err());
        assert!(
            LearningRateSchedule::step_decay(0.1, 0.0, 1000)
                .validate()
                .is_err()
        );
        assert!(
            LearningRateSchedule::step_decay(0.1, 0.9, 0)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_serde_tagged_format() {
        let json = serde_json::to_value(LearningRateSchedule::constant(0.2)).unwrap();
        assert_eq!(json["kind"], "constant");
        assert_eq!(json["alpha"], 0.2);
    }
}
