//! Animation speed levels offered by the UI slider.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::instrument;

/// How long one animated move takes.
///
/// The core never sleeps; callers turn [`duration`](Self::duration) into a
/// delay of their own.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::EnumIter,
)]
pub enum AnimationSpeed {
    /// Level 1, 2000 ms.
    VerySlow,
    /// Level 2, 1500 ms.
    Slow,
    /// Level 3, 1000 ms.
    #[default]
    Medium,
    /// Level 4, 600 ms.
    Fast,
    /// Level 5, 300 ms.
    VeryFast,
}

impl AnimationSpeed {
    /// Maps a slider level (1-5) to a speed; `None` outside that range.
    #[instrument]
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::VerySlow),
            2 => Some(Self::Slow),
            3 => Some(Self::Medium),
            4 => Some(Self::Fast),
            5 => Some(Self::VeryFast),
            _ => None,
        }
    }

    /// Slider level (1-5).
    pub fn level(self) -> u8 {
        match self {
            Self::VerySlow => 1,
            Self::Slow => 2,
            Self::Medium => 3,
            Self::Fast => 4,
            Self::VeryFast => 5,
        }
    }

    /// Duration of one animated move.
    pub fn duration(self) -> Duration {
        let millis = match self {
            Self::VerySlow => 2000,
            Self::Slow => 1500,
            Self::Medium => 1000,
            Self::Fast => 600,
            Self::VeryFast => 300,
        };
        Duration::from_millis(millis)
    }

    /// Label shown next to the slider.
    pub fn label(self) -> &'static str {
        match self {
            Self::VerySlow => "Very Slow",
            Self::Slow => "Slow",
            Self::Medium => "Medium",
            Self::Fast => "Fast",
            Self::VeryFast => "Very Fast",
        }
    }
}

impl std::fmt::Display for AnimationSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_levels_round_trip() {
        for speed in AnimationSpeed::iter() {
            assert_eq!(AnimationSpeed::from_level(speed.level()), Some(speed));
        }
    }

    #[test]
    fn test_out_of_range_levels() {
        assert_eq!(AnimationSpeed::from_level(0), None);
        assert_eq!(AnimationSpeed::from_level(6), None);
    }

    #[test]
    fn test_durations() {
        assert_eq!(AnimationSpeed::VerySlow.duration(), Duration::from_millis(2000));
        assert_eq!(AnimationSpeed::default().duration(), Duration::from_millis(1000));
        assert_eq!(AnimationSpeed::VeryFast.duration(), Duration::from_millis(300));
    }

    #[test]
    fn test_faster_levels_are_shorter() {
        let durations: Vec<_> = AnimationSpeed::iter().map(AnimationSpeed::duration).collect();
        assert!(durations.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn test_labels() {
        assert_eq!(AnimationSpeed::Medium.to_string(), "Medium");
        assert_eq!(AnimationSpeed::VeryFast.label(), "Very Fast");
    }
}
