use serde::{Deserialize, Serialize};

use crate::error::{Result, ScatterError};
use crate::mesh::Size;
use crate::units::Seconds;

/// Shared tuning for every face of one mesh.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationParams {
    /// Delay spread from left to right across the title
    pub max_delay_x: f32,
    /// Delay spread from top to bottom across the title
    pub max_delay_y: f32,
    pub min_duration: f32,
    pub max_duration: f32,
    /// Extra random delay on top of the positional one
    pub stretch: f32,
    /// Bounding box of the mesh, filled in when the mesh is attached
    #[serde(skip)]
    pub size: Size,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            max_delay_x: 2.0,
            max_delay_y: 0.25,
            min_duration: 2.0,
            max_duration: 8.0,
            stretch: 0.25,
            size: Size::default(),
        }
    }
}

impl AnimationParams {
    pub fn with_size(self, size: Size) -> Self {
        Self { size, ..self }
    }

    /// Time span covered by progress running from 0 to 1. Never negative.
    pub fn total_duration(&self) -> Seconds {
        Seconds((self.max_delay_x + self.max_delay_y + self.max_duration - 3.0).max(0.0))
    }

    pub fn validate(&self) -> Result<()> {
        let named = [
            ("max_delay_x", self.max_delay_x),
            ("max_delay_y", self.max_delay_y),
            ("min_duration", self.min_duration),
            ("max_duration", self.max_duration),
            ("stretch", self.stretch),
            ("width", self.size.width),
            ("height", self.size.height),
            ("depth", self.size.depth),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(ScatterError::InvalidParams(format!("{name} is not finite")));
            }
            if value < 0.0 {
                return Err(ScatterError::InvalidParams(format!("{name} is negative: {value}")));
            }
        }
        if self.min_duration <= 0.0 {
            return Err(ScatterError::InvalidParams(format!(
                "min_duration must be positive: {}",
                self.min_duration
            )));
        }
        if self.max_duration < self.min_duration {
            return Err(ScatterError::InvalidParams(format!(
                "max_duration {} is below min_duration {}",
                self.max_duration, self.min_duration
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_total_duration() {
        assert_eq!(AnimationParams::default().total_duration(), Seconds(7.25));
    }

    #[test]
    fn defaults_are_valid() {
        assert!(AnimationParams::default().validate().is_ok());
    }

    #[test]
    fn inverted_durations_rejected() {
        let params = AnimationParams {
            min_duration: 8.0,
            max_duration: 2.0,
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(ScatterError::InvalidParams(_))));
    }

    #[test]
    fn zero_min_duration_rejected() {
        let params = AnimationParams {
            min_duration: 0.0,
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(ScatterError::InvalidParams(_))));
    }

    #[test]
    fn negative_and_nan_rejected() {
        let negative = AnimationParams {
            stretch: -0.1,
            ..Default::default()
        };
        assert!(negative.validate().is_err());
        let nan = AnimationParams {
            max_delay_x: f32::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn total_duration_never_negative() {
        let params = AnimationParams {
            max_delay_x: 0.0,
            max_delay_y: 0.0,
            min_duration: 1.0,
            max_duration: 1.0,
            ..Default::default()
        };
        assert_eq!(params.total_duration(), Seconds(0.0));
    }
}
