//! Units for the title animation
//!
//! Type-safe wrappers for the two quantities that cross the boundary between the
//! host and the animator: elapsed time and pointer travel.

use std::ops::{Add, AddAssign, Deref, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Time in seconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Seconds(pub f32);

/// Screen-space distance in pixels
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Pixels(pub f64);

pub const IMMEDIATE: Seconds = Seconds(0.0);

impl Deref for Seconds {
    type Target = f32;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Add for Seconds {
    type Output = Seconds;
    fn add(self, rhs: Self) -> Self::Output {
        Seconds(self.0 + rhs.0)
    }
}

impl AddAssign for Seconds {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Seconds {
    type Output = Seconds;
    fn sub(self, rhs: Self) -> Self::Output {
        Seconds(self.0 - rhs.0)
    }
}

impl Mul<f32> for Seconds {
    type Output = Seconds;
    fn mul(self, rhs: f32) -> Self::Output {
        Seconds(self.0 * rhs)
    }
}

impl Seconds {
    /// Duration since the previous frame, never negative or non-finite.
    pub fn frame_delta(self) -> Seconds {
        if self.0.is_finite() && self.0 > 0.0 {
            self
        } else {
            IMMEDIATE
        }
    }
}

impl Deref for Pixels {
    type Target = f64;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Sub for Pixels {
    type Output = Pixels;
    fn sub(self, rhs: Self) -> Self::Output {
        Pixels(self.0 - rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_delta_discards_negative_and_nan() {
        assert_eq!(Seconds(0.016).frame_delta(), Seconds(0.016));
        assert_eq!(Seconds(-1.0).frame_delta(), IMMEDIATE);
        assert_eq!(Seconds(f32::NAN).frame_delta(), IMMEDIATE);
        assert_eq!(Seconds(f32::INFINITY).frame_delta(), IMMEDIATE);
    }

    #[test]
    fn pixel_difference() {
        assert_eq!(Pixels(150.0) - Pixels(100.0), Pixels(50.0));
    }
}
