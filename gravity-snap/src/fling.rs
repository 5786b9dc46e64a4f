use crate::host::DEFAULT_DENSITY_DPI;
use crate::ScrollDelta;

const GRAVITY_EARTH: f32 = 9.80665; // m/s²
const INCHES_PER_METER: f32 = 39.37;
const SCROLL_FRICTION: f32 = 0.015;

/// A constant-deceleration model of a fling.
///
/// A fling released at velocity `v` travels `v² / (2a)` pixels before coming to rest.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlingPhysics {
    /// Deceleration in pixels/second².
    pub deceleration: f32,
}

impl Default for FlingPhysics {
    fn default() -> Self {
        Self::for_density_dpi(DEFAULT_DENSITY_DPI)
    }
}

impl FlingPhysics {
    pub fn new(deceleration: f32) -> Self {
        Self { deceleration }
    }

    /// Friction-based deceleration for a display of `dpi` dots per inch.
    pub fn for_density_dpi(dpi: f32) -> Self {
        Self {
            deceleration: GRAVITY_EARTH * INCHES_PER_METER * dpi * SCROLL_FRICTION,
        }
    }

    /// Signed distance travelled from release at `velocity` (px/s) until rest.
    pub fn resting_displacement(&self, velocity: f32) -> f32 {
        if self.deceleration <= 0.0 || !velocity.is_finite() {
            return 0.0;
        }
        let speed = if velocity < 0.0 { -velocity } else { velocity };
        velocity * speed / (2.0 * self.deceleration)
    }
}

/// Simulates a fling from rest and returns its displacement, clamped to `[-bound, bound]` on
/// each axis independently.
///
/// Without a bound this is the plain ballistic displacement.
pub fn clamp_fling(physics: &FlingPhysics, vx: f32, vy: f32, bound: Option<u32>) -> ScrollDelta {
    let dx = physics.resting_displacement(vx);
    let dy = physics.resting_displacement(vy);
    let (dx, dy) = match bound {
        Some(bound) => {
            let b = bound as f32;
            (dx.clamp(-b, b), dy.clamp(-b, b))
        }
        None => (dx, dy),
    };
    // `as` truncates towards zero, so the clamp still holds after the cast.
    ScrollDelta::new(dx as i32, dy as i32)
}
