/// Rate factor of the magnetic snap, in "fractions of the remaining
/// distance per second".
pub const SNAP_RATE: f32 = 5.0;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    /// Interpolates toward `target`. `fraction` is clamped to `[0, 1]`, so a
    /// long frame never overshoots.
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        let fraction = fraction.clamp(0.0, 1.0);
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        let fraction = fraction.clamp(0.0, 1.0) as f64;
        self + (target - self) * fraction
    }
}

/// One exponential-smoothing step: `lerp(current, target, delta * rate)`.
///
/// When `current == target` the result is `current` exactly.
#[inline]
pub fn smooth_toward<T: Lerp>(current: &T, target: &T, delta_seconds: f32, rate: f32) -> T {
    current.lerp(target, delta_seconds * rate)
}
