//! Numeric conversion helpers.
//!
//! Driver attributes arrive as `f64`; the rotation math runs in `f32`. The
//! conversion is guarded by debug assertions so an out-of-range component
//! from a misbehaving build is flagged in test runs while keeping call-sites
//! ergonomic.

/// Convert a finite `f64` into `f32`, asserting that it fits the target type.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Callers assert that the value fits within f32 bounds."
)]
#[must_use]
pub fn expect_f32(value: f64) -> f32 {
    debug_assert!(value.is_finite(), "expected finite f64 for f32 conversion");
    debug_assert!(
        value <= f64::from(f32::MAX),
        "f64 value {value} exceeds f32::MAX"
    );
    debug_assert!(
        value >= f64::from(f32::MIN),
        "f64 value {value} is below f32::MIN"
    );
    value as f32
}
