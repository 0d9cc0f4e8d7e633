// Math utilities shared by the movement core

use glam::Vec2;

/// Tolerance used when comparing screen positions (pixels)
pub const POSITION_EPSILON: f32 = 1e-3;

/// Tolerance used when comparing accumulated simulation time (seconds)
pub const TIME_EPSILON: f32 = 1e-5;

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Linear interpolation between two screen positions
pub fn lerp_vec2(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// Check if two positions are within `epsilon` of each other on both axes
pub fn approx_equal_vec2(a: Vec2, b: Vec2, epsilon: f32) -> bool {
    (a.x - b.x).abs() <= epsilon && (a.y - b.y).abs() <= epsilon
}
