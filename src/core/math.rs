// Math utilities and helper functions

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

/// Move `value` toward `target` by at most `step`, landing exactly on the target
/// once it is within one step
pub fn step_toward(value: f32, target: f32, step: f32) -> f32 {
    let delta = target - value;
    if delta.abs() <= step {
        target
    } else {
        value + step * delta.signum()
    }
}

/// Linear interpolation
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Convert one sRGB channel (0..=1) to linear light
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Scale a design-space length by the character scale factor
pub fn scaled(value: f32, scale: f32) -> f32 {
    value * scale
}
