// Cat tuning - every number the animation controller steps with

/// Fixed per-step constants for the cat controller
///
/// Units are pixels and steps; one step is one 60 Hz tick.
#[derive(Debug, Clone, PartialEq)]
pub struct CatTuning {
    // Jump
    /// Vertical velocity applied on launch (negative is up)
    pub jump_velocity: f32,
    /// Added to vertical velocity every airborne step
    pub gravity: f32,

    // Blink
    /// Steps the eyes stay open in each blink cycle (T1)
    pub blink_open_steps: u32,
    /// Total length of a blink cycle (T2), so eyes close for T2 - T1 steps
    pub blink_cycle_steps: u32,

    // Mouth
    /// Steps an open mouth or tongue stays before reverting (D)
    pub mouth_steps: u32,

    // Paw
    /// Lower bound of the wave band, degrees
    pub paw_min_angle: f32,
    /// Upper bound of the wave band, degrees
    pub paw_max_angle: f32,
    /// Degrees per step, both while waving and while relaxing
    pub paw_step: f32,

    // Movement
    /// Pixels per step toward the movement target
    pub move_step: f32,

    // Gaze
    /// Distance to target is divided by this to get the pupil offset
    pub gaze_divisor: f32,
    /// Maximum pupil offset on each axis, pixels
    pub gaze_limit: f32,

    // Tail
    /// Radians per step of the idle tail sway
    pub tail_speed: f32,
}

/// The tuning the cat ships with
pub const CAT_TUNING: CatTuning = CatTuning {
    jump_velocity: -20.0,
    gravity: 1.0,

    blink_open_steps: 180,
    blink_cycle_steps: 190,

    mouth_steps: 60,

    paw_min_angle: -10.0,
    paw_max_angle: 45.0,
    paw_step: 5.0,

    move_step: 5.0,

    gaze_divisor: 50.0,
    gaze_limit: 5.0,

    tail_speed: 0.05,
};

/// Draw scale the cat is spawned with
pub const DEFAULT_SCALE: f32 = 2.0;

/// How far past either window edge the cat may be pushed, pixels
pub const OFFSCREEN_MARGIN: f32 = 150.0;

impl Default for CatTuning {
    fn default() -> Self {
        CAT_TUNING
    }
}
