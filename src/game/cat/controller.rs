// Cat animation controller

use glam::Vec2;

use super::expression::Expression;
use super::tuning::CatTuning;
use crate::core::math::{clamp, step_toward};

/// Horizontal region the cat and its movement target are kept inside
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalBounds {
    pub min: f32,
    pub max: f32,
}

impl HorizontalBounds {
    /// Bounds spanning a window of `width` pixels plus `margin` on each side
    pub fn for_width(width: f32, margin: f32) -> Self {
        Self {
            min: -margin,
            max: width + margin,
        }
    }

    pub fn clamp(&self, x: f32) -> f32 {
        clamp(x, self.min, self.max)
    }
}

/// The cat: kinematic and expression state, stepped once per frame
///
/// Only `advance` and the trigger methods mutate it. The renderer reads it
/// through the accessors.
#[derive(Debug, Clone)]
pub struct Cat {
    tuning: CatTuning,
    scale: f32,

    // Position
    x: f32,
    y: f32,
    baseline: f32,
    target_x: f32,
    bounds: Option<HorizontalBounds>,

    // Jump
    velocity_y: f32,
    airborne: bool,

    // Paw
    paw_angle: f32,
    paw_direction: f32,
    waving: bool,

    // Eyes
    blink_timer: u32,
    blinking: bool,
    eye_offset: Vec2,

    // Mouth
    expression: Expression,
    mouth_timer: u32,

    // Pose
    crouching: bool,
    tail_phase: f32,
}

impl Cat {
    /// Create a cat resting at (`x`, `y`); `y` becomes the baseline
    pub fn new(x: f32, y: f32, scale: f32) -> Self {
        Self::with_tuning(x, y, scale, CatTuning::default())
    }

    pub fn with_tuning(x: f32, y: f32, scale: f32, tuning: CatTuning) -> Self {
        Self {
            tuning,
            scale,
            x,
            y,
            baseline: y,
            target_x: x,
            bounds: None,
            velocity_y: 0.0,
            airborne: false,
            paw_angle: 0.0,
            paw_direction: 1.0,
            waving: false,
            blink_timer: 0,
            blinking: false,
            eye_offset: Vec2::ZERO,
            expression: Expression::Normal,
            mouth_timer: 0,
            crouching: false,
            tail_phase: 0.0,
        }
    }

    /// Restrict position and movement target to `bounds`
    pub fn set_bounds(&mut self, bounds: Option<HorizontalBounds>) {
        self.bounds = bounds;
        self.apply_bounds();
    }

    /// Move the resting baseline (window resized); snaps down if grounded
    pub fn set_baseline(&mut self, baseline: f32) {
        self.baseline = baseline;
        if !self.airborne {
            self.y = baseline;
        } else if self.y > baseline {
            self.land();
        }
    }

    /// Advance the cat by exactly one step
    ///
    /// Call once per frame. Order: jump, blink, mouth, paw, movement.
    pub fn advance(&mut self) {
        self.step_jump();
        self.step_blink();
        self.step_mouth();
        self.step_paw();
        self.tail_phase += self.tuning.tail_speed;
        self.step_movement();
    }

    fn step_jump(&mut self) {
        if !self.airborne {
            return;
        }

        self.y += self.velocity_y;
        self.velocity_y += self.tuning.gravity;

        // Landing is only checked after the move
        if self.y >= self.baseline {
            self.land();
        }
    }

    fn land(&mut self) {
        self.y = self.baseline;
        self.velocity_y = 0.0;
        self.airborne = false;
    }

    fn step_blink(&mut self) {
        self.blink_timer += 1;
        self.blinking = self.blink_timer > self.tuning.blink_open_steps;
        if self.blink_timer >= self.tuning.blink_cycle_steps {
            self.blink_timer = 0;
        }
    }

    fn step_mouth(&mut self) {
        if self.mouth_timer > 0 {
            self.mouth_timer -= 1;
        }
        if self.mouth_timer == 0 {
            self.expression = Expression::Normal;
        }
    }

    fn step_paw(&mut self) {
        let step = self.tuning.paw_step;

        if self.waving {
            self.paw_angle += step * self.paw_direction;
            if self.paw_angle >= self.tuning.paw_max_angle {
                self.paw_angle = self.tuning.paw_max_angle;
                self.paw_direction = -1.0;
            } else if self.paw_angle <= self.tuning.paw_min_angle {
                self.paw_angle = self.tuning.paw_min_angle;
                self.paw_direction = 1.0;
            }
        } else {
            self.paw_angle = step_toward(self.paw_angle, 0.0, step);
        }
    }

    fn step_movement(&mut self) {
        self.x = step_toward(self.x, self.target_x, self.tuning.move_step);
        self.apply_bounds();
    }

    fn apply_bounds(&mut self) {
        if let Some(bounds) = self.bounds {
            self.x = bounds.clamp(self.x);
            self.target_x = bounds.clamp(self.target_x);
        }
    }

    /// Launch into a jump. Returns false (and does nothing) if already airborne
    pub fn trigger_jump(&mut self) -> bool {
        if self.airborne {
            return false;
        }
        self.airborne = true;
        self.velocity_y = self.tuning.jump_velocity;
        true
    }

    /// Set the mouth; `Open` and `Tongue` revert to `Normal` after the mouth timer
    pub fn set_expression(&mut self, expression: Expression) {
        log::debug!("Cat expression: {}", expression.name());
        self.expression = expression;
        self.mouth_timer = if expression.is_timed() {
            self.tuning.mouth_steps
        } else {
            0
        };
    }

    pub fn open_mouth(&mut self) {
        self.set_expression(Expression::Open);
    }

    pub fn stick_tongue_out(&mut self) {
        self.set_expression(Expression::Tongue);
    }

    pub fn start_wave(&mut self) {
        self.waving = true;
    }

    pub fn stop_wave(&mut self) {
        self.waving = false;
    }

    /// Set where the cat walks to; clamped to the bounds if any
    pub fn set_movement_target(&mut self, x: f32) {
        self.target_x = match self.bounds {
            Some(bounds) => bounds.clamp(x),
            None => x,
        };
    }

    pub fn set_crouch(&mut self, crouching: bool) {
        self.crouching = crouching;
    }

    /// Point the pupils at (`x`, `y`)
    pub fn look_at(&mut self, x: f32, y: f32) {
        let limit = self.tuning.gaze_limit;
        let divisor = self.tuning.gaze_divisor;
        let dx = (x - self.x) / divisor;
        let dy = (y - self.y) / divisor;
        self.eye_offset = Vec2::new(clamp(dx, -limit, limit), clamp(dy, -limit, limit));
    }

    // Read accessors

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_airborne(&self) -> bool {
        self.airborne
    }

    pub fn paw_angle(&self) -> f32 {
        self.paw_angle
    }

    pub fn is_waving(&self) -> bool {
        self.waving
    }

    pub fn is_blinking(&self) -> bool {
        self.blinking
    }

    pub fn expression(&self) -> Expression {
        self.expression
    }

    pub fn is_crouching(&self) -> bool {
        self.crouching
    }

    pub fn eye_offset(&self) -> Vec2 {
        self.eye_offset
    }

    pub fn tail_phase(&self) -> f32 {
        self.tail_phase
    }

    pub fn tuning(&self) -> &CatTuning {
        &self.tuning
    }
}

// Internals only inspected by tests
#[cfg(test)]
impl Cat {
    pub(crate) fn velocity_y(&self) -> f32 {
        self.velocity_y
    }

    pub(crate) fn blink_timer(&self) -> u32 {
        self.blink_timer
    }

    pub(crate) fn mouth_timer(&self) -> u32 {
        self.mouth_timer
    }

    pub(crate) fn y(&self) -> f32 {
        self.y
    }

    pub(crate) fn baseline(&self) -> f32 {
        self.baseline
    }

    pub(crate) fn target_x(&self) -> f32 {
        self.target_x
    }

    pub(crate) fn bounds(&self) -> Option<HorizontalBounds> {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::cat::tuning::CAT_TUNING;

    fn cat_at(x: f32, y: f32) -> Cat {
        Cat::new(x, y, 1.0)
    }

    #[test]
    fn test_new_cat_rests_on_baseline() {
        let cat = cat_at(200.0, 500.0);
        assert_eq!(cat.y(), 500.0);
        assert_eq!(cat.baseline(), 500.0);
        assert_eq!(cat.target_x(), 200.0);
        assert!(!cat.is_airborne());
        assert_eq!(cat.expression(), Expression::Normal);
    }

    #[test]
    fn test_jump_trajectory_lands_on_baseline() {
        let mut cat = cat_at(200.0, 500.0);
        assert!(cat.trigger_jump());

        cat.advance();
        assert_eq!(cat.y(), 480.0);
        cat.advance();
        assert_eq!(cat.y(), 461.0);

        // Displacement after n steps is -20n + n(n-1)/2, zero again at n = 41
        for _ in 2..40 {
            cat.advance();
        }
        assert!(cat.is_airborne());
        assert!(cat.y() < 500.0);

        cat.advance();
        assert!(!cat.is_airborne());
        assert_eq!(cat.y(), 500.0);
        assert_eq!(cat.velocity_y(), 0.0);
    }

    #[test]
    fn test_jump_never_goes_below_baseline() {
        let mut cat = cat_at(200.0, 500.0);
        cat.trigger_jump();
        let mut went_up = false;
        for _ in 0..200 {
            cat.advance();
            assert!(cat.y() <= cat.baseline());
            went_up |= cat.y() < 500.0;
        }
        assert!(went_up);
        assert_eq!(cat.y(), 500.0);
    }

    #[test]
    fn test_no_double_jump() {
        let mut cat = cat_at(200.0, 500.0);
        assert!(cat.trigger_jump());
        cat.advance();
        cat.advance();
        let velocity = cat.velocity_y();
        assert!(!cat.trigger_jump());
        assert_eq!(cat.velocity_y(), velocity);
    }

    #[test]
    fn test_can_jump_again_after_landing() {
        let mut cat = cat_at(200.0, 500.0);
        cat.trigger_jump();
        for _ in 0..41 {
            cat.advance();
        }
        assert!(!cat.is_airborne());
        assert!(cat.trigger_jump());
    }

    #[test]
    fn test_blink_cycle() {
        let mut cat = cat_at(0.0, 0.0);
        let cycle = CAT_TUNING.blink_cycle_steps as usize;

        for _ in 0..3 {
            let mut closed = Vec::with_capacity(cycle);
            for _ in 0..cycle {
                cat.advance();
                closed.push(cat.is_blinking());
            }

            // Open for T1 steps, then closed for T2 - T1 consecutive steps
            let open_steps = CAT_TUNING.blink_open_steps as usize;
            assert!(closed[..open_steps].iter().all(|b| !b));
            assert!(closed[open_steps..].iter().all(|b| *b));
            assert_eq!(
                closed.iter().filter(|b| **b).count() as u32,
                CAT_TUNING.blink_cycle_steps - CAT_TUNING.blink_open_steps
            );
        }
    }

    #[test]
    fn test_blink_timer_resets() {
        let mut cat = cat_at(0.0, 0.0);
        for _ in 0..CAT_TUNING.blink_cycle_steps {
            cat.advance();
        }
        assert_eq!(cat.blink_timer(), 0);
    }

    #[test]
    fn test_mouth_reverts_after_duration() {
        let mut cat = cat_at(0.0, 0.0);
        cat.set_expression(Expression::Open);

        for _ in 0..CAT_TUNING.mouth_steps - 1 {
            cat.advance();
            assert_eq!(cat.expression(), Expression::Open);
        }
        cat.advance();
        assert_eq!(cat.expression(), Expression::Normal);
        assert_eq!(cat.mouth_timer(), 0);

        for _ in 0..500 {
            cat.advance();
            assert_eq!(cat.expression(), Expression::Normal);
        }
    }

    #[test]
    fn test_tongue_reverts_after_duration() {
        let mut cat = cat_at(0.0, 0.0);
        cat.stick_tongue_out();
        for _ in 0..CAT_TUNING.mouth_steps {
            cat.advance();
        }
        assert_eq!(cat.expression(), Expression::Normal);
    }

    #[test]
    fn test_retrigger_restarts_mouth_timer() {
        let mut cat = cat_at(0.0, 0.0);
        cat.open_mouth();
        for _ in 0..30 {
            cat.advance();
        }
        cat.stick_tongue_out();
        assert_eq!(cat.mouth_timer(), CAT_TUNING.mouth_steps);
        for _ in 0..CAT_TUNING.mouth_steps - 1 {
            cat.advance();
        }
        assert_eq!(cat.expression(), Expression::Tongue);
    }

    #[test]
    fn test_set_normal_clears_timer() {
        let mut cat = cat_at(0.0, 0.0);
        cat.open_mouth();
        cat.set_expression(Expression::Normal);
        assert_eq!(cat.mouth_timer(), 0);
        assert_eq!(cat.expression(), Expression::Normal);
    }

    #[test]
    fn test_wave_stays_in_band() {
        let mut cat = cat_at(0.0, 0.0);
        cat.start_wave();
        let mut hit_top = false;
        let mut hit_bottom = false;
        for _ in 0..500 {
            cat.advance();
            let angle = cat.paw_angle();
            assert!(angle >= CAT_TUNING.paw_min_angle);
            assert!(angle <= CAT_TUNING.paw_max_angle);
            hit_top |= angle == CAT_TUNING.paw_max_angle;
            hit_bottom |= angle == CAT_TUNING.paw_min_angle;
        }
        assert!(hit_top && hit_bottom);
    }

    #[test]
    fn test_paw_relaxes_to_zero_without_overshoot() {
        let mut cat = cat_at(0.0, 0.0);
        cat.start_wave();
        for _ in 0..7 {
            cat.advance();
        }
        assert_eq!(cat.paw_angle(), 35.0);

        cat.stop_wave();
        let steps = (cat.paw_angle().abs() / CAT_TUNING.paw_step).ceil() as usize;
        for _ in 0..steps {
            cat.advance();
            assert!(cat.paw_angle() >= 0.0);
        }
        assert_eq!(cat.paw_angle(), 0.0);

        cat.advance();
        assert_eq!(cat.paw_angle(), 0.0);
    }

    #[test]
    fn test_paw_relaxes_from_negative_angle() {
        let tuning = CatTuning {
            paw_step: 4.0,
            ..CAT_TUNING
        };
        let mut cat = Cat::with_tuning(0.0, 0.0, 1.0, tuning);
        cat.start_wave();
        // 4, 8, ... 44, 45 (clamped), 41, ... down past zero
        while cat.paw_angle() >= 0.0 || cat.paw_angle() > -6.0 {
            cat.advance();
        }
        let angle = cat.paw_angle();
        assert!(angle < 0.0);

        cat.stop_wave();
        let steps = (angle.abs() / 4.0).ceil() as usize;
        for _ in 0..steps {
            cat.advance();
            assert!(cat.paw_angle() <= 0.0);
        }
        assert_eq!(cat.paw_angle(), 0.0);
    }

    #[test]
    fn test_movement_reaches_target() {
        let mut cat = cat_at(200.0, 500.0);
        cat.set_movement_target(800.0);

        for frame in 1..=120 {
            cat.advance();
            assert_eq!(cat.x(), 200.0 + 5.0 * frame as f32);
        }
        assert_eq!(cat.x(), 800.0);

        for _ in 0..60 {
            cat.advance();
            assert_eq!(cat.x(), 800.0);
        }
    }

    #[test]
    fn test_movement_lands_exactly_on_uneven_target() {
        let mut cat = cat_at(0.0, 0.0);
        cat.set_movement_target(-12.0);
        let steps = (12.0f32 / CAT_TUNING.move_step).ceil() as usize;
        for _ in 0..steps {
            cat.advance();
        }
        assert_eq!(cat.x(), -12.0);
        cat.advance();
        assert_eq!(cat.x(), -12.0);
    }

    #[test]
    fn test_target_clamped_to_bounds() {
        let mut cat = cat_at(500.0, 500.0);
        cat.set_bounds(Some(HorizontalBounds::for_width(1000.0, 150.0)));

        cat.set_movement_target(10_000.0);
        assert_eq!(cat.target_x(), 1150.0);

        cat.set_movement_target(-10_000.0);
        assert_eq!(cat.target_x(), -150.0);

        for _ in 0..1000 {
            cat.advance();
            let bounds = cat.bounds().unwrap();
            assert!(cat.x() >= bounds.min && cat.x() <= bounds.max);
        }
        assert_eq!(cat.x(), -150.0);
    }

    #[test]
    fn test_bounds_pull_position_inside() {
        let mut cat = cat_at(5000.0, 500.0);
        cat.set_bounds(Some(HorizontalBounds {
            min: 0.0,
            max: 1000.0,
        }));
        assert_eq!(cat.x(), 1000.0);
        assert_eq!(cat.target_x(), 1000.0);
    }

    #[test]
    fn test_look_at_clamps_gaze() {
        let mut cat = cat_at(500.0, 500.0);
        cat.look_at(5000.0, -5000.0);
        assert_eq!(cat.eye_offset(), Vec2::new(5.0, -5.0));

        cat.look_at(600.0, 450.0);
        assert_eq!(cat.eye_offset(), Vec2::new(2.0, -1.0));
    }

    #[test]
    fn test_crouch_does_not_touch_physics() {
        let mut crouched = cat_at(200.0, 500.0);
        let mut standing = cat_at(200.0, 500.0);
        crouched.set_crouch(true);

        crouched.trigger_jump();
        standing.trigger_jump();
        for _ in 0..20 {
            crouched.advance();
            standing.advance();
            assert_eq!(crouched.y(), standing.y());
        }
        assert!(crouched.is_crouching());
        crouched.set_crouch(false);
        assert!(!crouched.is_crouching());
    }

    #[test]
    fn test_set_baseline_snaps_grounded_cat() {
        let mut cat = cat_at(200.0, 500.0);
        cat.set_baseline(640.0);
        assert_eq!(cat.y(), 640.0);
        assert_eq!(cat.baseline(), 640.0);
    }

    #[test]
    fn test_set_baseline_while_airborne_keeps_jump() {
        let mut cat = cat_at(200.0, 500.0);
        cat.trigger_jump();
        cat.advance();
        cat.set_baseline(700.0);
        assert!(cat.is_airborne());
        assert_eq!(cat.y(), 480.0);

        cat.set_baseline(400.0);
        assert!(!cat.is_airborne());
        assert_eq!(cat.y(), 400.0);
    }
}
