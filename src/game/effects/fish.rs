// Fish that fall from the cursor, bounce on the floor and settle

use glam::Vec2;
use rand::Rng;
use std::collections::VecDeque;

use crate::engine::renderer::{Color, ShapeBatch};

const GRAVITY: f32 = 0.5;
/// Fraction of speed kept on a floor or wall bounce
const RESTITUTION: f32 = 0.5;
/// Horizontal speed kept on each floor contact
const GROUND_FRICTION: f32 = 0.7;
/// A bounce slower than this ends the motion
const SETTLE_SPEED: f32 = 1.5;

const FISH_COLORS: [Color; 4] = [
    Color::rgb(120, 170, 220),
    Color::rgb(240, 150, 70),
    Color::rgb(170, 170, 190),
    Color::rgb(230, 110, 110),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fish {
    /// Body center
    pub position: Vec2,
    pub velocity: Vec2,
    /// Body length
    pub size: f32,
    pub color: Color,
    /// Settled fish stay put
    pub settled: bool,
}

impl Fish {
    pub fn new(position: Vec2, velocity: Vec2, size: f32, color: Color) -> Self {
        Self {
            position,
            velocity,
            size,
            color,
            settled: false,
        }
    }

    fn half_height(&self) -> f32 {
        self.size * 0.2
    }

    fn half_length(&self) -> f32 {
        self.size * 0.5
    }

    fn step(&mut self, floor: f32, width: f32) {
        let rest_y = floor - self.half_height();
        let left = self.half_length();
        let right = (width - self.half_length()).max(left);

        if self.settled {
            // Stay on the floor and inside the walls if the window changed size
            self.position.y = rest_y;
            self.position.x = self.position.x.clamp(left, right);
            return;
        }

        self.velocity.y += GRAVITY;
        self.position += self.velocity;

        if self.position.y >= rest_y {
            self.position.y = rest_y;
            self.velocity.x *= GROUND_FRICTION;
            let bounce = -self.velocity.y * RESTITUTION;
            if bounce.abs() < SETTLE_SPEED {
                self.velocity = Vec2::ZERO;
                self.settled = true;
            } else {
                self.velocity.y = bounce;
            }
        }

        if self.position.x < left {
            self.position.x = left;
            self.velocity.x = -self.velocity.x * RESTITUTION;
        } else if self.position.x > right {
            self.position.x = right;
            self.velocity.x = -self.velocity.x * RESTITUTION;
        }
    }

    /// Facing follows horizontal motion; right when still
    fn facing(&self) -> f32 {
        if self.velocity.x < 0.0 {
            -1.0
        } else {
            1.0
        }
    }

    fn draw(&self, batch: &mut ShapeBatch) {
        let facing = self.facing();
        let half = Vec2::new(self.half_length(), self.half_height());
        batch.ellipse(self.position, half, self.color);

        let tail_root = self.position - Vec2::new(facing * half.x * 0.9, 0.0);
        let tail_tip = tail_root - Vec2::new(facing * self.size * 0.3, 0.0);
        batch.polygon(
            &[
                tail_root,
                tail_tip + Vec2::new(0.0, -half.y * 1.2),
                tail_tip + Vec2::new(0.0, half.y * 1.2),
            ],
            self.color,
        );

        let eye = self.position + Vec2::new(facing * half.x * 0.5, -half.y * 0.3);
        batch.circle(eye, (self.size * 0.05).max(1.0), Color::BLACK);
    }
}

/// Capacity-bounded set of fish; the oldest is dropped when full
#[derive(Debug, Clone)]
pub struct FishRain {
    fish: VecDeque<Fish>,
    capacity: usize,
}

impl FishRain {
    pub fn new(capacity: usize) -> Self {
        Self {
            fish: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn spawn(&mut self, fish: Fish) {
        if self.capacity == 0 {
            return;
        }
        if self.fish.len() >= self.capacity {
            self.fish.pop_front();
        }
        self.fish.push_back(fish);
    }

    /// Drop a fish at `at` with a small random sideways toss
    pub fn drop_at<R: Rng + ?Sized>(&mut self, at: Vec2, rng: &mut R) {
        let velocity = Vec2::new(rng.gen_range(-3.0..=3.0), rng.gen_range(-2.0..=0.0));
        let size = rng.gen_range(40.0..=70.0);
        let color = FISH_COLORS[rng.gen_range(0..FISH_COLORS.len())];
        self.spawn(Fish::new(at, velocity, size, color));
    }

    /// Step every fish; `floor` is the y the fish land on
    pub fn update(&mut self, floor: f32, width: f32) {
        for fish in self.fish.iter_mut() {
            fish.step(floor, width);
        }
    }

    pub fn len(&self) -> usize {
        self.fish.len()
    }

    pub fn draw(&self, batch: &mut ShapeBatch) {
        for fish in &self.fish {
            fish.draw(batch);
        }
    }
}

// Only inspected by tests
#[cfg(test)]
impl FishRain {
    pub(crate) fn is_empty(&self) -> bool {
        self.fish.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Fish> {
        self.fish.iter()
    }
}
