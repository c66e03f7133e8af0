// Cursor trail and click burst particles

use glam::Vec2;
use rand::Rng;
use std::collections::VecDeque;
use std::f32::consts::TAU;

use crate::core::math::lerp;
use crate::engine::renderer::{Color, ShapeBatch};

const GRAVITY: f32 = 0.15;
const DRAG: f32 = 0.98;

/// Particles spawned per cursor motion event
const TRAIL_COUNT: usize = 2;
/// Particles spawned per click
pub const BURST_COUNT: usize = 40;

const TRAIL_COLORS: [Color; 3] = [
    Color::rgb(255, 200, 80),
    Color::rgb(255, 140, 60),
    Color::rgb(255, 240, 160),
];

/// A short-lived dot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Remaining steps; the particle is removed at zero
    pub life: u32,
    pub max_life: u32,
    pub radius: f32,
    pub color: Color,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, life: u32, radius: f32, color: Color) -> Self {
        Self {
            position,
            velocity,
            life,
            max_life: life.max(1),
            radius,
            color,
        }
    }

    /// Remaining life as a fraction in [0, 1]
    pub fn life_fraction(&self) -> f32 {
        self.life as f32 / self.max_life as f32
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    fn step(&mut self) {
        self.position += self.velocity;
        self.velocity.y += GRAVITY;
        self.velocity *= DRAG;
        self.life = self.life.saturating_sub(1);
    }
}

/// Capacity-bounded particle pool; the oldest particles go first when full
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: VecDeque<Particle>,
    capacity: usize,
}

impl ParticleSystem {
    pub fn new(capacity: usize) -> Self {
        Self {
            particles: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn spawn(&mut self, particle: Particle) {
        if self.capacity == 0 {
            return;
        }
        if self.particles.len() >= self.capacity {
            self.particles.pop_front();
        }
        self.particles.push_back(particle);
    }

    /// A couple of slow warm sparks where the cursor is
    pub fn emit_trail<R: Rng + ?Sized>(&mut self, at: Vec2, rng: &mut R) {
        for _ in 0..TRAIL_COUNT {
            let velocity = Vec2::new(rng.gen_range(-0.8..=0.8), rng.gen_range(-1.2..=0.2));
            let color = TRAIL_COLORS[rng.gen_range(0..TRAIL_COLORS.len())];
            let life = rng.gen_range(20..=30);
            let radius = rng.gen_range(2.0..=4.0);
            self.spawn(Particle::new(at, velocity, life, radius, color));
        }
    }

    /// A ring of bright confetti flying outward from `at`
    pub fn emit_burst<R: Rng + ?Sized>(&mut self, at: Vec2, count: usize, rng: &mut R) {
        for _ in 0..count {
            let angle = rng.gen_range(0.0..TAU);
            let speed = rng.gen_range(2.0..=7.0);
            let velocity = Vec2::new(angle.cos(), angle.sin()) * speed;
            let color = Color::rgb(
                rng.gen_range(128..=255),
                rng.gen_range(128..=255),
                rng.gen_range(128..=255),
            );
            let life = rng.gen_range(40..=60);
            let radius = rng.gen_range(3.0..=6.0);
            self.spawn(Particle::new(at, velocity, life, radius, color));
        }
    }

    /// Advance every particle one step and drop the dead ones
    pub fn update(&mut self) {
        for particle in self.particles.iter_mut() {
            particle.step();
        }
        self.particles.retain(Particle::is_alive);
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Particles shrink and fade as they age
    pub fn draw(&self, batch: &mut ShapeBatch) {
        for particle in &self.particles {
            let t = particle.life_fraction();
            let radius = particle.radius * lerp(0.4, 1.0, t);
            batch.circle(particle.position, radius, particle.color.with_opacity(t));
        }
    }
}

// Only inspected by tests
#[cfg(test)]
impl ParticleSystem {
    pub(crate) fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}
