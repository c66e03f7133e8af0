// Ambient effects
//
// Independently evolving collections with no cross-entity interaction:
// - `backdrop`: background color and decorative shapes
// - `particles`: cursor trail and click bursts
// - `fish`: falling, bouncing fish

pub mod backdrop;
pub mod fish;
pub mod particles;

pub use backdrop::{Backdrop, BackdropShape, ShapeKind};
pub use fish::{Fish, FishRain};
pub use particles::{Particle, ParticleSystem};
