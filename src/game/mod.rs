// Game layer: the cat, its surroundings and what input does to them

pub mod actions;
pub mod cat;
pub mod controls;
pub mod effects;
pub mod scene;

pub use actions::{perform, Gag};
pub use controls::Controls;
pub use scene::{Scene, SceneTuning, SCENE_TUNING};
