// Engine modules: window placement, renderer, input, audio, pacing

pub mod assets;
pub mod audio;
pub mod display;
pub mod game_loop;
pub mod input;
pub mod renderer;
