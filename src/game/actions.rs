// Gags - the random actions a key press can trigger

use rand::seq::SliceRandom;
use rand::Rng;

use super::scene::Scene;
use crate::engine::audio::{Sound, SoundPlayer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gag {
    Jump,
    Meow,
    Tongue,
    ChangeBackground,
    AddShape,
    ClearShapes,
    Wave,
    ChaseBall,
    ResetPosition,
    DropFish,
    Burst,
}

impl Gag {
    pub const ALL: [Gag; 11] = [
        Gag::Jump,
        Gag::Meow,
        Gag::Tongue,
        Gag::ChangeBackground,
        Gag::AddShape,
        Gag::ClearShapes,
        Gag::Wave,
        Gag::ChaseBall,
        Gag::ResetPosition,
        Gag::DropFish,
        Gag::Burst,
    ];

    /// Pick any gag uniformly
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Gag {
        *Self::ALL.choose(rng).unwrap_or(&Gag::Jump)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Gag::Jump => "jump",
            Gag::Meow => "meow",
            Gag::Tongue => "tongue",
            Gag::ChangeBackground => "change background",
            Gag::AddShape => "add shape",
            Gag::ClearShapes => "clear shapes",
            Gag::Wave => "wave",
            Gag::ChaseBall => "chase ball",
            Gag::ResetPosition => "reset position",
            Gag::DropFish => "drop fish",
            Gag::Burst => "burst",
        }
    }
}

/// Run `gag` against the scene, playing its sound if it has one
pub fn perform<R: Rng + ?Sized>(
    gag: Gag,
    scene: &mut Scene,
    audio: &dyn SoundPlayer,
    rng: &mut R,
) {
    log::debug!("Gag: {}", gag.name());

    match gag {
        Gag::Jump => {
            // No sound for an ignored mid-air jump
            if scene.cat.trigger_jump() {
                audio.play(Sound::Jump);
            }
        }
        Gag::Meow => {
            scene.show_speech_bubble();
            scene.cat.open_mouth();
            audio.play(Sound::Meow);
        }
        Gag::Tongue => {
            scene.cat.stick_tongue_out();
            audio.play(Sound::Tongue);
        }
        Gag::ChangeBackground => scene.backdrop.change_color(rng),
        Gag::AddShape => scene.add_random_shape(rng),
        Gag::ClearShapes => scene.backdrop.clear_shapes(),
        Gag::Wave => scene.cat.start_wave(),
        Gag::ChaseBall => {
            scene.throw_ball(rng);
        }
        Gag::ResetPosition => scene.recenter_cat(),
        Gag::DropFish => {
            let at = scene.random_top_edge_point(rng);
            scene.drop_fish_at(at, rng);
        }
        Gag::Burst => {
            let at = scene.cat_head();
            scene.burst_at(at, rng);
        }
    }
}
