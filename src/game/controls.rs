// Turns one frame of input into cat behaviour and gags

use rand::Rng;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use super::actions::{perform, Gag};
use super::scene::Scene;
use crate::engine::audio::SoundPlayer;
use crate::engine::input::{binding_for, is_modifier, Binding, InputManager, KeyMap};

pub struct Controls {
    keymap: KeyMap<Gag>,
    /// Wave key held or tapped last frame, to catch its release
    wave_held: bool,
}

impl Controls {
    pub fn new(keymap: KeyMap<Gag>) -> Self {
        Self {
            keymap,
            wave_held: false,
        }
    }

    /// Controls with a freshly shuffled key table
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(KeyMap::with_rng(&Gag::ALL, rng))
    }

    pub fn keymap(&self) -> &KeyMap<Gag> {
        &self.keymap
    }

    /// Apply everything the input manager collected this frame
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        input: &InputManager,
        scene: &mut Scene,
        audio: &dyn SoundPlayer,
        rng: &mut R,
    ) {
        for key in input.just_pressed() {
            self.handle_press(*key, scene, audio, rng);
        }

        // Held bindings
        scene.walk(input.walk_direction());
        scene.cat.set_crouch(input.binding_held(Binding::Crouch));

        // A press and release inside one frame still counts as held for it
        let wave_tapped = input
            .just_pressed()
            .iter()
            .any(|key| binding_for(*key) == Some(Binding::Wave));
        let wave_held = input.binding_held(Binding::Wave);
        if self.wave_held && !wave_held {
            scene.cat.stop_wave();
        }
        self.wave_held = wave_held || wave_tapped;

        // Mouse
        if let Some(at) = input.cursor_motion() {
            scene.pointer_moved(at, rng);
        }
        for (button, at) in input.clicks() {
            match button {
                MouseButton::Left => scene.burst_at(*at, rng),
                MouseButton::Right => scene.drop_fish_at(*at, rng),
                _ => {}
            }
        }
    }

    fn handle_press<R: Rng + ?Sized>(
        &mut self,
        key: KeyCode,
        scene: &mut Scene,
        audio: &dyn SoundPlayer,
        rng: &mut R,
    ) {
        if is_modifier(key) {
            return;
        }

        if scene.cat.is_waving() && binding_for(key) != Some(Binding::Wave) {
            scene.cat.stop_wave();
        }

        match binding_for(key) {
            Some(Binding::Jump) => perform(Gag::Jump, scene, audio, rng),
            Some(Binding::Wave) => scene.cat.start_wave(),
            // Walking and crouching follow the held state
            Some(_) => {}
            None => {
                let gag = self.keymap.get(key).unwrap_or_else(|| Gag::random(rng));
                perform(gag, scene, audio, rng);
            }
        }
    }
}
