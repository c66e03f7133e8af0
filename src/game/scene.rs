// Scene: the cat plus everything drawn around it

use glam::Vec2;
use rand::Rng;

use super::cat::{draw_cat, Cat, CatLayout, HorizontalBounds, DEFAULT_SCALE, OFFSCREEN_MARGIN};
use super::effects::{particles::BURST_COUNT, Backdrop, FishRain, ParticleSystem};
use crate::engine::renderer::glyphs::text_width;
use crate::engine::renderer::{Color, ShapeBatch};

/// Bubble text shown while the cat meows
pub const MEOW_TEXT: &str = "MIAU!";
/// Exit instructions drawn in the top-left corner
pub const EXIT_HINT: &str = "EXIT: CTRL + ALT + E + X";

const BALL_COLOR: Color = Color::RED;

/// Limits and timings for the scene around the cat
#[derive(Debug, Clone, PartialEq)]
pub struct SceneTuning {
    pub shape_capacity: usize,
    pub particle_capacity: usize,
    pub fish_capacity: usize,
    /// Steps the speech bubble stays up
    pub bubble_steps: u32,
    /// The ball is caught once the cat is horizontally closer than this
    pub catch_radius: f32,
    pub ball_radius: f32,
    /// Keep-out distance from the window edges when placing the ball
    pub ball_margin: f32,
    /// The cat rests this far below the window's vertical center
    pub rest_offset: f32,
}

pub const SCENE_TUNING: SceneTuning = SceneTuning {
    shape_capacity: 20,
    particle_capacity: 600,
    fish_capacity: 24,
    bubble_steps: 60,
    catch_radius: 10.0,
    ball_radius: 20.0,
    ball_margin: 100.0,
    rest_offset: 100.0,
};

impl Default for SceneTuning {
    fn default() -> Self {
        SCENE_TUNING
    }
}

pub struct Scene {
    width: f32,
    height: f32,
    tuning: SceneTuning,

    pub cat: Cat,
    pub backdrop: Backdrop,
    pub particles: ParticleSystem,
    pub fish: FishRain,

    ball: Option<Vec2>,
    bubble_timer: u32,
}

impl Scene {
    /// A scene filling a `width` x `height` window, cat resting at the center
    pub fn new(width: f32, height: f32) -> Self {
        let tuning = SceneTuning::default();
        let mut cat = Cat::new(width / 2.0, height / 2.0 + tuning.rest_offset, DEFAULT_SCALE);
        cat.set_bounds(Some(HorizontalBounds::for_width(width, OFFSCREEN_MARGIN)));

        Self {
            width,
            height,
            backdrop: Backdrop::new(tuning.shape_capacity),
            particles: ParticleSystem::new(tuning.particle_capacity),
            fish: FishRain::new(tuning.fish_capacity),
            tuning,
            cat,
            ball: None,
            bubble_timer: 0,
        }
    }

    /// Follow a window resize: new bounds and resting height
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.cat
            .set_bounds(Some(HorizontalBounds::for_width(width, OFFSCREEN_MARGIN)));
        self.cat.set_baseline(height / 2.0 + self.tuning.rest_offset);
    }

    /// Advance everything by one step
    pub fn update(&mut self) {
        self.cat.advance();

        self.bubble_timer = self.bubble_timer.saturating_sub(1);

        if let Some(ball) = self.ball {
            if (self.cat.x() - ball.x).abs() < self.tuning.catch_radius {
                self.ball = None;
            }
        }

        self.particles.update();
        self.fish.update(self.height, self.width);
    }

    // Gag hooks

    pub fn show_speech_bubble(&mut self) {
        self.bubble_timer = self.tuning.bubble_steps;
    }

    /// Put the ball somewhere in the lower half and send the cat after it
    pub fn throw_ball<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec2 {
        let margin = self.tuning.ball_margin;
        let x_max = (self.width - margin).max(margin);
        let y_min = self.height / 2.0;
        let y_max = (self.height - margin).max(y_min);
        let ball = Vec2::new(rng.gen_range(margin..=x_max), rng.gen_range(y_min..=y_max));
        self.ball = Some(ball);
        self.cat.set_movement_target(ball.x);
        ball
    }

    /// Walk the cat back to the middle of the window
    pub fn recenter_cat(&mut self) {
        self.cat.set_movement_target(self.width / 2.0);
    }

    pub fn add_random_shape<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.backdrop.add_random_shape(rng, self.width, self.height);
    }

    // Input hooks

    /// Nudge the walk target one step in `direction` (-1, 0 or 1)
    pub fn walk(&mut self, direction: f32) {
        if direction != 0.0 {
            let step = self.cat.tuning().move_step;
            self.cat.set_movement_target(self.cat.x() + direction * step);
        }
    }

    /// The cursor moved: the cat watches it and it leaves a trail
    pub fn pointer_moved<R: Rng + ?Sized>(&mut self, at: Vec2, rng: &mut R) {
        self.cat.look_at(at.x, at.y);
        self.particles.emit_trail(at, rng);
    }

    pub fn burst_at<R: Rng + ?Sized>(&mut self, at: Vec2, rng: &mut R) {
        self.particles.emit_burst(at, BURST_COUNT, rng);
    }

    pub fn drop_fish_at<R: Rng + ?Sized>(&mut self, at: Vec2, rng: &mut R) {
        self.fish.drop_at(at, rng);
    }

    /// A random point on the top edge of the window
    pub fn random_top_edge_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        Vec2::new(rng.gen_range(0.0..=self.width.max(0.0)), 0.0)
    }

    /// Where the cat's head is drawn this frame
    pub fn cat_head(&self) -> Vec2 {
        CatLayout::new(&self.cat).head_center
    }

    // Drawing

    pub fn background(&self) -> Color {
        self.backdrop.color()
    }

    /// Draw back to front: shapes, fish, ball, cat, particles, bubble, hint
    pub fn draw<R: Rng + ?Sized>(&self, batch: &mut ShapeBatch, rng: &mut R) {
        self.backdrop.draw(batch);
        self.fish.draw(batch);

        if let Some(ball) = self.ball {
            batch.circle(ball, self.tuning.ball_radius, BALL_COLOR);
        }

        draw_cat(&self.cat, batch, rng);
        self.particles.draw(batch);

        if self.bubble_visible() {
            self.draw_bubble(batch);
        }

        batch.text(EXIT_HINT, Vec2::new(10.0, 10.0), 14.0, 2.0, Color::WHITE);
    }

    fn draw_bubble(&self, batch: &mut ShapeBatch) {
        let anchor = self.cat.position();
        let corner = anchor + Vec2::new(100.0, -200.0);
        let size = Vec2::new(200.0, 100.0);

        batch.ellipse_in_rect(corner, size, Color::WHITE);
        batch.polygon(
            &[
                corner + Vec2::new(20.0, 80.0),
                corner + Vec2::new(50.0, 80.0),
                anchor + Vec2::new(50.0, -100.0),
            ],
            Color::WHITE,
        );

        let text_height = 36.0;
        let origin = corner
            + Vec2::new(
                (size.x - text_width(MEOW_TEXT, text_height)) / 2.0,
                (size.y - text_height) / 2.0,
            );
        batch.text(MEOW_TEXT, origin, text_height, 5.0, Color::BLACK);
    }

    // Read accessors

    pub fn bubble_visible(&self) -> bool {
        self.bubble_timer > 0
    }
}

// Only inspected by tests
#[cfg(test)]
impl Scene {
    pub(crate) fn ball(&self) -> Option<Vec2> {
        self.ball
    }
}
