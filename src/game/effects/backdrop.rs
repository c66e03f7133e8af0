// Background color and decorative shapes

use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

use crate::engine::renderer::{Color, ShapeBatch};

/// Dark colors only, so background changes never flash bright
pub const DARK_PALETTE: [Color; 10] = [
    Color::rgb(0, 60, 0),   // Dark Green
    Color::rgb(60, 0, 0),   // Dark Red
    Color::rgb(0, 0, 60),   // Dark Blue
    Color::rgb(60, 0, 60),  // Dark Purple
    Color::rgb(0, 60, 60),  // Dark Teal
    Color::rgb(60, 60, 0),  // Dark Olive
    Color::rgb(80, 20, 50), // Dark Pink
    Color::rgb(30, 30, 30), // Dark Grey
    Color::rgb(20, 40, 60), // Dark Slate
    Color::rgb(40, 20, 0),  // Dark Brown
];

/// Background color at startup
pub const INITIAL_BACKGROUND: Color = Color::rgb(30, 30, 30);

/// Size range for random shapes, pixels
const MIN_SHAPE_SIZE: f32 = 20.0;
const MAX_SHAPE_SIZE: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Circle centered on the position, `size` is the radius
    Circle,
    /// Square with its top-left corner on the position, `size` is the side
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropShape {
    pub kind: ShapeKind,
    pub color: Color,
    pub position: Vec2,
    pub size: f32,
}

impl BackdropShape {
    /// A random shape somewhere inside a `width` x `height` window
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        let kind = if rng.gen_bool(0.5) {
            ShapeKind::Circle
        } else {
            ShapeKind::Square
        };
        Self {
            kind,
            color: Color::rgb(rng.gen(), rng.gen(), rng.gen()),
            position: Vec2::new(
                rng.gen_range(0.0..=width.max(0.0)),
                rng.gen_range(0.0..=height.max(0.0)),
            ),
            size: rng.gen_range(MIN_SHAPE_SIZE..=MAX_SHAPE_SIZE),
        }
    }
}

/// Background color plus a bounded list of shapes, oldest dropped first
#[derive(Debug, Clone)]
pub struct Backdrop {
    color: Color,
    shapes: VecDeque<BackdropShape>,
    capacity: usize,
}

impl Backdrop {
    pub fn new(capacity: usize) -> Self {
        Self {
            color: INITIAL_BACKGROUND,
            shapes: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Switch to a random dark palette color
    pub fn change_color<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Some(color) = DARK_PALETTE.choose(rng) {
            self.color = *color;
        }
    }

    pub fn push(&mut self, shape: BackdropShape) {
        self.shapes.push_back(shape);
        while self.shapes.len() > self.capacity {
            self.shapes.pop_front();
        }
    }

    pub fn add_random_shape<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f32, height: f32) {
        self.push(BackdropShape::random(rng, width, height));
    }

    pub fn clear_shapes(&mut self) {
        self.shapes.clear();
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn draw(&self, batch: &mut ShapeBatch) {
        for shape in &self.shapes {
            match shape.kind {
                ShapeKind::Circle => batch.circle(shape.position, shape.size, shape.color),
                ShapeKind::Square => batch.rect(shape.position, Vec2::splat(shape.size), shape.color),
            }
        }
    }
}

// Only inspected by tests
#[cfg(test)]
impl Backdrop {
    pub(crate) fn shapes(&self) -> impl Iterator<Item = &BackdropShape> {
        self.shapes.iter()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn shape(size: f32) -> BackdropShape {
        BackdropShape {
            kind: ShapeKind::Circle,
            color: Color::WHITE,
            position: Vec2::ZERO,
            size,
        }
    }

    #[test]
    fn test_starts_dark_grey_and_empty() {
        let backdrop = Backdrop::new(20);
        assert_eq!(backdrop.color(), INITIAL_BACKGROUND);
        assert!(backdrop.is_empty());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut backdrop = Backdrop::new(3);
        for i in 0..5 {
            backdrop.push(shape(i as f32));
        }
        let sizes: Vec<f32> = backdrop.shapes().map(|s| s.size).collect();
        assert_eq!(sizes, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_change_color_uses_palette() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut backdrop = Backdrop::new(20);
        for _ in 0..50 {
            backdrop.change_color(&mut rng);
            assert!(DARK_PALETTE.contains(&backdrop.color()));
        }
    }

    #[test]
    fn test_random_shapes_within_window() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let s = BackdropShape::random(&mut rng, 800.0, 600.0);
            assert!(s.position.x >= 0.0 && s.position.x <= 800.0);
            assert!(s.position.y >= 0.0 && s.position.y <= 600.0);
            assert!(s.size >= MIN_SHAPE_SIZE && s.size <= MAX_SHAPE_SIZE);
        }
    }

    #[test]
    fn test_clear_shapes_keeps_color() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut backdrop = Backdrop::new(20);
        backdrop.change_color(&mut rng);
        let color = backdrop.color();
        backdrop.add_random_shape(&mut rng, 100.0, 100.0);
        backdrop.clear_shapes();
        assert!(backdrop.is_empty());
        assert_eq!(backdrop.color(), color);
    }

    #[test]
    fn test_draw_emits_geometry() {
        let mut backdrop = Backdrop::new(20);
        let mut batch = ShapeBatch::new(false);
        backdrop.draw(&mut batch);
        assert!(batch.is_empty());

        backdrop.push(BackdropShape {
            kind: ShapeKind::Square,
            ..shape(10.0)
        });
        backdrop.draw(&mut batch);
        assert_eq!(batch.vertices().len(), 4);
    }
}
