// Cat drawing
//
// All lengths are design-space pixels at scale 1.0 and are multiplied by
// the cat's scale. The anchor (x, y) is the top-center of the body.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::{PI, TAU};

use super::{Cat, Expression};
use crate::core::math::scaled;
use crate::engine::renderer::{Color, ShapeBatch};

const FUR: Color = Color::GRAY;
const PAW: Color = Color::WHITE;
const EYE: Color = Color::WHITE;
const INK: Color = Color::BLACK;
const NOSE: Color = Color::PINK;

/// How far a crouch lowers the head and the top of the body
const CROUCH_DROP: f32 = 30.0;
/// How far the paws tuck in while crouched
const CROUCH_TUCK: f32 = 10.0;
/// How far the back paws hang down mid-jump
const DANGLE: f32 = 10.0;
/// Sideways tail sway at full swing
const TAIL_SWAY: f32 = 8.0;

/// Screen positions of every body part for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct CatLayout {
    pub scale: f32,
    pub anchor: Vec2,
    pub head_center: Vec2,
    pub head_radius: f32,
    /// Body ellipse bounding box
    pub body_min: Vec2,
    pub body_size: Vec2,
    pub eye_y: f32,
    pub mouth_y: f32,
    /// The waving front paw first, then front right, back left, back right
    pub paws: [Vec2; 4],
    pub paw_radius: f32,
    pub tail_root: Vec2,
}

impl CatLayout {
    pub fn new(cat: &Cat) -> Self {
        let scale = cat.scale();
        let s = |v: f32| scaled(v, scale);
        let anchor = cat.position();
        let (cx, cy) = (anchor.x, anchor.y);

        let drop = if cat.is_crouching() { s(CROUCH_DROP) } else { 0.0 };
        let tuck = if cat.is_crouching() { s(CROUCH_TUCK) } else { 0.0 };
        let dangle = if cat.is_airborne() { s(DANGLE) } else { 0.0 };

        let head_center = Vec2::new(cx, cy - s(60.0) + drop);
        let body_min = Vec2::new(cx - s(100.0), cy + drop);
        let body_size = Vec2::new(s(200.0), s(150.0) - drop);

        let swing = cat.paw_angle() / 45.0;
        let wave_offset = Vec2::new(s(30.0) * swing, -s(30.0) * swing.abs());
        let paws = [
            Vec2::new(cx - s(60.0) + tuck, cy + s(120.0)) + wave_offset,
            Vec2::new(cx + s(60.0) - tuck, cy + s(120.0)),
            Vec2::new(cx - s(80.0) + tuck, cy + s(130.0) + dangle),
            Vec2::new(cx + s(80.0) - tuck, cy + s(130.0) + dangle),
        ];

        Self {
            scale,
            anchor,
            head_center,
            head_radius: s(70.0),
            body_min,
            body_size,
            eye_y: head_center.y - s(10.0),
            mouth_y: head_center.y + s(35.0),
            paws,
            paw_radius: s(25.0),
            tail_root: Vec2::new(cx + s(80.0), cy + s(50.0)),
        }
    }

    fn s(&self, v: f32) -> f32 {
        scaled(v, self.scale)
    }
}

/// Draw the cat into `batch`; `rng` drives the tail-tip jitter
pub fn draw_cat<R: Rng + ?Sized>(cat: &Cat, batch: &mut ShapeBatch, rng: &mut R) {
    let layout = CatLayout::new(cat);
    let s = |v: f32| layout.s(v);
    let (cx, cy) = (layout.anchor.x, layout.anchor.y);
    let head = layout.head_center;

    // Tail
    let jitter_x: f32 = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    let jitter_y: f32 = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    let sway = s(TAIL_SWAY) * (cat.tail_phase() % TAU).sin();
    let tail_tip = Vec2::new(
        cx + s(120.0) + s(30.0) * jitter_x * 0.1 + sway,
        cy - s(50.0) + s(20.0) * jitter_y * 0.1,
    );
    batch.line(layout.tail_root, tail_tip, s(15.0), FUR);

    // Body and head
    batch.ellipse_in_rect(layout.body_min, layout.body_size, FUR);
    batch.circle(head, layout.head_radius, FUR);

    // Ears, outer then inner
    for side in [-1.0, 1.0] {
        batch.polygon(
            &[
                head + Vec2::new(side * s(60.0), -s(20.0)),
                head + Vec2::new(side * s(20.0), -s(50.0)),
                head + Vec2::new(side * s(70.0), -s(90.0)),
            ],
            FUR,
        );
    }
    for side in [-1.0, 1.0] {
        batch.polygon(
            &[
                head + Vec2::new(side * s(55.0), -s(25.0)),
                head + Vec2::new(side * s(25.0), -s(50.0)),
                head + Vec2::new(side * s(65.0), -s(80.0)),
            ],
            NOSE,
        );
    }

    // Eyes
    let eye_y = layout.eye_y;
    if cat.is_blinking() {
        batch.line(
            Vec2::new(cx - s(40.0), eye_y),
            Vec2::new(cx - s(10.0), eye_y),
            s(2.0),
            INK,
        );
        batch.line(
            Vec2::new(cx + s(10.0), eye_y),
            Vec2::new(cx + s(40.0), eye_y),
            s(2.0),
            INK,
        );
    } else {
        let offset = cat.eye_offset();
        for side in [-1.0, 1.0] {
            let eye = Vec2::new(cx + side * s(25.0), eye_y);
            batch.circle(eye, s(15.0), EYE);
            batch.circle(eye + offset, s(7.0), INK);
        }
    }

    // Nose
    batch.circle(Vec2::new(cx, head.y + s(15.0)), s(8.0), NOSE);

    // Mouth
    let mouth_y = layout.mouth_y;
    match cat.expression() {
        Expression::Open => batch.circle(Vec2::new(cx, mouth_y), s(10.0), INK),
        Expression::Tongue => {
            batch.circle(Vec2::new(cx, mouth_y), s(10.0), INK);
            batch.ellipse_in_rect(
                Vec2::new(cx - s(5.0), mouth_y),
                Vec2::new(s(10.0), s(15.0)),
                NOSE,
            );
        }
        Expression::Normal => {
            // Two small smiles meeting under the nose
            let radii = Vec2::splat(s(5.0));
            for center_x in [cx - s(5.0), cx + s(5.0)] {
                let center = Vec2::new(center_x, mouth_y - s(5.0));
                batch.arc(center, radii, PI, TAU, s(2.0), INK);
            }
        }
    }

    // Whiskers
    for i in 0..3 {
        let i = i as f32;
        for side in [-1.0, 1.0] {
            batch.line(
                Vec2::new(cx + side * s(10.0), head.y + s(25.0) + i * s(5.0)),
                Vec2::new(cx + side * s(60.0), head.y + s(15.0) + i * s(10.0)),
                s(2.0),
                INK,
            );
        }
    }

    // Paws
    for paw in layout.paws {
        batch.circle(paw, layout.paw_radius, PAW);
    }
}
