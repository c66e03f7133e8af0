// sRGB colors as the scene describes them

use crate::core::math::srgb_to_linear;

/// An 8-bit sRGB color with alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const PINK: Color = Color::rgb(255, 192, 203);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with alpha scaled from 0.0 to 1.0
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    /// Normalized sRGB components
    pub fn to_srgb_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Components converted to linear light, for sRGB render targets
    pub fn to_linear_array(self) -> [f32; 4] {
        let [r, g, b, a] = self.to_srgb_array();
        [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a]
    }

    /// Clear color for a render pass
    pub fn to_wgpu(self, linear: bool) -> wgpu::Color {
        let [r, g, b, a] = if linear {
            self.to_linear_array()
        } else {
            self.to_srgb_array()
        };
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}
