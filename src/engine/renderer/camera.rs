// Screen-space camera for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Maps window pixels (origin top-left, y down) to clip space
#[derive(Debug, Clone)]
pub struct Camera {
    /// Viewport width
    viewport_width: f32,
    /// Viewport height
    viewport_height: f32,
    /// View-projection matrix
    view_proj: Mat4,
}

impl Camera {
    /// Create a new camera covering a viewport of the given size
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            viewport_width,
            viewport_height,
            view_proj: Mat4::IDENTITY,
        };
        camera.update_view_proj();
        camera
    }

    /// Update the view-projection matrix
    fn update_view_proj(&mut self) {
        // Top and bottom swapped so y grows downward like window coordinates
        self.view_proj = Mat4::orthographic_rh(
            0.0,
            self.viewport_width,
            self.viewport_height,
            0.0,
            -1.0,
            1.0,
        );
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.update_view_proj();
    }

    /// Get the view-projection matrix
    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }
}

/// Camera uniform for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Create a new camera uniform from a camera
    pub fn new(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec4;

    fn project(camera: &Camera, x: f32, y: f32) -> Vec4 {
        camera.view_proj_matrix() * Vec4::new(x, y, 0.0, 1.0)
    }

    #[test]
    fn test_top_left_maps_to_clip_corner() {
        let camera = Camera::new(800.0, 600.0);
        let clip = project(&camera, 0.0, 0.0);
        assert_relative_eq!(clip.x, -1.0, epsilon = 1e-5);
        assert_relative_eq!(clip.y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_bottom_right_maps_to_clip_corner() {
        let camera = Camera::new(800.0, 600.0);
        let clip = project(&camera, 800.0, 600.0);
        assert_relative_eq!(clip.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(clip.y, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_resize_updates_projection() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.resize(1600.0, 1200.0);
        let clip = project(&camera, 800.0, 600.0);
        assert_relative_eq!(clip.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(clip.y, 0.0, epsilon = 1e-5);
    }
}
