// Per-frame animation: shape spin, parallax capture and camera easing.

use super::constants::*;
use super::scene::{Scene, Shape};
use super::viewport::Viewport;
use glam::{Mat4, Vec3};

/// Normalized pointer offset the camera drifts toward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxTarget {
    pub x: f32,
    pub y: f32,
}

impl ParallaxTarget {
    /// Map a pointer position in CSS pixels to the parallax target. No
    /// smoothing here; easing happens once per frame in [`CameraRig::ease_toward`].
    pub fn from_pointer(client_x: f64, client_y: f64, viewport: &Viewport) -> Self {
        if viewport.css_width <= 0.0 || viewport.css_height <= 0.0 {
            return Self::default();
        }
        let half = PARALLAX_SCALE * 0.5;
        let x = ((client_x / viewport.css_width - 0.5) as f32 * PARALLAX_SCALE).clamp(-half, half);
        let y = ((client_y / viewport.css_height - 0.5) as f32 * PARALLAX_SCALE).clamp(-half, half);
        Self { x, y }
    }
}

/// Perspective camera that always looks at the scene origin.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub fovy_radians: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_Z),
            fovy_radians: CAMERA_FOV_Y_DEG.to_radians(),
            aspect: 1.0,
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl CameraRig {
    pub fn new(aspect: f32) -> Self {
        Self {
            aspect,
            ..Self::default()
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Exponential smoothing toward the target. Screen y grows downward, so
    /// the camera chases `-target.y`. `z` is fixed.
    pub fn ease_toward(&mut self, target: ParallaxTarget) {
        self.position.x += (target.x - self.position.x) * CAMERA_EASE;
        self.position.y += (-target.y - self.position.y) * CAMERA_EASE;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Camera basis vectors in world space, used to billboard particles.
    pub fn right_up(&self) -> (Vec3, Vec3) {
        let view = self.view_matrix();
        let right = Vec3::new(view.x_axis.x, view.y_axis.x, view.z_axis.x);
        let up = Vec3::new(view.x_axis.y, view.y_axis.y, view.z_axis.y);
        (right, up)
    }
}

/// Yaw increment for the shape at `index`.
#[inline]
pub fn yaw_step(index: usize) -> f32 {
    YAW_STEP_BASE + index as f32 * YAW_STEP_PER_INDEX
}

pub fn advance_shapes(shapes: &mut [Shape]) {
    for (i, shape) in shapes.iter_mut().enumerate() {
        shape.rotation.y += yaw_step(i);
        shape.rotation.x += PITCH_STEP;
    }
}

/// One animation step: spin the shapes, then ease the camera. The view
/// matrix is derived from the position on demand, so the camera keeps facing
/// the origin after every step.
pub fn step(scene: &mut Scene, camera: &mut CameraRig, target: ParallaxTarget) {
    advance_shapes(&mut scene.shapes);
    camera.ease_toward(target);
}
