use super::config::SceneConfig;
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;
use std::f32::consts::PI;

/// One low-poly shape. `rotation` holds XYZ Euler angles in radians; `x` is
/// pitch and `y` is yaw. Angles accumulate without wrapping.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub size: f32,
    pub position: Vec3,
    pub rotation: Vec3,
    pub opacity: f32,
}

impl Shape {
    pub fn random<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Self {
        let size = rng.gen_range(config.size_range());
        let opacity = rng.gen_range(config.opacity_range());
        let [sx, sy, sz] = config.shape_spread;
        let position = Vec3::new(
            (rng.gen::<f32>() - 0.5) * sx,
            (rng.gen::<f32>() - 0.5) * sy,
            // pushed toward and away from the camera alike
            (rng.gen::<f32>() - 0.5) * -sz,
        );
        let rotation = Vec3::new(rng.gen::<f32>() * PI, rng.gen::<f32>() * PI, 0.0);
        Self {
            size,
            position,
            rotation,
            opacity,
        }
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.size),
            self.orientation(),
            self.position,
        )
    }
}

/// Static point cloud. Positions are generated once and never touched again.
#[derive(Clone, Debug)]
pub struct ParticleField {
    positions: Vec<[f32; 3]>,
}

impl ParticleField {
    pub fn random<R: Rng + ?Sized>(count: usize, spread: f32, rng: &mut R) -> Self {
        let positions = (0..count)
            .map(|_| {
                [
                    (rng.gen::<f32>() - 0.5) * spread,
                    (rng.gen::<f32>() - 0.5) * spread,
                    (rng.gen::<f32>() - 0.5) * spread,
                ]
            })
            .collect();
        Self { positions }
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Everything that gets drawn: the rotating shapes and the particle cloud.
#[derive(Clone, Debug)]
pub struct Scene {
    pub shapes: Vec<Shape>,
    pub particles: ParticleField,
}

impl Scene {
    pub fn generate<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Self {
        let shapes = (0..config.shape_count)
            .map(|_| Shape::random(config, rng))
            .collect();
        let particles = ParticleField::random(config.particle_count, config.particle_spread, rng);
        Self { shapes, particles }
    }
}
