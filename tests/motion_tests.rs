// Host-side tests for the per-frame update: rotation, parallax and camera easing.

#![allow(dead_code)]
mod pure {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod motion {
        include!("../src/core/motion.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod viewport {
        include!("../src/core/viewport.rs");
    }
}

use crate::pure::config::SceneConfig;
use crate::pure::motion::*;
use crate::pure::scene::Scene;
use crate::pure::viewport::Viewport;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn scene() -> Scene {
    Scene::generate(&SceneConfig::default(), &mut StdRng::seed_from_u64(5))
}

#[test]
fn yaw_steps_grow_with_shape_index() {
    assert!((yaw_step(0) - 0.002).abs() < 1e-9);
    assert!((yaw_step(5) - 0.0035).abs() < 1e-7);
}

#[test]
fn n_updates_accumulate_exact_per_index_rotation() {
    let mut scene = scene();
    let start: Vec<Vec3> = scene.shapes.iter().map(|s| s.rotation).collect();
    let mut camera = CameraRig::default();
    let n = 500;
    for _ in 0..n {
        step(&mut scene, &mut camera, ParallaxTarget::default());
    }
    for (i, shape) in scene.shapes.iter().enumerate() {
        let yaw = shape.rotation.y - start[i].y;
        let pitch = shape.rotation.x - start[i].x;
        let expected_yaw = n as f32 * (0.002 + i as f32 * 0.0003);
        assert!(
            (yaw - expected_yaw).abs() < 1e-3,
            "shape {i}: yaw {yaw} expected {expected_yaw}"
        );
        assert!((pitch - n as f32 * 0.0015).abs() < 1e-3);
        assert_eq!(shape.rotation.z, start[i].z);
    }
}

#[test]
fn rotation_leaves_everything_else_alone() {
    let mut scene = scene();
    let before = scene.shapes.clone();
    let particles = scene.particles.positions().to_vec();
    advance_shapes(&mut scene.shapes);
    for (a, b) in before.iter().zip(&scene.shapes) {
        assert_eq!(a.size, b.size);
        assert_eq!(a.position, b.position);
        assert_eq!(a.opacity, b.opacity);
    }
    assert_eq!(scene.particles.positions(), &particles[..]);
}

#[test]
fn one_update_applies_the_smoothing_formula() {
    let mut camera = CameraRig::default();
    camera.position.x = 0.12;
    camera.position.y = -0.05;
    let (cx, cy) = (camera.position.x, camera.position.y);
    let target = ParallaxTarget { x: 0.25, y: -0.1 };
    camera.ease_toward(target);
    let ex = cx + (target.x - cx) * 0.03;
    let ey = cy + (-target.y - cy) * 0.03;
    assert!((camera.position.x - ex).abs() < 1e-7);
    assert!((camera.position.y - ey).abs() < 1e-7);
    assert_eq!(camera.position.z, 8.0);
}

#[test]
fn camera_converges_on_a_fixed_target() {
    let mut camera = CameraRig::default();
    let target = ParallaxTarget { x: 0.3, y: 0.3 };
    for _ in 0..1000 {
        camera.ease_toward(target);
    }
    assert!((camera.position.x - 0.3).abs() < 1e-4);
    assert!((camera.position.y + 0.3).abs() < 1e-4);
}

#[test]
fn camera_always_faces_the_origin() {
    let mut camera = CameraRig::default();
    camera.position = Vec3::new(0.3, -0.2, 8.0);
    let view = camera.view_matrix();
    // origin lands straight ahead on the view axis
    let origin = view.transform_point3(Vec3::ZERO);
    assert!(origin.x.abs() < 1e-5 && origin.y.abs() < 1e-5);
    assert!(origin.z < 0.0);
    let (right, up) = camera.right_up();
    assert!((right.length() - 1.0).abs() < 1e-5);
    assert!(right.dot(up).abs() < 1e-5);
}

#[test]
fn pointer_maps_to_parallax_target() {
    let vp = Viewport::new(1000.0, 500.0, 1.0);
    let centre = ParallaxTarget::from_pointer(500.0, 250.0, &vp);
    assert!(centre.x.abs() < 1e-6 && centre.y.abs() < 1e-6);

    let corner = ParallaxTarget::from_pointer(0.0, 500.0, &vp);
    assert!((corner.x + 0.3).abs() < 1e-6);
    assert!((corner.y - 0.3).abs() < 1e-6);

    let t = ParallaxTarget::from_pointer(750.0, 125.0, &vp);
    assert!((t.x - (0.75 - 0.5) * 0.6).abs() < 1e-6);
    assert!((t.y - (0.25 - 0.5) * 0.6).abs() < 1e-6);
}

#[test]
fn parallax_target_is_bounded_and_safe_on_empty_viewport() {
    let vp = Viewport::new(800.0, 600.0, 2.0);
    let far = ParallaxTarget::from_pointer(-4000.0, 9000.0, &vp);
    assert!((-0.3..=0.3).contains(&far.x));
    assert!((-0.3..=0.3).contains(&far.y));

    let empty = Viewport::new(0.0, 0.0, 1.0);
    assert_eq!(
        ParallaxTarget::from_pointer(10.0, 10.0, &empty),
        ParallaxTarget::default()
    );
}

#[test]
fn aspect_updates_projection() {
    let mut camera = CameraRig::new(1.0);
    let square = camera.projection_matrix();
    camera.set_aspect(2.0);
    assert_eq!(camera.aspect, 2.0);
    assert_ne!(square, camera.projection_matrix());
    camera.set_aspect(f32::NAN);
    assert_eq!(camera.aspect, 2.0);
}
