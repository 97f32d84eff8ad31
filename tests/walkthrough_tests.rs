//! End-to-end checks through the public API: input events in, matrices out.

use cube_sandbox::render::{FrameInput, InputState, MoveKey, PressedKeys, MAX_PITCH_DEGREES};
use cube_sandbox::{generate_cube, look_at, perspective, FreeLookCamera, GeometryError, Scene};
use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_3;
use winit::keyboard::KeyCode;

const EPSILON: f32 = 1e-5;

#[test]
fn forward_for_one_second_from_origin() {
    let mut camera = FreeLookCamera::default();
    let mut input = InputState::new();
    input.on_key_code(KeyCode::KeyW, true);

    camera.update(&input.take_frame(1.0)).unwrap();

    assert!(camera.eye().abs_diff_eq(Vec3::new(0.0, 0.0, -10.0), EPSILON));
}

#[test]
fn many_small_frames_match_one_large_frame() {
    let mut stepped = FreeLookCamera::default();
    let mut single = FreeLookCamera::default();
    let keys = PressedKeys::new().with(MoveKey::Forward).with(MoveKey::Right);

    for _ in 0..100 {
        stepped.update(&FrameInput::new(0.0, 0.0, keys, 0.01)).unwrap();
    }
    single.update(&FrameInput::new(0.0, 0.0, keys, 1.0)).unwrap();

    assert!(stepped.eye().abs_diff_eq(single.eye(), 1e-3));
    assert!((single.eye().length() - 10.0 * 2.0_f32.sqrt()).abs() < 1e-4);
}

#[test]
fn pitch_clamped_through_input_state() {
    let limit = MAX_PITCH_DEGREES.to_radians();
    let mut camera = FreeLookCamera::default();
    let mut input = InputState::new();

    for dy in [-300.0, -300.0, 900.0, 900.0, -50.0, 10_000.0] {
        input.on_mouse_motion(0.0, dy);
        camera.update(&input.take_frame(0.016)).unwrap();
        assert!(camera.pitch().abs() <= limit);
    }
}

#[test]
fn scene_frame_composes_camera_and_projection() {
    let mut scene = Scene::new(4.0).unwrap();
    scene.resize(1024, 768).unwrap();

    let matrices = scene.frame(&FrameInput::new(12.0, -3.0, PressedKeys::new(), 0.016)).unwrap();

    let forward = scene.camera.basis().forward;
    let view = look_at(scene.camera.eye(), scene.camera.eye() + forward, Vec3::Y).unwrap();
    let projection = perspective(FRAC_PI_3, 4.0 / 3.0, 0.1, 100.0).unwrap();

    assert_eq!(matrices.view, view);
    assert!(matrices.projection.abs_diff_eq(projection, EPSILON));
    assert!(matrices
        .view_projection()
        .abs_diff_eq(projection * view, EPSILON));
}

#[test]
fn cube_corners_project_inside_view_at_start() {
    let mut scene = Scene::new(4.0).unwrap();
    let matrices = scene.frame(&FrameInput::idle(0.0)).unwrap();
    let mvp: Mat4 = matrices.mvp();

    for v in &scene.mesh().vertices {
        let clip = mvp * v.position().extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(clip.w > 0.0);
        assert!(ndc.x.abs() < 1.0 && ndc.y.abs() < 1.0 && ndc.z.abs() < 1.0);
    }
}

#[test]
fn mesh_buffers_are_consistent() {
    let mesh = generate_cube(2.5).unwrap();

    assert_eq!(mesh.vertices.len() % 4, 0);
    assert_eq!(mesh.indices.len() % 3, 0);
    assert!(mesh
        .indices
        .iter()
        .all(|&i| (i as usize) < mesh.vertices.len()));

    // each vertex belongs to exactly one face, so exactly one quad uses it
    for (i, _) in mesh.vertices.iter().enumerate() {
        let faces_using: usize = mesh
            .indices
            .chunks_exact(6)
            .filter(|quad| quad.contains(&(i as u32)))
            .count();
        assert_eq!(faces_using, 1);
    }
}

#[test]
fn errors_surface_to_the_caller() {
    assert_eq!(
        generate_cube(-1.0).unwrap_err(),
        GeometryError::InvalidMeshSize(-1.0)
    );
    assert!(perspective(FRAC_PI_3, 1.0, 1.0, 0.5).is_err());
    assert_eq!(
        look_at(Vec3::ONE, Vec3::ONE, Vec3::Y).unwrap_err(),
        GeometryError::DegenerateViewDirection
    );

    // looking straight down with +Y as world up
    assert_eq!(
        look_at(Vec3::ZERO, Vec3::NEG_Y, Vec3::Y).unwrap_err(),
        GeometryError::DegenerateUpVector
    );
}
