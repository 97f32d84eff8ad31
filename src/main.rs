use cube_sandbox::render::{FrameInput, InputState, MoveKey};
use cube_sandbox::{GeometryResult, Scene};
use winit::keyboard::KeyCode;

const FRAME_TIME: f32 = 1.0 / 60.0;

/// One scripted step: mouse motion and key changes applied before `frames` frames.
struct Step {
    label: &'static str,
    mouse: (f32, f32),
    press: &'static [KeyCode],
    release: &'static [KeyCode],
    frames: u32,
}

const SCRIPT: &[Step] = &[
    Step {
        label: "settle",
        mouse: (0.0, 0.0),
        press: &[],
        release: &[],
        frames: 1,
    },
    Step {
        label: "walk toward cube",
        mouse: (0.0, 0.0),
        press: &[KeyCode::KeyW],
        release: &[],
        frames: 30,
    },
    Step {
        label: "strafe right while walking",
        mouse: (0.0, 0.0),
        press: &[KeyCode::KeyD],
        release: &[],
        frames: 15,
    },
    Step {
        label: "turn back toward cube",
        mouse: (-25.0, 0.0),
        press: &[],
        release: &[KeyCode::KeyW, KeyCode::KeyD],
        frames: 1,
    },
    Step {
        label: "rise and look down",
        mouse: (0.0, 40.0),
        press: &[KeyCode::Space],
        release: &[],
        frames: 20,
    },
    Step {
        label: "stop",
        mouse: (0.0, 0.0),
        press: &[],
        release: &[KeyCode::Space],
        frames: 1,
    },
];

fn run() -> GeometryResult<()> {
    let mut scene = Scene::new(cube_sandbox::scene::DEFAULT_CUBE_SIDE)?;
    scene.resize(800, 600)?;

    let mesh = scene.mesh();
    log::info!(
        "Cube ready: {} vertices ({} bytes), {} triangles",
        mesh.vertices.len(),
        mesh.vertex_bytes().len(),
        mesh.triangle_count()
    );

    let mut input = InputState::new();

    for step in SCRIPT {
        for &code in step.press {
            input.on_key_code(code, true);
        }
        for &code in step.release {
            input.on_key_code(code, false);
        }
        input.on_mouse_motion(step.mouse.0, step.mouse.1);

        let mut matrices = None;
        for _ in 0..step.frames {
            matrices = Some(scene.frame(&input.take_frame(FRAME_TIME))?);
        }

        let held: Vec<MoveKey> = input.keys().iter().collect();
        log::info!(
            "{:<28} eye={:?} yaw={:.2} pitch={:.2} keys={:?}",
            step.label,
            scene.camera.eye(),
            scene.camera.yaw(),
            scene.camera.pitch(),
            held
        );
        if let Some(m) = matrices {
            log::debug!("view={:?}", m.view);
            log::debug!("mvp={:?}", m.mvp());
        }
    }

    // The first frame after a stall must not jump.
    scene.frame(&FrameInput::idle(0.0))?;
    log::info!("Final eye position {:?}", scene.camera.eye());

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("Sandbox walkthrough failed: {}", e);
        std::process::exit(1);
    }
}
