mod render;

use cylinder_core::{
    drag_guide, draw_list, FrameClock, FrameInput, OrbitCamera, PointerTracker, RayCaster,
    SceneConfig, SceneState,
};
use glam::DVec2;
use render::{GpuState, InstanceData};
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

const CAMERA_ORBIT_STEP: f64 = 0.03; // radians per frame while an arrow key is held
const GUIDE_DOTS: usize = 24;
const GUIDE_START: f64 = 0.35; // skip the stretch of the guide nearest the eye
const GUIDE_DOT_RADIUS: f32 = 0.02;
const GUIDE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 0.8];

#[derive(Default)]
struct OrbitKeys {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
}

impl OrbitKeys {
    fn set(&mut self, key: KeyCode, pressed: bool) {
        match key {
            KeyCode::ArrowLeft => self.left = pressed,
            KeyCode::ArrowRight => self.right = pressed,
            KeyCode::ArrowUp => self.up = pressed,
            KeyCode::ArrowDown => self.down = pressed,
            _ => {}
        }
    }

    fn step(&self) -> (f64, f64) {
        let axis = |neg: bool, pos: bool| (pos as i32 - neg as i32) as f64 * CAMERA_ORBIT_STEP;
        (axis(self.left, self.right), axis(self.down, self.up))
    }
}

struct App {
    scene: SceneState,
    camera: OrbitCamera,
    pointer: PointerTracker,
    clock: FrameClock,
    orbit_keys: OrbitKeys,
}

impl App {
    fn frame(&mut self) -> Vec<InstanceData> {
        let elapsed_seconds = self.clock.tick();

        // camera stays put while a marker is in hand
        if !self.scene.is_dragging() {
            let (yaw, pitch) = self.orbit_keys.step();
            if yaw != 0.0 || pitch != 0.0 {
                self.camera.orbit(yaw, pitch);
            }
        }

        let input = FrameInput {
            elapsed_seconds,
            pointer: self.pointer.frame(),
        };
        self.scene.update(&input, &self.camera);
        self.instances()
    }

    /// Markers plus the drag guide, sorted back-to-front from the eye.
    fn instances(&self) -> Vec<InstanceData> {
        let eye = self.camera.eye_position();
        let mut items: Vec<(f64, InstanceData)> = draw_list(&self.scene)
            .into_iter()
            .map(|m| {
                (
                    m.world_position.distance_squared(eye),
                    InstanceData {
                        pos: m.world_position.as_vec3().to_array(),
                        radius: m.radius as f32,
                        color: m.color,
                    },
                )
            })
            .collect();

        if let Some((from, to)) = drag_guide(&self.scene, eye) {
            for i in 0..GUIDE_DOTS {
                let t = GUIDE_START + (1.0 - GUIDE_START) * i as f64 / (GUIDE_DOTS - 1) as f64;
                let p = from.lerp(to, t);
                items.push((
                    p.distance_squared(eye),
                    InstanceData {
                        pos: p.as_vec3().to_array(),
                        radius: GUIDE_DOT_RADIUS,
                        color: GUIDE_COLOR,
                    },
                ));
            }
        }

        items.sort_by(|a, b| b.0.total_cmp(&a.0));
        items.into_iter().map(|(_, inst)| inst).collect()
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let scene = SceneState::new(SceneConfig::default())?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Cylinder Snap")
        .with_inner_size(winit::dpi::LogicalSize::new(800.0, 600.0))
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;
    let size = state.size();
    let mut app = App {
        scene,
        camera: OrbitCamera::new(size.width as f64, size.height as f64),
        pointer: PointerTracker::new(),
        clock: FrameClock::new(),
        orbit_keys: OrbitKeys::default(),
    };

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                state.resize(size);
                app.camera.set_viewport(size.width as f64, size.height as f64);
            }
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                app.pointer.cursor_moved(DVec2::new(position.x, position.y));
            }
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => match button_state {
                ElementState::Pressed => app.pointer.press(),
                ElementState::Released => app.pointer.release(),
            },
            WindowEvent::KeyboardInput { event: key, .. } => {
                let PhysicalKey::Code(code) = key.physical_key else {
                    return;
                };
                let pressed = key.state == ElementState::Pressed;
                if code == KeyCode::Space && pressed && !key.repeat {
                    app.scene.toggle_auto_rotate();
                } else {
                    app.orbit_keys.set(code, pressed);
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            let instances = app.frame();
            match state.render(&app.camera, &instances) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("render error: out of GPU memory");
                    elwt.exit()
                }
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
