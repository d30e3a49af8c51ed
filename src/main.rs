//! Ball Court entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use ball_court::Settings;
    use ball_court::renderer::{DrawList, RenderState};
    use ball_court::sim::{BallCourt, Viewport, on_pointer_down, tick};

    /// App instance holding all state
    struct App {
        court: BallCourt,
        draw_list: DrawList,
        render_state: Option<RenderState>,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl App {
        fn new(court: BallCourt) -> Self {
            Self {
                court,
                draw_list: DrawList::new(),
                render_state: None,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run one court tick and present it
        fn frame(&mut self, time: f64) {
            self.draw_list.clear();
            let report = tick(&mut self.court, &mut self.draw_list);

            self.track_fps(time);
            if report.frame % 600 == 0 {
                log::debug!(
                    "Frame {}: {} fps, {} balls live",
                    report.frame,
                    self.fps,
                    report.balls_live
                );
            }

            self.render();
        }

        fn track_fps(&mut self, time: f64) {
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Oldest sample is the one we will overwrite next
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.draw_list) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    /// Settings come from an optional `data-settings` JSON attribute
    fn load_settings(canvas: &HtmlCanvasElement) -> Settings {
        let Some(json) = canvas.get_attribute("data-settings") else {
            log::info!("Using default settings");
            return Settings::default();
        };
        match Settings::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings: {}", settings.to_json());
                settings
            }
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Settings::default()
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Ball Court starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Viewport is the window size at load time; clicks arrive in the same
        // CSS pixel space, so no device pixel ratio scaling.
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0) as u32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = load_settings(&canvas);
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let court = BallCourt::new(
            Viewport::new(width as f32, height as f32),
            settings,
            seed,
        );
        let app = Rc::new(RefCell::new(App::new(court)));

        log::info!("Court {}x{} initialized with seed: {}", width, height, seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .expect("Failed to create device");
        app.borrow_mut().render_state = Some(render_state);

        setup_click_handler(app.clone());

        // Start frame loop
        request_animation_frame(app);

        log::info!("Ball Court running!");
    }

    /// Each click spawns one ball, between frames
    fn setup_click_handler(app: Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let mut a = app.borrow_mut();
            on_pointer_down(
                &mut a.court,
                event.client_x() as f32,
                event.client_y() as f32,
            );
        });
        let _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Ball Court (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the interactive web version");

    run_headless();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the court with scripted clicks and report what happened
#[cfg(not(target_arch = "wasm32"))]
fn run_headless() {
    use ball_court::Settings;
    use ball_court::consts::DEFAULT_SEED;
    use ball_court::renderer::DrawList;
    use ball_court::sim::{BallCourt, Viewport, on_pointer_down, tick};

    const WIDTH: f32 = 800.0;
    const HEIGHT: f32 = 600.0;
    const FRAMES: u64 = 600;

    let settings = Settings::default();
    let seed = settings.seed.unwrap_or(DEFAULT_SEED);
    let mut court = BallCourt::new(Viewport::new(WIDTH, HEIGHT), settings, seed);
    let mut draw_list = DrawList::new();

    // A click every 10 frames, walking diagonally and sometimes off-screen
    let click_at = |n: u64| {
        let x = (n as f32 * 137.0) % (WIDTH + 100.0) - 50.0;
        let y = (n as f32 * 89.0) % (HEIGHT + 100.0) - 50.0;
        (x, y)
    };

    let mut clicks = 0u64;
    let mut collisions = 0usize;
    let mut culled = 0usize;
    let mut sparks = 0usize;
    let mut commands = 0usize;

    for frame in 0..FRAMES {
        if frame % 10 == 0 {
            let (x, y) = click_at(clicks);
            on_pointer_down(&mut court, x, y);
            clicks += 1;
        }

        draw_list.clear();
        let report = tick(&mut court, &mut draw_list);
        collisions += report.collisions.len();
        culled += report.removed.len();
        sparks += report.sparks_drawn;
        commands += draw_list.len();
    }

    log::info!(
        "{} frames (seed {}): {} clicks, {} collisions, {} culled, {} sparks, {} draw commands, {} balls live",
        court.frames(),
        court.seed(),
        clicks,
        collisions,
        culled,
        sparks,
        commands,
        court.balls().len()
    );
}
