//! AI Raid entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use ai_raid::GameConfig;
    use ai_raid::audio::AudioManager;
    use ai_raid::renderer::{RenderState, frame_vertices};
    use ai_raid::sim::autopilot;
    use ai_raid::sim::{GameEvent, GameState, Presenter, Snapshot, TickInput, WarningKind, run_frame};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        audio: AudioManager,
        input: TickInput,
        /// Demo pilot drives the ship instead of the keyboard
        idle_mode: bool,
    }

    impl Game {
        fn new(config: GameConfig, seed: u64) -> Self {
            Self {
                state: GameState::new(config, seed),
                render_state: None,
                audio: AudioManager::new(),
                input: TickInput::default(),
                idle_mode: false,
            }
        }

        /// Start a fresh run with the same tuning
        fn restart(&mut self, seed: u64) {
            let config = self.state.config.clone();
            self.state = GameState::new(config, seed);
            self.input = TickInput::default();
            log::info!("Game restarted with seed: {}", seed);
        }

        fn frame(&mut self, document: &Document) {
            let Game {
                state,
                render_state,
                audio,
                input,
                idle_mode,
            } = self;

            let input = if *idle_mode {
                autopilot::suggest_input(state)
            } else {
                *input
            };
            let mut presenter = WebPresenter {
                render_state: render_state.as_mut(),
                audio,
                document,
            };
            run_frame(state, &input, &mut presenter);
        }
    }

    /// Draws the frame, plays event cues and refreshes the DOM HUD
    struct WebPresenter<'a> {
        render_state: Option<&'a mut RenderState>,
        audio: &'a AudioManager,
        document: &'a Document,
    }

    impl Presenter for WebPresenter<'_> {
        fn present(&mut self, snapshot: &Snapshot, events: &[GameEvent]) {
            self.audio.play_events(events);

            if let Some(render_state) = self.render_state.as_deref_mut() {
                match render_state.render(&frame_vertices(snapshot)) {
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

            update_hud(self.document, snapshot);
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
        }
    }

    /// Update HUD elements in DOM
    fn update_hud(document: &Document, snapshot: &Snapshot) {
        set_text(document, "hud-score", &snapshot.score.to_string());
        set_text(
            document,
            "hud-level",
            &format!("{} - {}", snapshot.level_name, snapshot.level_instruction),
        );

        let fuel_pct = if snapshot.max_fuel > 0.0 {
            (snapshot.fuel / snapshot.max_fuel * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        set_text(document, "hud-fuel", &format!("{:.0}%", fuel_pct));
        if let Some(bar) = document.get_element_by_id("fuel-bar") {
            let _ = bar.set_attribute("style", &format!("width: {:.1}%", fuel_pct));
        }

        let shield_secs = ai_raid::ticks_to_seconds(snapshot.shield_ticks);
        set_text(
            document,
            "hud-shield",
            &if snapshot.shield_ticks > 0 {
                format!("{:.1}s", shield_secs)
            } else {
                String::new()
            },
        );

        if let Some(el) = document.get_element_by_id("warning") {
            match &snapshot.warning {
                Some(warning) => {
                    el.set_text_content(Some(&warning.text));
                    let class = match warning.kind {
                        WarningKind::Notice => "notice",
                        WarningKind::Alert => "alert",
                    };
                    let _ = el.set_attribute("class", class);
                }
                None => {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }

        set_visible(document, "transition", snapshot.transitioning);
        if let Some(message) = &snapshot.transition_message {
            set_text(document, "transition", message);
        }

        set_visible(document, "victory", snapshot.won);
        set_visible(document, "game-over", snapshot.lost);
        if snapshot.won || snapshot.lost {
            set_text(document, "final-score", &snapshot.score.to_string());
        }
    }

    /// Optional tuning embedded in the page as `<script id="game-config" type="application/json">`
    fn read_page_config(document: &Document) -> GameConfig {
        let json = document
            .get_element_by_id("game-config")
            .and_then(|el| el.text_content())
            .filter(|text| !text.trim().is_empty());
        GameConfig::load_or_default(json.as_deref())
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("AI Raid starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let config = read_page_config(&document);
        let playfield = (config.width, config.height);
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(config, seed)));

        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => {
                let adapter = instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::HighPerformance,
                        compatible_surface: Some(&surface),
                        force_fallback_adapter: false,
                    })
                    .await;
                match adapter {
                    Ok(adapter) => {
                        log::info!("Using adapter: {:?}", adapter.get_info().name);
                        match RenderState::new(surface, &adapter, width, height, playfield).await {
                            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
                            Err(e) => log::error!("Failed to create device: {e}"),
                        }
                    }
                    Err(e) => log::error!("Failed to get adapter: {e}"),
                }
            }
            Err(e) => log::error!("Failed to create surface: {e}"),
        }

        setup_input_handlers(game.clone());

        request_animation_frame(game);

        log::info!("AI Raid running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Key down: hold intents, plus one-shot commands
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                g.audio.resume();
                match event.key().as_str() {
                    "ArrowLeft" | "a" | "A" => g.input.left = true,
                    "ArrowRight" | "d" | "D" => g.input.right = true,
                    " " => g.input.fire = true,
                    "Enter" => {
                        if g.state.phase.is_terminal() {
                            let seed = js_sys::Date::now() as u64;
                            g.restart(seed);
                        }
                    }
                    "i" | "I" => {
                        g.idle_mode = !g.idle_mode;
                        log::info!("Idle mode: {}", g.idle_mode);
                    }
                    "m" | "M" => {
                        let muted = g.audio.toggle_muted();
                        log::info!("Muted: {}", muted);
                    }
                    _ => return,
                }
                event.prevent_default();
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" | "A" => g.input.left = false,
                    "ArrowRight" | "d" | "D" => g.input.right = false,
                    " " => g.input.fire = false,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keyup never arrives, so drop held keys
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().input = TickInput::default();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            game.borrow_mut().frame(&document);
        }

        // Keep presenting after Won/Lost so the final frame stays up
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use ai_raid::GameConfig;
    use ai_raid::sim::autopilot;
    use ai_raid::sim::{GameEvent, GameState, Presenter, Snapshot, run_frame};

    /// Longest demo run: five minutes of game time
    const MAX_TICKS: u64 = 5 * 60 * ai_raid::consts::TICKS_PER_SECOND as u64;
    const DEFAULT_SEED: u64 = 0x5eed;

    /// Logs events and keeps the latest frame
    #[derive(Default)]
    struct LogPresenter {
        last: Option<Snapshot>,
    }

    impl Presenter for LogPresenter {
        fn present(&mut self, snapshot: &Snapshot, events: &[GameEvent]) {
            for event in events {
                match event {
                    GameEvent::ShotFired => {}
                    _ => log::debug!("[{}] {:?}", snapshot.time_ticks, event),
                }
            }
            self.last = Some(snapshot.clone());
        }
    }

    fn load_config(path: Option<&str>) -> GameConfig {
        let Some(path) = path else {
            return GameConfig::default();
        };
        match std::fs::read_to_string(path) {
            Ok(json) => GameConfig::load_or_default(Some(&json)),
            Err(e) => {
                log::warn!("Cannot read config {}: {}; using defaults", path, e);
                GameConfig::default()
            }
        }
    }

    /// Usage: ai-raid [config.json] [seed]
    pub fn run() {
        let args: Vec<String> = std::env::args().collect();
        let config = load_config(args.get(1).map(String::as_str));
        let seed = args
            .get(2)
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SEED);

        log::info!("Headless demo run with seed {}", seed);
        let mut state = GameState::new(config, seed);
        let mut presenter = LogPresenter::default();

        for _ in 0..MAX_TICKS {
            let input = autopilot::suggest_input(&state);
            run_frame(&mut state, &input, &mut presenter);
            if state.phase.is_terminal() {
                break;
            }
        }

        let snapshot = presenter.last.unwrap_or_else(|| state.snapshot());
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize final snapshot: {e}"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("AI Raid (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
