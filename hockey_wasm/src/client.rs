use std::cell::RefCell;

use hockey_core::{Config, Events, Keys, Session};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement};

use crate::hud::Hud;
use crate::input::{handle_key_down, handle_key_up};
use crate::renderer::Renderer;
use crate::scene::Scene;

/// Main client state
struct Client {
    canvas: HtmlCanvasElement,
    document: Option<Document>,
    renderer: Renderer,
    session: Session,
    keys: Keys,
    scene: Scene,
    hud: Hud,
    hud_dirty: bool,
}

impl Client {
    async fn new(canvas: HtmlCanvasElement, config: Config) -> Result<Self, JsValue> {
        let seed = random_seed()?;
        let session = Session::new(config, seed);
        let rink = session.rink();
        let renderer = Renderer::new(canvas.clone(), rink.width, rink.height)
            .await
            .map_err(|e| JsValue::from_str(&e))?;
        let document = web_sys::window().and_then(|w| w.document());

        tracing::info!(seed, "client ready");

        Ok(Self {
            canvas,
            document,
            renderer,
            session,
            keys: Keys::none(),
            scene: Scene::new(),
            hud: Hud::new(),
            hud_dirty: true,
        })
    }

    fn frame(&mut self, dt: f32) -> Result<(), JsValue> {
        let events = self.session.frame(dt, self.keys).clone();
        log_puck_activity(&events);
        self.hud_dirty |= events.hud_changed();

        let camera = &mut self.renderer.camera;
        if events.wants_shake() {
            let config = self.session.config();
            camera.shake.start(config.shake_duration, config.shake_intensity);
        }
        camera.update(dt, || js_sys::Math::random() as f32);

        self.render()?;
        self.update_hud();
        Ok(())
    }

    fn render(&mut self) -> Result<(), JsValue> {
        let Some(snapshot) = self.session.snapshot() else {
            return Err(JsValue::from_str("Session is missing rink entities"));
        };
        self.scene.build(self.session.rink(), &snapshot);

        self.renderer
            .resize(self.canvas.width(), self.canvas.height());
        self.renderer
            .draw(&self.scene)
            .map_err(|e| JsValue::from_str(&e))
    }

    fn update_hud(&mut self) {
        if !self.hud_dirty {
            return;
        }
        let Some(document) = &self.document else {
            return;
        };
        self.hud.update(
            document,
            &self.session.score_text(),
            &self.session.timer_text(),
            self.session.banner().unwrap_or(""),
        );
        self.hud_dirty = false;
    }

    fn reset(&mut self) {
        self.session.reset();
        self.renderer.camera.shake = Default::default();
        self.hud.invalidate();
        self.hud_dirty = true;
    }
}

fn log_puck_activity(events: &Events) {
    if !events.puck_activity() {
        return;
    }
    tracing::trace!(
        paddle = ?events.puck_hit_paddle,
        wall = events.puck_hit_wall,
        launched = events.puck_launched,
        "puck activity"
    );
}

fn random_seed() -> Result<u64, JsValue> {
    let mut bytes = [0u8; 8];
    getrandom::getrandom(&mut bytes)
        .map_err(|e| JsValue::from_str(&format!("Failed to seed rng: {}", e)))?;
    Ok(u64::from_le_bytes(bytes))
}

thread_local! {
    static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
}

fn with_client<T>(f: impl FnOnce(&mut Client) -> Result<T, JsValue>) -> Result<T, JsValue> {
    CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
        Some(client) => f(client),
        None => Err(JsValue::from_str("Client not initialized")),
    })
}

/// Create the renderer and a fresh match on `canvas`.
///
/// `config_json` overrides any subset of the game configuration;
/// `log_filter` uses `EnvFilter` syntax and defaults to `info`.
#[wasm_bindgen]
pub fn init_client(
    canvas: HtmlCanvasElement,
    config_json: Option<String>,
    log_filter: Option<String>,
) -> js_sys::Promise {
    crate::logging::init(log_filter.as_deref().unwrap_or("info"));

    wasm_bindgen_futures::future_to_promise(async move {
        let config = match config_json {
            Some(json) => Config::from_json(&json).map_err(|e| {
                tracing::error!(error = %e, "rejected config");
                JsValue::from_str(&e.to_string())
            })?,
            None => Config::default(),
        };

        let client = Client::new(canvas, config).await?;
        CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
        Ok(JsValue::UNDEFINED)
    })
}

/// Returns true if `key` steers the paddle, so the page can suppress scrolling
#[wasm_bindgen]
pub fn key_down(key: &str) -> bool {
    with_client(|client| Ok(handle_key_down(&mut client.keys, key))).unwrap_or(false)
}

#[wasm_bindgen]
pub fn key_up(key: &str) -> bool {
    with_client(|client| Ok(handle_key_up(&mut client.keys, key))).unwrap_or(false)
}

/// Advance and draw one animation frame, `dt_ms` milliseconds after the last
#[wasm_bindgen]
pub fn frame(dt_ms: f64) -> Result<(), JsValue> {
    let dt = (dt_ms / 1000.0).max(0.0) as f32;
    with_client(|client| client.frame(dt))
}

/// Throw the current match away and start a new one
#[wasm_bindgen]
pub fn reset_match() -> Result<(), JsValue> {
    with_client(|client| {
        client.reset();
        Ok(())
    })
}
