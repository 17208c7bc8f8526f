//! Browser host
//!
//! JS owns the canvas and the `requestAnimationFrame` loop. Each frame it
//! calls `frame(now)`, then draws `instances()` and `hud_json()`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

use super::{FlapLatch, FrameClock, InputEvent, run_frame};
use crate::config::GameConfig;
use crate::renderer::{Instance, Palette, hud_text, scene_instances};
use crate::sim::{GameEvent, GameState, resize, snapshot};

#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
    clock: FrameClock,
    latch: Rc<RefCell<FlapLatch>>,
    palette: Palette,
}

#[wasm_bindgen]
impl WebGame {
    /// Attach to the canvas with id `canvas_id`. `config_json` is optional tuning.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: Option<String>) -> Result<WebGame, JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str("Missing canvas"))?
            .dyn_into::<HtmlCanvasElement>()?;

        let config = GameConfig::load_or_default(config_json.as_deref());
        let seed: u64 = rand::random();
        let state = GameState::new(canvas.width() as f32, canvas.height() as f32, config, seed);

        let latch = Rc::new(RefCell::new(FlapLatch::default()));
        install_input_listeners(&window, &canvas, &latch)?;

        log::info!(
            "Game initialized with seed {} on {}x{}",
            seed,
            canvas.width(),
            canvas.height()
        );

        Ok(Self {
            state,
            clock: FrameClock::new(config.fixed_step),
            latch,
            palette: Palette::default(),
        })
    }

    /// Advance to the `requestAnimationFrame` timestamp
    pub fn frame(&mut self, now_ms: f64) {
        run_frame(
            &mut self.state,
            &mut self.latch.borrow_mut(),
            &mut self.clock,
            now_ms,
        );

        for event in self.state.drain_events() {
            if let GameEvent::Crashed { cause } = event {
                log::info!("Crashed into {:?} with score {}", cause, self.state.score);
            }
        }
    }

    /// Programmatic flap (on-screen buttons etc.)
    pub fn flap(&mut self) {
        self.latch.borrow_mut().press();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        resize(&mut self.state, width, height);
    }

    /// Scene rectangles packed as `[x, y, w, h, r, g, b, a]` per quad
    pub fn instances(&self) -> js_sys::Float32Array {
        let quads = scene_instances(&snapshot(&self.state), &self.palette);
        js_sys::Float32Array::from(Instance::as_floats(&quads))
    }

    pub fn hud_json(&self) -> String {
        serde_json::to_string(&hud_text(&snapshot(&self.state), &self.palette)).unwrap_or_default()
    }

    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&snapshot(&self.state)).unwrap_or_default()
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }
}

fn install_input_listeners(
    window: &web_sys::Window,
    canvas: &HtmlCanvasElement,
    latch: &Rc<RefCell<FlapLatch>>,
) -> Result<(), JsValue> {
    let latch_key = latch.clone();
    let key_closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        let input = InputEvent::KeyDown {
            code: event.code(),
            repeat: event.repeat(),
        };
        if latch_key.borrow_mut().handle(&input) {
            event.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback("keydown", key_closure.as_ref().unchecked_ref())?;
    key_closure.forget();

    let latch_mouse = latch.clone();
    let mouse_closure = Closure::wrap(Box::new(move |_: MouseEvent| {
        latch_mouse.borrow_mut().handle(&InputEvent::PointerDown);
    }) as Box<dyn FnMut(_)>);
    canvas.add_event_listener_with_callback("mousedown", mouse_closure.as_ref().unchecked_ref())?;
    mouse_closure.forget();

    let latch_touch = latch.clone();
    let touch_closure = Closure::wrap(Box::new(move |event: TouchEvent| {
        event.prevent_default();
        latch_touch.borrow_mut().handle(&InputEvent::TouchStart);
    }) as Box<dyn FnMut(_)>);
    canvas.add_event_listener_with_callback("touchstart", touch_closure.as_ref().unchecked_ref())?;
    touch_closure.forget();

    Ok(())
}
