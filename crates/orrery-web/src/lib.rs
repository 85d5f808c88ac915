//! WASM bridge for Orrery — connects the orbit solver to a browser renderer.
//!
//! The renderer calls `orrery_init` once, `orrery_tick(dt)` every animation
//! frame, then reads body instances and orbit paths straight out of wasm
//! memory through the pointer accessors.

pub mod runner;

pub use runner::OrreryRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<OrreryRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut OrreryRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.get_or_insert_with(|| {
            web_sys::console::warn_1(&"orrery used before orrery_init; starting default system".into());
            OrreryRunner::default()
        });
        f(runner)
    })
}

#[wasm_bindgen]
pub fn orrery_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = OrreryRunner::default();
    let bodies = runner.orrery().body_count();
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("orrery: initialized with {bodies} bodies");
}

/// Replace the system from a JSON manifest. Throws the error text on failure.
#[wasm_bindgen]
pub fn orrery_load_manifest(json: &str) -> Result<(), JsValue> {
    with_runner(|r| r.load_manifest(json)).map_err(|e| {
        log::error!("orrery: {e}");
        JsValue::from_str(&e.to_string())
    })
}

/// Advance by one animation frame of `dt` seconds. Returns ticks run.
#[wasm_bindgen]
pub fn orrery_tick(dt: f32) -> u32 {
    with_runner(|r| r.tick(dt))
}

/// Select a body by name; returns its index or -1.
#[wasm_bindgen]
pub fn orrery_select(name: &str) -> i32 {
    with_runner(|r| r.with_orrery(|o| o.select(name)))
        .map(|i| i as i32)
        .unwrap_or(-1)
}

/// Select a body by index; negative or out-of-range clears the selection.
#[wasm_bindgen]
pub fn orrery_select_index(index: i32) -> i32 {
    let index = usize::try_from(index).unwrap_or(usize::MAX);
    with_runner(|r| r.with_orrery(|o| o.select_index(index)))
        .map(|i| i as i32)
        .unwrap_or(-1)
}

#[wasm_bindgen]
pub fn orrery_selected() -> i32 {
    with_runner(|r| r.orrery().selected()).map(|i| i as i32).unwrap_or(-1)
}

#[wasm_bindgen]
pub fn orrery_reset() {
    with_runner(|r| r.with_orrery(|o| o.reset()));
}

#[wasm_bindgen]
pub fn orrery_toggle_orbits() -> bool {
    with_runner(|r| r.with_orrery(|o| o.toggle_orbits()))
}

#[wasm_bindgen]
pub fn orrery_toggle_pause() -> bool {
    with_runner(|r| r.with_orrery(|o| o.toggle_pause()))
}

#[wasm_bindgen]
pub fn orrery_time() -> f64 {
    with_runner(|r| r.orrery().time())
}

#[wasm_bindgen]
pub fn orrery_body_count() -> u32 {
    with_runner(|r| r.orrery().body_count() as u32)
}

#[wasm_bindgen]
pub fn orrery_body_name(index: u32) -> Option<String> {
    with_runner(|r| r.orrery().body_name(index as usize).map(str::to_string))
}

/// Facts for a body (or "sun") as a JSON string.
#[wasm_bindgen]
pub fn orrery_body_facts(name: &str) -> Option<String> {
    with_runner(|r| {
        r.orrery()
            .facts(name)
            .and_then(|facts| serde_json::to_string(facts).ok())
    })
}

/// A copy of one body's orbit path as xyz triples.
#[wasm_bindgen]
pub fn orrery_orbit_path(index: u32) -> Option<js_sys::Float32Array> {
    with_runner(|r| {
        r.orrery()
            .paths()
            .body(index as usize)
            .map(js_sys::Float32Array::from)
    })
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_instance_floats() -> u32 {
    orrery::BodyInstance::FLOATS as u32
}

#[wasm_bindgen]
pub fn get_paths_ptr() -> *const f32 {
    with_runner(|r| r.paths_ptr())
}

#[wasm_bindgen]
pub fn get_paths_len() -> u32 {
    with_runner(|r| r.paths_len())
}

#[wasm_bindgen]
pub fn get_path_points_per_body() -> u32 {
    with_runner(|r| r.path_points_per_body())
}

#[wasm_bindgen]
pub fn get_sun_radius() -> f32 {
    orrery::bodies::catalog::SUN_RADIUS as f32
}
