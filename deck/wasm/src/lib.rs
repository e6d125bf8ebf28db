//! Browser runtime for the pitch site.
//!
//! Loaded by the market page (see `pitch_deck::components::market`). On start
//! it finds every `<canvas data-chart-config>`, parses the embedded
//! [`ChartConfig`] and draws it through a [`ChartSlot`]. Slots live in a
//! per-thread registry keyed by chart id, so calling [`mount_charts`] again
//! replaces charts instead of stacking them, and charts whose canvas left the
//! page are released.
//!
//! The host page may also register a "navigate home" callback with
//! [`set_navigate_home`]; clicks on the back control then call it instead of
//! following the link.

pub mod canvas;

use std::cell::RefCell;
use std::collections::HashMap;

use pitch_deck::charts::{ChartConfig, ChartSlot, market_page_charts};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlCanvasElement};

pub use canvas::{CanvasBackend, CanvasChart, tooltip_text};

/// Selector of canvases carrying a chart configuration.
pub const CHART_CANVAS_SELECTOR: &str = "canvas[data-chart-config]";
/// Selector of the market page's back control.
pub const NAVIGATE_HOME_SELECTOR: &str = "[data-role=\"navigate-home\"]";

thread_local! {
    static REGISTRY: RefCell<HashMap<String, ChartSlot<CanvasBackend>>> = RefCell::new(HashMap::new());
    static NAVIGATE_HOME: RefCell<Option<js_sys::Function>> = const { RefCell::new(None) };
    static HOME_LISTENER: RefCell<Option<Closure<dyn FnMut(Event)>>> = const { RefCell::new(None) };
}

/// Install the panic hook and draw the page's charts.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    mount_charts();
}

// ============================================================================
// Charts
// ============================================================================

/// (Re)draw every chart on the page. Returns how many are live.
///
/// Charts that fail to build are reported to the console and skipped; the
/// static overlay keeps showing their values.
#[wasm_bindgen]
pub fn mount_charts() -> u32 {
    let Some(document) = document() else {
        console_warn("pitch-deck: no document, charts not mounted");
        return 0;
    };

    let canvases = chart_canvases(&document);
    let mut mounted = 0;

    REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();

        // widgets that left the page release their charts
        registry.retain(|id, _| canvases.iter().any(|(canvas, _)| canvas.id() == *id));

        for (canvas, raw) in &canvases {
            let config = match ChartConfig::from_json(raw) {
                Ok(config) => config,
                Err(e) => {
                    console_error(&format!("pitch-deck: chart #{}: {e}", canvas.id()));
                    continue;
                }
            };
            let slot = registry
                .entry(config.id.clone())
                .or_insert_with(|| ChartSlot::new(config.id.clone(), CanvasBackend));
            if slot.mount(Some(canvas), &config) {
                mounted += 1;
            } else {
                console_warn(&format!("pitch-deck: chart {} not drawn", config.id));
            }
        }
    });

    mounted
}

/// Mount the fixed chart `id` on its canvas, if the canvas is present.
///
/// Returns `false` when the id is unknown or the canvas is missing; in both
/// cases any previous instance for that id is released.
#[wasm_bindgen]
pub fn mount_chart(id: &str) -> bool {
    let canvas = document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());

    let config = canvas
        .as_ref()
        .and_then(|c| c.get_attribute("data-chart-config"))
        .and_then(|raw| ChartConfig::from_json(&raw).ok())
        .or_else(|| fixed_chart(id));

    let Some(config) = config else {
        console_warn(&format!("pitch-deck: unknown chart {id}"));
        unmount_chart(id);
        return false;
    };

    REGISTRY.with(|registry| {
        registry
            .borrow_mut()
            .entry(config.id.clone())
            .or_insert_with(|| ChartSlot::new(config.id.clone(), CanvasBackend))
            .mount(canvas.as_ref(), &config)
    })
}

/// Destroy chart `id`. Returns whether it was live.
#[wasm_bindgen]
pub fn unmount_chart(id: &str) -> bool {
    REGISTRY.with(|registry| {
        registry
            .borrow_mut()
            .remove(id)
            .is_some_and(|slot| slot.is_mounted())
    })
}

/// Destroy every chart. Returns how many were live.
#[wasm_bindgen]
pub fn unmount_charts() -> u32 {
    REGISTRY.with(|registry| {
        registry
            .borrow_mut()
            .drain()
            .filter(|(_, slot)| slot.is_mounted())
            .count() as u32
    })
}

/// Ids of live charts, sorted.
#[wasm_bindgen]
pub fn mounted_charts() -> Vec<String> {
    REGISTRY.with(|registry| {
        let mut ids: Vec<String> = registry
            .borrow()
            .iter()
            .filter(|(_, slot)| slot.is_mounted())
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    })
}

/// Configuration of a fixed chart by id.
pub fn fixed_chart(id: &str) -> Option<ChartConfig> {
    market_page_charts().into_iter().find(|c| c.id == id)
}

fn chart_canvases(document: &Document) -> Vec<(HtmlCanvasElement, String)> {
    let Ok(nodes) = document.query_selector_all(CHART_CANVAS_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlCanvasElement>().ok())
        .filter_map(|canvas| {
            let raw = canvas.get_attribute("data-chart-config")?;
            Some((canvas, raw))
        })
        .collect()
}

// ============================================================================
// Navigation
// ============================================================================

/// Register the zero-argument callback run when the user asks to go back to
/// the main site. Replaces any previous callback.
#[wasm_bindgen]
pub fn set_navigate_home(callback: js_sys::Function) -> Result<(), JsValue> {
    NAVIGATE_HOME.with(|slot| *slot.borrow_mut() = Some(callback));
    install_home_listener()
}

/// Forget the callback; the back control follows its link again.
#[wasm_bindgen]
pub fn clear_navigate_home() {
    NAVIGATE_HOME.with(|slot| slot.borrow_mut().take());
}

fn install_home_listener() -> Result<(), JsValue> {
    let installed = HOME_LISTENER.with(|l| l.borrow().is_some());
    if installed {
        return Ok(());
    }
    let document = document().ok_or_else(|| JsValue::from_str("no document"))?;

    let listener = Closure::<dyn FnMut(Event)>::wrap(Box::new(|event: Event| {
        let on_control = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(NAVIGATE_HOME_SELECTOR).ok().flatten())
            .is_some();
        if !on_control {
            return;
        }
        let callback = NAVIGATE_HOME.with(|slot| slot.borrow().clone());
        if let Some(callback) = callback {
            event.prevent_default();
            if let Err(e) = callback.call0(&JsValue::NULL) {
                console_error(&format!(
                    "pitch-deck: navigate-home callback failed: {}",
                    canvas::js_message(&e)
                ));
            }
        }
    }));
    document.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
    HOME_LISTENER.with(|l| *l.borrow_mut() = Some(listener));
    Ok(())
}

// ============================================================================
// Misc
// ============================================================================

/// Check if WASM module is loaded and functional.
#[wasm_bindgen]
pub fn health_check() -> String {
    format!("pitch-deck-wasm v{} ready", env!("CARGO_PKG_VERSION"))
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn console_warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}
