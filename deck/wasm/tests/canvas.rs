//! Browser tests for the canvas backend.
//!
//! Run with `wasm-pack test --headless --chrome deck/wasm`.

use pitch_deck::charts::{ChartBackend, ChartConfig, ChartSlot};
use pitch_deck_wasm::CanvasBackend;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

const LABEL_STYLE: &str = "left:10.00%;top:20.00%";

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Canvas plus an attached overlay with one server-positioned label.
fn widget(config: &ChartConfig) -> (HtmlCanvasElement, Element, Element) {
    let document = document();
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();

    let overlay = document.create_element("div").unwrap();
    overlay
        .set_attribute("data-chart-overlay", &config.id)
        .unwrap();
    let label = document.create_element("span").unwrap();
    label.set_attribute("data-bar-index", "0").unwrap();
    label.set_attribute("style", LABEL_STYLE).unwrap();
    overlay.append_child(&label).unwrap();
    document.body().unwrap().append_child(&overlay).unwrap();

    (canvas, overlay, label)
}

#[wasm_bindgen_test]
fn dropping_chart_restores_the_widget() {
    let config = ChartConfig::market_size();
    let (canvas, overlay, label) = widget(&config);
    let before = (canvas.width(), canvas.height());

    let chart = CanvasBackend.create(&canvas, &config).unwrap();
    assert_ne!(label.get_attribute("style").as_deref(), Some(LABEL_STYLE));
    canvas.set_attribute("title", "SAM\n$731B").unwrap();

    drop(chart);
    assert_eq!((canvas.width(), canvas.height()), before);
    assert_eq!(label.get_attribute("style").as_deref(), Some(LABEL_STYLE));
    assert!(canvas.get_attribute("title").is_none());

    overlay.remove();
}

#[wasm_bindgen_test]
fn remounting_hidden_canvas_keeps_its_size() {
    let config = ChartConfig::business_cost();
    let (canvas, overlay, _label) = widget(&config);
    let mut slot = ChartSlot::new(config.id.clone(), CanvasBackend);

    assert!(slot.mount(Some(&canvas), &config));
    let first = (canvas.width(), canvas.height());
    for _ in 0..3 {
        assert!(slot.mount(Some(&canvas), &config));
        assert_eq!((canvas.width(), canvas.height()), first);
    }

    slot.unmount();
    assert!(!slot.is_mounted());
    overlay.remove();
}

#[wasm_bindgen_test]
fn missing_surface_is_not_mounted() {
    let config = ChartConfig::market_size();
    let mut slot = ChartSlot::new(config.id.clone(), CanvasBackend);
    assert!(!slot.mount(None, &config));
    assert!(!slot.is_mounted());
}
