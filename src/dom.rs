use birthday_core::CandleAnchor;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{CANDLE_SELECTOR, HIDDEN_CLASS};

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", id, e)))
}

/// Click handler plus a non-passive touchstart that suppresses the synthetic click.
pub fn add_tap_listener(target: &web::EventTarget, handler: impl FnMut() + 'static) {
    let handler = std::rc::Rc::new(std::cell::RefCell::new(handler));

    let on_click = handler.clone();
    let click = Closure::wrap(Box::new(move || (&mut *on_click.borrow_mut())()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
    click.forget();

    let touch = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        (&mut *handler.borrow_mut())();
    }) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        touch.as_ref().unchecked_ref(),
        &opts,
    );
    touch.forget();
}

/// Backing store follows the window's CSS size.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) {
    let size = window_size();
    canvas.set_width((size.x as u32).max(1));
    canvas.set_height((size.y as u32).max(1));
}

pub fn on_window_resize(mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Runs `f` once after `delay_ms`.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    let closure = Closure::once_into_js(f);
    if let Some(w) = web::window() {
        if let Err(e) = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref(),
            delay_ms,
        ) {
            log::error!("setTimeout error: {:?}", e);
        }
    }
}

/// Current layout position of the candle element, if it is on the page.
pub fn candle_anchor(document: &web::Document) -> Option<CandleAnchor> {
    let el = document.query_selector(CANDLE_SELECTOR).ok().flatten()?;
    let rect = el.get_bounding_client_rect();
    Some(CandleAnchor::new(
        (rect.left() + rect.width() / 2.0) as f32,
        rect.top() as f32,
    ))
}

pub fn window_size() -> Vec2 {
    web::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            Vec2::new(width as f32, height as f32)
        })
        .unwrap_or(Vec2::ZERO)
}

/// Candle anchor, or a centered stand-in while the candle is not laid out.
pub fn anchor_or_fallback(document: &web::Document) -> CandleAnchor {
    candle_anchor(document).unwrap_or_else(|| CandleAnchor::fallback(window_size()))
}

#[inline]
pub fn set_hidden(el: &web::Element, hidden: bool) {
    let cl = el.class_list();
    if hidden {
        _ = cl.add_1(HIDDEN_CLASS);
    } else {
        _ = cl.remove_1(HIDDEN_CLASS);
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("style {}={} failed: {:?}", property, value, e);
    }
}
