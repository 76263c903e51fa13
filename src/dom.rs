//! Render-surface access: geometry queries, imperative style mutation and
//! the window-level event bus. Everything here degrades to a no-op (plus a
//! log line where it matters) when an element is missing, so a broken
//! flourish never takes the page down.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::handoff::Rect;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// All elements matching `selector` under `root`, in document order.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let mut out = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

/// Viewport-space geometry of an element.
#[inline]
pub fn rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

#[inline]
pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

#[inline]
pub fn viewport_height() -> f32 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    _ = el.style().set_property(prop, value);
}

#[inline]
pub fn clear_style(el: &web::HtmlElement, prop: &str) {
    _ = el.style().remove_property(prop);
}

#[inline]
pub fn set_opacity(el: &web::HtmlElement, value: f32) {
    set_style(el, "opacity", &format!("{}", value.clamp(0.0, 1.0)));
}

/// Translate + scale, centered on the element (cursor/trail markers).
#[inline]
pub fn set_centered_transform(el: &web::HtmlElement, x: f32, y: f32, scale: f32) {
    set_style(
        el,
        "transform",
        &format!("translate({x}px, {y}px) translate(-50%, -50%) scale({scale})"),
    );
}

#[inline]
pub fn set_transform(el: &web::HtmlElement, value: &str) {
    set_style(el, "transform", value);
}

/// Live computed style value, e.g. the current accent custom property.
pub fn computed_style(el: &web::Element, prop: &str) -> Option<String> {
    let w = web::window()?;
    let style = w.get_computed_style(el).ok()??;
    let v = style.get_property_value(prop).ok()?;
    let v = v.trim().to_string();
    if v.is_empty() {
        None
    } else {
        Some(v)
    }
}

/// Computed pixel value (`"18px"` -> 18.0).
pub fn computed_px(el: &web::Element, prop: &str) -> Option<f32> {
    computed_style(el, prop)?
        .trim_end_matches("px")
        .parse()
        .ok()
}

pub fn set_css_var(document: &web::Document, name: &str, value: &str) {
    if let Some(root) = document.document_element() {
        if let Ok(el) = root.dyn_into::<web::HtmlElement>() {
            set_style(&el, name, value);
        }
    }
}

pub fn css_var(document: &web::Document, name: &str) -> Option<String> {
    document
        .document_element()
        .and_then(|root| computed_style(&root, name))
}

/// Lock background scroll without a layout shift: pad for the scrollbar the
/// lock removes.
pub fn lock_scroll(document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    let scrollbar = web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w - document.document_element().map_or(0.0, |d| d.client_width() as f64))
        .unwrap_or(0.0);
    set_style(&body, "overflow", "hidden");
    if scrollbar > 0.0 {
        set_style(&body, "padding-right", &format!("{scrollbar}px"));
    }
}

pub fn unlock_scroll(document: &web::Document) {
    if let Some(body) = document.body() {
        clear_style(&body, "overflow");
        clear_style(&body, "padding-right");
    }
}

/// Per-session flag: was this tab already through the intro?
pub fn session_flag(key: &str) -> bool {
    web::window()
        .and_then(|w| w.session_storage().ok().flatten())
        .and_then(|s| s.get_item(key).ok().flatten())
        .is_some()
}

pub fn set_session_flag(key: &str) {
    if let Some(s) = web::window().and_then(|w| w.session_storage().ok().flatten()) {
        _ = s.set_item(key, "1");
    }
}

/// Emit a handoff-bus signal (a CustomEvent on the window).
pub fn dispatch(name: &str) {
    if let Some(w) = web::window() {
        if let Ok(ev) = web::CustomEvent::new(name) {
            _ = w.dispatch_event(&ev);
        }
    }
}

/// Subscribe to a handoff-bus signal for the page lifetime.
pub fn listen(name: &str, mut handler: impl FnMut() + 'static) {
    if let Some(w) = web::window() {
        let closure = Closure::wrap(Box::new(move |_: web::Event| handler()) as Box<dyn FnMut(_)>);
        _ = w.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Resolve after the next animation frame; used to let the surface settle
/// before the first geometry pass.
pub async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(&resolve);
        }
    });
    _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Keep the canvas backing store in sync with its CSS size and the device
/// pixel ratio. Returns the ratio so callers can scale their context.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> f64 {
    let Some(w) = web::window() else {
        return 1.0;
    };
    let dpr = w.device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    dpr
}
