//! Ambient plus-glyph background: wires the particle field to its canvas
//! and paints it every active frame with the live accent color.

use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys as web;

use crate::constants::ID_FIELD_CANVAS;
use crate::core::constants::{
    FIELD_GLYPH_SIZE, FIELD_IDLE_SEC, FIELD_STROKE_WIDTH,
};
use crate::core::{FieldParams, ParticleField, PointerTracker};
use crate::dom;
use crate::events;
use crate::frame::Scheduler;
use crate::theme::Theme;

/// Wire the field. Returns the canvas so the pointer wiring can compute
/// hover bounds; a missing canvas degrades to no background at all.
pub fn mount(
    scheduler: &Scheduler,
    document: &web::Document,
    tracker: Rc<RefCell<PointerTracker>>,
    canvas_pointer: Rc<RefCell<Option<Vec2>>>,
    theme: Rc<RefCell<Theme>>,
) -> Option<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(ID_FIELD_CANVAS)
        .and_then(|el| el.dyn_into().ok())?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into().ok())?;

    let field = Rc::new(RefCell::new(ParticleField::new(FieldParams::default())));
    rebuild(&canvas, &ctx, &field);

    {
        let canvas = canvas.clone();
        let ctx = ctx.clone();
        let field = field.clone();
        events::scroll::wire_resize(move || {
            // Resize discards the grid entirely; nothing is repositioned.
            rebuild(&canvas, &ctx, &field);
        });
    }

    log::info!("[field] mounted ({} particles)", field.borrow().len());
    scheduler.register(Box::new(move |_dt| {
        let pointer = *canvas_pointer.borrow();
        let idle = tracker.borrow().is_idle(FIELD_IDLE_SEC);
        let mut field = field.borrow_mut();
        // A settled grid under an idle pointer skips physics and just
        // redraws at rest.
        field.step(pointer, idle);
        draw(&ctx, &field, pointer, &theme.borrow());
    }));
    Some(canvas)
}

fn rebuild(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    field: &Rc<RefCell<ParticleField>>,
) {
    let dpr = dom::sync_canvas_backing_size(canvas);
    // Field space is CSS pixels; the context scales to the backing store.
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    ctx.set_line_width(FIELD_STROKE_WIDTH as f64);
    ctx.set_line_cap("round");
    let rect = canvas.get_bounding_client_rect();
    field
        .borrow_mut()
        .rebuild(rect.width() as f32, rect.height() as f32);
}

fn draw(
    ctx: &web::CanvasRenderingContext2d,
    field: &ParticleField,
    pointer: Option<Vec2>,
    theme: &Theme,
) {
    let (w, h) = field.size();
    ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    let accent = theme.rgb();
    let half = (FIELD_GLYPH_SIZE * 0.5) as f64;
    for (i, p) in field.particles().iter().enumerate() {
        let opacity = field.opacity(i, pointer);
        ctx.set_stroke_style(&JsValue::from_str(&accent.rgba(opacity)));
        let (x, y) = (p.pos.x as f64, p.pos.y as f64);
        ctx.begin_path();
        ctx.move_to(x - half, y);
        ctx.line_to(x + half, y);
        ctx.move_to(x, y - half);
        ctx.line_to(x, y + half);
        ctx.stroke();
    }
}
