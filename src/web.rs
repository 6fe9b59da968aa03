// Browser bindings: requestAnimationFrame clock, scoped DOM listeners, and the
// three exported components the page mounts and unmounts.

use crate::clock::{Animation, FrameCallback, FrameClock, FrameHandle};
use crate::config::{FieldConfig, HighlightConfig, ParallaxConfig};
use crate::field::ParticleField;
use crate::highlight::{BoundingBox, ProximityText};
use crate::parallax::{OrbPlacement, Parallax};
use crate::renderer::CanvasRenderer;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlCanvasElement, HtmlElement, MouseEvent, Window};

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

fn config_or_default<T: Default>(
    json: Option<String>,
    parse: fn(&str) -> Result<T, crate::error::ConfigError>,
) -> Result<T, JsValue> {
    match json {
        Some(json) => parse(&json).map_err(|e| JsValue::from_str(&e.to_string())),
        None => Ok(T::default()),
    }
}

// One persistent closure is handed to requestAnimationFrame; it runs whichever
// callback was registered last. Replacing the closure per frame would drop it
// while it is still executing.
pub struct RafClock {
    window: Window,
    next: Rc<RefCell<Option<FrameCallback>>>,
    tick: Closure<dyn FnMut()>,
}

impl RafClock {
    pub fn new(window: Window) -> Self {
        let next: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let due = Rc::clone(&next);
        let tick = Closure::wrap(Box::new(move || {
            let callback = due.borrow_mut().take();
            if let Some(callback) = callback {
                callback();
            }
        }) as Box<dyn FnMut()>);
        RafClock { window, next, tick }
    }
}

impl FrameClock for RafClock {
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle> {
        *self.next.borrow_mut() = Some(callback);
        let handle = self
            .window
            .request_animation_frame(self.tick.as_ref().unchecked_ref())
            .ok();
        if handle.is_none() {
            // no frame will take it, and holding it would keep the loop alive
            let refused = self.next.borrow_mut().take();
            drop(refused);
        }
        handle
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle);
        let stale = self.next.borrow_mut().take();
        drop(stale);
    }
}

// Registered on creation, removed on drop
pub struct EventListener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(EventListener {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

struct MountedField {
    field: Rc<RefCell<ParticleField<CanvasRenderer>>>,
    animation: Animation<RafClock>,
    _resize: EventListener,
}

/// Full-viewport particle backdrop.
#[wasm_bindgen]
pub struct AmbientCanvas {
    canvas: Option<HtmlCanvasElement>,
    config: FieldConfig,
    mounted: Option<MountedField>,
}

#[wasm_bindgen]
impl AmbientCanvas {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: Option<HtmlCanvasElement>, config_json: Option<String>) -> Result<AmbientCanvas, JsValue> {
        Ok(AmbientCanvas {
            canvas,
            config: config_or_default(config_json, FieldConfig::from_json)?,
            mounted: None,
        })
    }

    /// Attach to the canvas and start animating. Without a usable canvas this
    /// does nothing.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.mounted.is_some() {
            return Ok(());
        }
        let window = window()?;
        let renderer = self
            .canvas
            .clone()
            .and_then(|canvas| CanvasRenderer::new(canvas).ok());
        let (width, height) = viewport_size(&window);

        let mut field = ParticleField::new(self.config.clone());
        if let Err(err) = field.attach(renderer, width, height, &mut rand::thread_rng()) {
            debug!(%err, "particle field not started");
            return Ok(());
        }
        let field = Rc::new(RefCell::new(field));

        let resize = {
            let field = Rc::clone(&field);
            let win = window.clone();
            EventListener::new(&window, "resize", move |_| {
                let (width, height) = viewport_size(&win);
                field.borrow_mut().on_resize(width, height);
            })?
        };

        let animation = {
            let field = Rc::clone(&field);
            Animation::start(RafClock::new(window), move || {
                #[cfg(feature = "frame-timing")]
                let _timer = crate::Timer::new("AmbientCanvas::frame");
                field.borrow_mut().frame();
            })
        };

        self.mounted = Some(MountedField {
            field,
            animation,
            _resize: resize,
        });
        Ok(())
    }

    /// Cancel the pending frame and drop the resize listener together.
    pub fn stop(&mut self) {
        if let Some(mut mounted) = self.mounted.take() {
            mounted.animation.stop();
            mounted.field.borrow_mut().detach();
        }
    }

    pub fn is_running(&self) -> bool {
        self.mounted
            .as_ref()
            .map(|m| m.animation.is_running())
            .unwrap_or(false)
    }

    pub fn particle_count(&self) -> usize {
        self.mounted
            .as_ref()
            .map(|m| m.field.borrow().particles().len())
            .unwrap_or(0)
    }
}

fn measure(element: &HtmlElement) -> Option<BoundingBox> {
    if !element.is_connected() {
        return None;
    }
    let rect = element.get_bounding_client_rect();
    Some(BoundingBox {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

fn paint(text: &ProximityText, spans: &[HtmlElement]) {
    let hovering = text.hover().hovering;
    for (i, span) in spans.iter().enumerate() {
        set_style(span, "color", &text.color_of(i).to_css());
        if hovering {
            set_style(span, "transition", &text.config().transition);
        } else {
            let _ = span.style().remove_property("transition");
        }
    }
}

/// Stacked display text whose letters dim near the pointer.
#[wasm_bindgen]
pub struct LaunchingText {
    container: HtmlElement,
    text: Rc<RefCell<ProximityText>>,
    spans: Rc<Vec<HtmlElement>>,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl LaunchingText {
    /// `text` holds one line per `'\n'`.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, text: &str, config_json: Option<String>) -> Result<LaunchingText, JsValue> {
        let config = config_or_default(config_json, HighlightConfig::from_json)?;
        Ok(LaunchingText {
            container,
            text: Rc::new(RefCell::new(ProximityText::from_text(text, config))),
            spans: Rc::new(Vec::new()),
            listeners: Vec::new(),
        })
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        if !self.listeners.is_empty() {
            return Ok(());
        }
        self.spans = Rc::new(self.render_glyphs()?);

        let on_move = {
            let container = self.container.clone();
            let text = Rc::clone(&self.text);
            let spans = Rc::clone(&self.spans);
            move |event: Event| {
                let event = match event.dyn_into::<MouseEvent>() {
                    Ok(event) => event,
                    Err(_) => return,
                };
                let mut text = text.borrow_mut();
                let bounds = measure(&container);
                if text
                    .pointer_move(bounds, event.client_x() as f64, event.client_y() as f64)
                    .is_ok()
                {
                    paint(&text, &spans);
                }
            }
        };
        let on_leave = {
            let text = Rc::clone(&self.text);
            let spans = Rc::clone(&self.spans);
            move |_: Event| {
                let mut text = text.borrow_mut();
                text.pointer_leave();
                paint(&text, &spans);
            }
        };

        self.listeners.push(EventListener::new(&self.container, "mousemove", on_move)?);
        self.listeners.push(EventListener::new(&self.container, "mouseleave", on_leave)?);
        Ok(())
    }

    pub fn stop(&mut self) {
        self.listeners.clear();
        let mut text = self.text.borrow_mut();
        text.pointer_leave();
        paint(&text, &self.spans);
    }

    pub fn near_count(&self) -> usize {
        self.text.borrow().near_count()
    }

    pub fn glyph_count(&self) -> usize {
        self.spans.len()
    }

    // One block per line, one inline-block span per glyph
    fn render_glyphs(&self) -> Result<Vec<HtmlElement>, JsValue> {
        let document = self
            .container
            .owner_document()
            .ok_or_else(|| JsValue::from_str("container has no document"))?;
        self.container.set_inner_html("");

        let text = self.text.borrow();
        let mut lines = Vec::with_capacity(text.line_count());
        for _ in 0..text.line_count() {
            let line = document.create_element("div")?;
            line.set_class_name("launching-line");
            self.container.append_child(&line)?;
            lines.push(line);
        }

        let mut spans = Vec::with_capacity(text.glyphs().len());
        for (i, glyph) in text.glyphs().iter().enumerate() {
            let span = document.create_element("span")?.dyn_into::<HtmlElement>()?;
            span.set_text_content(Some(&glyph.ch.to_string()));
            set_style(&span, "display", "inline-block");
            set_style(&span, "color", &text.color_of(i).to_css());
            lines[glyph.line].append_child(&span)?;
            spans.push(span);
        }
        Ok(spans)
    }
}

fn place_orbs(parallax: &Parallax, leading: &HtmlElement, trailing: &HtmlElement, title: Option<&HtmlElement>) {
    let percent = |v: f64| format!("{}%", v);
    let OrbPlacement { horizontal, vertical } = parallax.leading();
    set_style(leading, "left", &percent(horizontal));
    set_style(leading, "top", &percent(vertical));
    let OrbPlacement { horizontal, vertical } = parallax.trailing();
    set_style(trailing, "right", &percent(horizontal));
    set_style(trailing, "top", &percent(vertical));
    if let Some(title) = title {
        set_style(title, "transform", &format!("translateY({}px)", parallax.title_offset()));
    }
}

/// The two radial-gradient orbs drifting behind the page, and the hero title
/// lifting as the page scrolls.
#[wasm_bindgen]
pub struct GradientOrbs {
    leading: HtmlElement,
    trailing: HtmlElement,
    title: Option<HtmlElement>,
    parallax: Rc<RefCell<Parallax>>,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl GradientOrbs {
    #[wasm_bindgen(constructor)]
    pub fn new(
        leading: HtmlElement,
        trailing: HtmlElement,
        title: Option<HtmlElement>,
        config_json: Option<String>,
    ) -> Result<GradientOrbs, JsValue> {
        let config = config_or_default(config_json, ParallaxConfig::from_json)?;
        Ok(GradientOrbs {
            leading,
            trailing,
            title,
            parallax: Rc::new(RefCell::new(Parallax::new(config))),
            listeners: Vec::new(),
        })
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        if !self.listeners.is_empty() {
            return Ok(());
        }
        let window = window()?;
        {
            let mut parallax = self.parallax.borrow_mut();
            parallax.scroll(window.scroll_y().unwrap_or(0.0));
            place_orbs(&parallax, &self.leading, &self.trailing, self.title.as_ref());
        }

        let on_move = {
            let win = window.clone();
            let parallax = Rc::clone(&self.parallax);
            let (leading, trailing, title) = (self.leading.clone(), self.trailing.clone(), self.title.clone());
            move |event: Event| {
                let event = match event.dyn_into::<MouseEvent>() {
                    Ok(event) => event,
                    Err(_) => return,
                };
                let (width, height) = viewport_size(&win);
                let mut parallax = parallax.borrow_mut();
                if parallax
                    .pointer_move(event.client_x() as f64, event.client_y() as f64, width, height)
                    .is_ok()
                {
                    place_orbs(&parallax, &leading, &trailing, title.as_ref());
                }
            }
        };
        let on_scroll = {
            let win = window.clone();
            let parallax = Rc::clone(&self.parallax);
            let (leading, trailing, title) = (self.leading.clone(), self.trailing.clone(), self.title.clone());
            move |_: Event| {
                let mut parallax = parallax.borrow_mut();
                parallax.scroll(win.scroll_y().unwrap_or(0.0));
                place_orbs(&parallax, &leading, &trailing, title.as_ref());
            }
        };

        self.listeners.push(EventListener::new(&window, "mousemove", on_move)?);
        self.listeners.push(EventListener::new(&window, "scroll", on_scroll)?);
        Ok(())
    }

    pub fn stop(&mut self) {
        self.listeners.clear();
    }

    pub fn is_running(&self) -> bool {
        !self.listeners.is_empty()
    }
}
