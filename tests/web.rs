//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use ambient_canvas_backend::{initialize, AmbientCanvas, GradientOrbs, LaunchingText};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlCanvasElement, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn mount<T: JsCast>(tag: &str) -> T {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element(tag).unwrap();
    document.body().unwrap().append_child(&element).unwrap();
    element.dyn_into::<T>().unwrap()
}

fn mouse(kind: &str, x: f64, y: f64) -> MouseEvent {
    let mut init = MouseEventInit::new();
    init.client_x(x as i32).client_y(y as i32);
    MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
}

#[wasm_bindgen_test]
fn ambient_canvas_fills_viewport_and_seeds_particles() {
    initialize();
    let canvas: HtmlCanvasElement = mount("canvas");
    let window = web_sys::window().unwrap();
    let mut ambient = AmbientCanvas::new(Some(canvas.clone()), None).unwrap();

    ambient.start().unwrap();
    assert!(ambient.is_running());
    assert_eq!(ambient.particle_count(), 80);
    assert_eq!(canvas.width() as f64, window.inner_width().unwrap().as_f64().unwrap().floor());

    // a second start keeps the running field
    ambient.start().unwrap();
    assert_eq!(ambient.particle_count(), 80);

    ambient.stop();
    assert!(!ambient.is_running());
    assert_eq!(ambient.particle_count(), 0);
}

#[wasm_bindgen_test]
fn ambient_canvas_survives_repeated_mounts() {
    let canvas: HtmlCanvasElement = mount("canvas");
    let mut ambient = AmbientCanvas::new(Some(canvas), Some(r#"{"particle_count": 12}"#.to_owned())).unwrap();
    for _ in 0..5 {
        ambient.start().unwrap();
        assert_eq!(ambient.particle_count(), 12);
        ambient.stop();
    }
    assert!(!ambient.is_running());
}

#[wasm_bindgen_test]
fn ambient_canvas_without_canvas_does_nothing() {
    let mut ambient = AmbientCanvas::new(None, None).unwrap();
    ambient.start().unwrap();
    assert!(!ambient.is_running());
    assert_eq!(ambient.particle_count(), 0);
    ambient.stop();
}

#[wasm_bindgen_test]
fn malformed_config_is_rejected() {
    assert!(AmbientCanvas::new(None, Some("{".to_owned())).is_err());
}

#[wasm_bindgen_test]
fn launching_text_dims_letters_near_pointer() {
    let container: HtmlElement = mount("div");
    container.style().set_property("width", "700px").unwrap();
    let mut text = LaunchingText::new(container.clone(), "LAUNCHING\nSOON", None).unwrap();
    text.start().unwrap();
    assert_eq!(text.glyph_count(), 13);
    assert_eq!(container.children().length(), 2);

    let rect = container.get_bounding_client_rect();
    container
        .dispatch_event(&mouse("mousemove", rect.left() + 1.0, rect.top() + 1.0))
        .unwrap();
    assert!(text.near_count() > 0);

    container.dispatch_event(&mouse("mouseleave", 0.0, 0.0)).unwrap();
    assert_eq!(text.near_count(), 0);

    text.stop();
    container
        .dispatch_event(&mouse("mousemove", rect.left() + 1.0, rect.top() + 1.0))
        .unwrap();
    assert_eq!(text.near_count(), 0);
}

#[wasm_bindgen_test]
fn gradient_orbs_take_resting_positions() {
    let leading: HtmlElement = mount("div");
    let trailing: HtmlElement = mount("div");
    let title: HtmlElement = mount("h1");
    let mut orbs = GradientOrbs::new(leading.clone(), trailing.clone(), Some(title.clone()), None).unwrap();
    orbs.start().unwrap();
    assert!(orbs.is_running());
    assert_eq!(leading.style().get_property_value("left").unwrap(), "20%");
    assert_eq!(trailing.style().get_property_value("right").unwrap(), "15%");
    assert!(title.style().get_property_value("transform").unwrap().starts_with("translateY("));
    orbs.stop();
    assert!(!orbs.is_running());
}
