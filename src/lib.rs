//! Ambient canvas effects for the landing page: a drifting particle field
//! with proximity links, pointer-proximity letter highlighting, and gradient
//! orb parallax.
//!
//! The simulation modules are plain Rust and run anywhere; the browser glue
//! in `renderer` and `web` only exists on wasm32.

extern crate nalgebra_glm as glm;

mod utils;

pub mod clock;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod highlight;
pub mod parallax;
pub mod particle;
pub mod surface;

#[cfg(target_arch = "wasm32")]
mod renderer;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{AmbientCanvas, GradientOrbs, LaunchingText};

use std::sync::Once;
use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

static INIT: Once = Once::new();

#[wasm_bindgen]
pub fn initialize() {
    INIT.call_once(|| {
        utils::set_panic_hook();
        #[cfg(target_arch = "wasm32")]
        tracing_wasm::set_as_global_default();
    });
}

#[cfg(target_arch = "wasm32")]
pub struct Timer<'a> {
    name: &'a str,
}

#[cfg(target_arch = "wasm32")]
impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        web_sys::console::time_with_label(name);
        Timer { name }
    }
}

#[cfg(target_arch = "wasm32")]
impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        web_sys::console::time_end_with_label(self.name);
    }
}
