#![recursion_limit = "512"]
use wasm_bindgen::prelude::*;

mod app;
mod confirm;
mod transport;
mod views;

#[wasm_bindgen(start)]
pub fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    set_panic_hook();
    yew::start_app::<app::AppContainer>();
}

fn set_panic_hook() {
    // panics end up in the browser console instead of "unreachable executed"
    console_error_panic_hook::set_once();
}
