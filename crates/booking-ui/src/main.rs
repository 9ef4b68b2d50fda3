//! WASM entry point
//!
//! Trunk compiles this to WASM; the pages load it alongside their markup.

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    if let Err(e) = booking_ui::web::boot() {
        web_sys::console::error_1(&format!("page behaviors failed to start: {e}").into());
    }
}
