//! Delayed full-page reload after a successful save
//!
//! Pages reload instead of patching their lists so that every table shows
//! exactly what the server now holds.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

/// Reload the current page after `delay_ms`.
///
/// # Example
/// ```ignore
/// reload_after(self.ui.reload_delay_ms);
/// ```
pub fn reload_after(delay_ms: u32) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        reload_now();
    });
}

pub fn reload_now() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("Page reload failed: {:?}", e);
        }
    }
}
