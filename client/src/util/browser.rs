//! Browser timer and navigation seams for the registration flow.

use std::time::Duration;

use accounts::register::{Navigator, Timer};

/// [`Timer`] backed by `gloo_timers::future::sleep`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTimer;

#[async_trait::async_trait(?Send)]
impl Timer for GlooTimer {
    async fn sleep(&self, duration: Duration) {
        #[cfg(feature = "csr")]
        gloo_timers::future::sleep(duration).await;
        #[cfg(not(feature = "csr"))]
        let _ = duration;
    }
}

/// [`Navigator`] that assigns `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn redirect(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(path) {
                    log::warn!("redirect to {path} failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
        }
    }
}
