//! Blocking browser notices.
//!
//! Login results, guard redirects and draft uploads announce themselves with
//! a native `alert()`. Outside the browser the message is only logged.

/// Show `message` in a native alert dialog.
pub fn alert(message: &str) {
    log::info!("notice: {message}");
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                log::warn!("alert dialog suppressed by the browser");
            }
        }
    }
}
