//! Theme application on the document root.
//!
//! Applies a `data-theme` attribute to the `<html>` element. The choice itself
//! is persisted by `SessionStore`. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! SSR paths no-op to keep server rendering deterministic; the first client
//! render applies the stored theme.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::session::Theme;

/// Theme implied by the system `prefers-color-scheme`. Light outside a browser.
pub fn system_theme() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let prefers_dark = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
