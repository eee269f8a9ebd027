//! Small web-sys glue: smooth scrolling, background scroll locking, and
//! viewport/date reads. Centralized here so components never repeat the
//! hydrate-gated boilerplate.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// Viewport width below which the mobile navigation behavior applies.
pub const MOBILE_NAV_MAX_WIDTH: f64 = 721.0;

/// Smoothly scroll the element with `id` into view, aligned to block start.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(el) = doc.get_element_by_id(id) else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Suspend or restore background scrolling while a modal is open. Clearing
/// the override is unconditional so a repeated unlock stays a no-op.
pub fn set_scroll_lock(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

/// Viewport width in CSS pixels, or 0.0 outside a browser.
#[must_use]
pub fn viewport_width() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Current year for the footer stamp, or `None` outside a browser.
#[must_use]
pub fn current_year() -> Option<i32> {
    #[cfg(feature = "hydrate")]
    {
        let year = js_sys::Date::new_0().get_full_year();
        i32::try_from(year).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
