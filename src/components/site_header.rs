//! Page header: brand, section navigation, mobile nav toggle, theme toggle.

use leptos::prelude::*;

use crate::util::dom;
use crate::util::theme::{self, Theme};

const NAV_SECTIONS: [(&str, &str); 4] =
    [("about", "About"), ("projects", "Projects"), ("skills", "Skills"), ("contact", "Contact")];

/// Site header with smooth-scrolling section links.
///
/// On narrow viewports the nav renders collapsed behind a toggle, and
/// activating a link closes it again.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let nav_open = RwSignal::new(false);

    let on_toggle_theme = move |_| {
        theme.set(theme::toggle(theme.get_untracked()));
    };

    let nav_links = NAV_SECTIONS
        .into_iter()
        .map(|(id, label)| {
            view! {
                <a
                    class="site-nav__link"
                    href=format!("#{id}")
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        dom::scroll_to_section(id);
                        if dom::viewport_width() < dom::MOBILE_NAV_MAX_WIDTH {
                            nav_open.set(false);
                        }
                    }
                >
                    {label}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <header class="site-header">
            <span class="site-header__brand">"Folio"</span>
            <nav
                id="primary-nav"
                class=move || {
                    if nav_open.get() { "site-nav site-nav--open" } else { "site-nav" }
                }
            >
                {nav_links}
                <button
                    class="site-nav__close"
                    aria-label="Close navigation"
                    on:click=move |_| nav_open.set(false)
                >
                    "×"
                </button>
            </nav>
            <button
                class="site-header__menu"
                aria-label="Open navigation"
                on:click=move |_| nav_open.set(true)
            >
                "☰"
            </button>
            <button
                class="site-header__theme"
                aria-label="Toggle theme"
                on:click=on_toggle_theme
            >
                {move || theme.get().icon()}
            </button>
        </header>
    }
}
