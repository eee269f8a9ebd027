//! Detail modal showing one project's full information.

use leptos::prelude::*;

use crate::state::catalog::ProjectRecord;
use crate::util::dom;

/// Modal detail view for a single record.
///
/// Backdrop click, the close button, and the global Escape key all converge
/// on the same `on_close` callback. Background scroll is suspended for the
/// lifetime of the component and restored on unmount, so closing an
/// already-closed view has no residual effect.
#[component]
pub fn ProjectModal(record: ProjectRecord, on_close: Callback<()>) -> impl IntoView {
    dom::set_scroll_lock(true);
    on_cleanup(move || dom::set_scroll_lock(false));

    let esc = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });
    on_cleanup(move || esc.remove());

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--project"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
            >
                <h2>{record.title}</h2>
                <p class="muted">{record.description}</p>
                <div class="dialog__links">
                    {record
                        .links
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    class="btn btn--ghost"
                                    href=link.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=on_close_click>"Close"</button>
                </div>
            </div>
        </div>
    }
}
