//! Card component for one project in the gallery grid.

use leptos::prelude::*;

use crate::state::catalog::ProjectRecord;

/// A focusable project card with tag badges and a details action.
///
/// The card carries only the record id across re-renders; pressing Enter on
/// a focused card is equivalent to activating its details control.
#[component]
pub fn ProjectCard(record: ProjectRecord, on_open: Callback<String>) -> impl IntoView {
    let open_id = record.id.clone();
    let key_id = record.id.clone();

    view! {
        <article
            class="project-card"
            tabindex="0"
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    on_open.run(key_id.clone());
                }
            }
        >
            <div>
                <h3>{record.title}</h3>
                <p class="muted small">{record.description}</p>
            </div>
            <div class="project-card__meta">
                <div class="project-card__tags">
                    {record
                        .tags
                        .into_iter()
                        .map(|tag| view! { <span class="tag">{tag}</span> })
                        .collect::<Vec<_>>()}
                </div>
                <button class="btn btn--ghost" on:click=move |_| on_open.run(open_id.clone())>
                    "Details"
                </button>
            </div>
        </article>
    }
}
