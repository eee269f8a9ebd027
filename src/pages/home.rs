//! Single-page portfolio layout: hero, filterable project gallery, skills,
//! contact, footer, and the project detail modal.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::project_card::ProjectCard;
use crate::components::project_modal::ProjectModal;
use crate::components::site_header::SiteHeader;
use crate::components::skills_panel::SkillsPanel;
use crate::state::catalog::FILTER_TAGS;
use crate::state::gallery::GalleryState;
use crate::util::dom;

/// The portfolio page.
#[component]
pub fn HomePage() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();

    // Footer year is a browser read, so it fills in after hydration.
    let year = RwSignal::new(None::<i32>);
    Effect::new(move || {
        if year.get_untracked().is_none() {
            year.set(dom::current_year());
        }
    });

    let on_open = Callback::new(move |id: String| gallery.update(|g| g.open_detail(&id)));
    let on_close = Callback::new(move |()| gallery.update(|g| g.close_detail()));

    let filter_buttons = FILTER_TAGS
        .into_iter()
        .map(|tag| {
            view! {
                <button
                    class=move || {
                        if gallery.with(|g| g.active_filter == tag) {
                            "filter filter--active"
                        } else {
                            "filter"
                        }
                    }
                    on:click=move |_| gallery.update(|g| g.set_filter(tag))
                >
                    {tag}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <SiteHeader/>
        <main>
            <section id="about" class="hero">
                <h1>"Hi, I build small, fast things for the web."</h1>
                <p class="muted">
                    "Front-end projects, interaction experiments, and the occasional game."
                </p>
            </section>

            <section id="projects" class="projects">
                <h2>"Projects"</h2>
                <div class="projects__filters">{filter_buttons}</div>
                {move || {
                    let visible = gallery.with(GalleryState::visible_projects);
                    if visible.is_empty() {
                        view! {
                            <div class="projects__grid">
                                <p class="projects__empty muted">"No projects in this category."</p>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="projects__grid">
                                {visible
                                    .into_iter()
                                    .map(|record| {
                                        view! { <ProjectCard record=record on_open=on_open/> }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </section>

            <SkillsPanel/>

            <section id="contact" class="contact">
                <h2>"Contact"</h2>
                <ContactForm/>
            </section>
        </main>

        <footer class="site-footer muted">
            "© " {move || year.get()} " Folio"
        </footer>

        {move || {
            gallery
                .with(GalleryState::open_record)
                .map(|record| view! { <ProjectModal record=record on_close=on_close/> })
        }}
    }
}
