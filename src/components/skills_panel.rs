//! Skills section with the visibility-triggered percentage animation.
//!
//! DESIGN
//! ======
//! An `IntersectionObserver` watches the section; the first intersection at
//! or above the reveal threshold flips [`RevealPhase`] and disconnects the
//! observer, so the animation runs at most once per page load. Bar fills
//! jump straight to their targets while the percentage text counts up on an
//! independent 20ms interval per skill. Interval handles are the
//! cancellation points: each one is dropped the moment its counter lands.

use leptos::prelude::*;

use crate::state::skills::{SkillEntry, skill_entries};

#[cfg(feature = "hydrate")]
use crate::state::skills::{RevealPhase, SkillCounter, TICK_MS};
#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// Drive one percentage counter to its target on a fixed-step interval.
///
/// The interval owns a clone of its own handle and drops it when the
/// counter lands, which both stops the timer and releases the closure.
#[cfg(feature = "hydrate")]
fn start_counter(value: RwSignal<u32>, target: u32) {
    let mut counter = SkillCounter::new(target);
    value.set(counter.value());
    if counter.done() {
        return;
    }

    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let handle_for_tick = Rc::clone(&handle);
    let tick = Interval::new(TICK_MS, move || {
        value.set(counter.tick());
        if counter.done() {
            handle_for_tick.borrow_mut().take();
        }
    });
    *handle.borrow_mut() = Some(tick);
}

/// Skills section. Percentage counters hold 0 until the section first
/// scrolls into view.
#[component]
pub fn SkillsPanel() -> impl IntoView {
    let entries = skill_entries();
    let counters: Vec<RwSignal<u32>> = entries.iter().map(|_| RwSignal::new(0)).collect();
    let revealed = RwSignal::new(false);
    let section_ref = NodeRef::<leptos::html::Section>::new();

    #[cfg(feature = "hydrate")]
    {
        let targets: Vec<u32> = entries.iter().map(|e| e.target).collect();
        let counters_for_observer = counters.clone();
        let observing = RwSignal::new(false);
        Effect::new(move || {
            let Some(section) = section_ref.get() else {
                return;
            };
            if observing.get_untracked() {
                return;
            }

            let phase = Rc::new(RefCell::new(RevealPhase::default()));
            let counters = counters_for_observer.clone();
            let targets = targets.clone();
            let cb = Closure::wrap(Box::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>()
                        else {
                            continue;
                        };
                        if !phase.borrow_mut().note_visibility(entry.intersection_ratio()) {
                            continue;
                        }
                        log::info!("skills section revealed; starting counters");
                        observer.disconnect();
                        revealed.set(true);
                        for (value, target) in counters.iter().zip(&targets) {
                            start_counter(*value, *target);
                        }
                        break;
                    }
                },
            )
                as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(crate::state::skills::REVEAL_THRESHOLD));
            if let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
                cb.as_ref().unchecked_ref(),
                &options,
            ) {
                observer.observe(&section);
                observing.set(true);
            }
            // One closure per page load; intentionally kept alive so the
            // observer callback stays valid until it disconnects itself.
            cb.forget();
        });
    }

    view! {
        <section id="skills" class="skills" node_ref=section_ref>
            <h2>"Skills"</h2>
            <div class="skills__list">
                {entries
                    .into_iter()
                    .zip(counters)
                    .map(|(entry, counter)| view! { <SkillRow entry=entry counter=counter revealed=revealed/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// One labeled bar. The fill width snaps to the target on reveal; only the
/// percentage text animates.
#[component]
fn SkillRow(entry: SkillEntry, counter: RwSignal<u32>, revealed: RwSignal<bool>) -> impl IntoView {
    let target = entry.target;

    view! {
        <div class="skill">
            <div class="skill__head">
                <span class="skill__label">{entry.label}</span>
                <span class="skill__percent">{move || format!("{}%", counter.get())}</span>
            </div>
            <div class="skill__track">
                <div
                    class="skill__fill"
                    style:width=move || {
                        if revealed.get() { format!("{target}%") } else { "0%".to_owned() }
                    }
                ></div>
            </div>
        </div>
    }
}
