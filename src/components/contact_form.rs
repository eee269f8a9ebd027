//! Contact form with local validation and a simulated submit.

use leptos::prelude::*;

use crate::state::contact::{FormPhase, SENDING_STATUS, SENT_STATUS, validate};

/// Contact form. Validation is entirely client-side; on success the form
/// reports a sending status, waits a fixed delay, then reports success and
/// clears every field. Nothing is ever transmitted.
#[component]
pub fn ContactForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let phase = RwSignal::new(FormPhase::Idle);
    let status = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked() == FormPhase::Sending {
            return;
        }

        match validate(&name.get_untracked(), &email.get_untracked(), &message.get_untracked()) {
            Err(err) => {
                phase.set(FormPhase::Idle);
                status.set(err.status_message().to_owned());
            }
            Ok(draft) => {
                phase.set(FormPhase::Sending);
                status.set(SENDING_STATUS.to_owned());

                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(
                        crate::state::contact::SEND_DELAY_MS,
                    )
                    .await;
                    log::info!("simulated contact submission from {}", draft.email);
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    phase.set(FormPhase::Sent);
                    status.set(SENT_STATUS.to_owned());
                });

                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = draft;
                }
            }
        }
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <label class="contact-form__label">
                "Name"
                <input
                    class="contact-form__input"
                    type="text"
                    name="name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="contact-form__label">
                "Email"
                <input
                    class="contact-form__input"
                    type="email"
                    name="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="contact-form__label">
                "Message"
                <textarea
                    class="contact-form__input contact-form__input--area"
                    name="message"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button
                class="btn btn--primary"
                type="submit"
                disabled=move || phase.get() == FormPhase::Sending
            >
                "Send Message"
            </button>
            <Show when=move || !status.get().is_empty()>
                <p class="contact-form__status" role="status">{move || status.get()}</p>
            </Show>
        </form>
    }
}
