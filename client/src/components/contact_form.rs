//! Contact form with local validation and a simulated send.

use leptos::prelude::*;

use crate::net::api::submit_contact;
use crate::state::contact::{CATEGORY_OPTIONS, ContactState, StatusKind};
use crate::util::clock::now_iso8601;

/// Hide the success message after [`crate::state::contact::STATUS_HIDE_DELAY`], unless a newer
/// message has replaced it by then. The timer is not cancelable.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn schedule_status_hide(contact: RwSignal<ContactState>, generation: u64) {
    #[cfg(feature = "hydrate")]
    {
        let delay_ms = u32::try_from(crate::state::contact::STATUS_HIDE_DELAY.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(delay_ms, move || {
            contact.update(|c| {
                c.hide_status(generation);
            });
        })
        .forget();
    }
}

fn status_class(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Error => "form-message form-message--error",
        StatusKind::Success => "form-message form-message--success",
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let contact = expect_context::<RwSignal<ContactState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let timestamp = now_iso8601();
        let Some(Ok(submission)) = contact.try_update(|c| c.submit(&timestamp)) else {
            return;
        };
        match submit_contact(&submission) {
            Ok(()) => {
                if let Some(generation) = contact.try_update(ContactState::complete) {
                    schedule_status_hide(contact, generation);
                }
            }
            Err(e) => {
                log::error!("contact submission failed: {e}");
                contact.update(|c| {
                    c.show_status(StatusKind::Error, e);
                });
            }
        }
    };

    view! {
        <form id="contactForm" class="contact-form" novalidate=true on:submit=on_submit>
            <div class="form-group">
                <label for="name">"Имя"</label>
                <input
                    type="text"
                    id="name"
                    name="name"
                    prop:value=move || contact.with(|c| c.fields.name.clone())
                    on:input=move |ev| contact.update(|c| c.fields.name = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="email">"Email"</label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    prop:value=move || contact.with(|c| c.fields.email.clone())
                    on:input=move |ev| contact.update(|c| c.fields.email = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="category">"Тема обращения"</label>
                <select
                    id="category"
                    name="category"
                    prop:value=move || contact.with(|c| c.fields.category.clone())
                    on:change=move |ev| contact.update(|c| c.fields.category = event_target_value(&ev))
                >
                    <option value="">"Выберите тему"</option>
                    {CATEGORY_OPTIONS
                        .iter()
                        .map(|(code, label)| view! { <option value=*code>{*label}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="form-group">
                <label for="message">"Сообщение"</label>
                <textarea
                    id="message"
                    name="message"
                    rows="6"
                    prop:value=move || contact.with(|c| c.fields.message.clone())
                    on:input=move |ev| contact.update(|c| c.fields.message = event_target_value(&ev))
                ></textarea>
            </div>
            <div class="form-group form-group--checkbox">
                <input
                    type="checkbox"
                    id="consent"
                    name="consent"
                    prop:checked=move || contact.with(|c| c.fields.consent)
                    on:change=move |ev| contact.update(|c| c.fields.consent = event_target_checked(&ev))
                />
                <label for="consent">"Я согласен(на) на обработку персональных данных"</label>
            </div>
            <button type="submit" class="btn btn-primary">"Отправить"</button>
            {move || {
                contact
                    .with(|c| c.status.clone())
                    .map(|status| {
                        view! {
                            <div id="formMessage" class=status_class(status.kind) role="status">
                                {status.text}
                            </div>
                        }
                    })
            }}
        </form>
    }
}
