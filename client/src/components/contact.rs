//! Contact form section.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation runs locally through `ContactState::begin_submit`; only a
//! valid payload reaches `net::api::send_contact_message`, which relays it
//! through the server to the email provider.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::state::contact::{ContactState, SendStatus};

/// CSS modifier for the status banner.
fn status_class(status: SendStatus) -> &'static str {
    match status {
        SendStatus::Success => "form-status form-status--success",
        SendStatus::Error => "form-status form-status--error",
        SendStatus::Idle | SendStatus::Sending => "form-status form-status--info",
    }
}

fn submit_label(sending: bool) -> &'static str {
    if sending { "Enviando..." } else { "Enviar mensaje" }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let contact = RwSignal::new(ContactState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if contact.with_untracked(ContactState::is_sending) {
            return;
        }
        let Some(payload) = contact.try_update(ContactState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let delivered = match crate::net::api::send_contact_message(&payload).await {
                Ok(()) => true,
                Err(e) => {
                    log::error!("contact delivery failed: {e}");
                    false
                }
            };
            contact.update(|s| s.finish_submit(delivered));
            if delivered {
                gloo_timers::future::TimeoutFuture::new(crate::state::contact::SUCCESS_RESET_MS).await;
                contact.update(ContactState::reset_after_success);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    let sending = move || contact.with(ContactState::is_sending);

    view! {
        <section id="contact" class="section-container">
            <h2 class="section-title">"Contacto"</h2>
            <p class="section-subtitle">"¿Tienes un proyecto en mente? ¡Hablemos!"</p>

            <form class="card contact-form" on:submit=on_submit>
                <label class="contact-form__field">
                    <span class="contact-form__label">"Nombre"</span>
                    <input
                        class="contact-form__input"
                        type="text"
                        name="name"
                        placeholder="Tu nombre"
                        required
                        prop:value=move || contact.with(|s| s.form.name.clone())
                        on:input=move |ev| contact.update(|s| s.form.name = event_target_value(&ev))
                    />
                </label>

                <label class="contact-form__field">
                    <span class="contact-form__label">"Email"</span>
                    <input
                        class="contact-form__input"
                        type="email"
                        name="email"
                        placeholder="tu@email.com"
                        required
                        prop:value=move || contact.with(|s| s.form.email.clone())
                        on:input=move |ev| contact.update(|s| s.form.email = event_target_value(&ev))
                    />
                </label>

                <label class="contact-form__field">
                    <span class="contact-form__label">"Mensaje"</span>
                    <textarea
                        class="contact-form__input contact-form__textarea"
                        name="message"
                        rows="5"
                        placeholder="Cuéntame sobre tu proyecto..."
                        required
                        prop:value=move || contact.with(|s| s.form.message.clone())
                        on:input=move |ev| contact.update(|s| s.form.message = event_target_value(&ev))
                    ></textarea>
                </label>

                <Show when=move || contact.with(|s| !s.status_message.is_empty())>
                    <div class=move || status_class(contact.with(|s| s.status))>
                        {move || contact.with(|s| s.status_message.clone())}
                    </div>
                </Show>

                <button class="btn btn--primary contact-form__submit" type="submit" disabled=sending>
                    {move || submit_label(sending())}
                </button>
            </form>
        </section>
    }
}
