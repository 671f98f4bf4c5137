use wasm_bindgen_futures::spawn_local;
use web_sys::{window, FormData, HtmlFormElement};
use yew::prelude::*;

use crate::contact::{self, ContactMessage, SubmissionPhase};

#[function_component]
pub fn ContactForm() -> Html {
    let phase = use_state(SubmissionPhase::default);

    let onsubmit = {
        let phase = phase.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut current = *phase;
            if !current.begin() {
                return;
            }

            let Some(form) = e.target_dyn_into::<HtmlFormElement>() else {
                log::error!("Submit event did not come from a form");
                return;
            };
            let message = match FormData::new_with_form(&form) {
                Ok(data) => ContactMessage::from_form_data(&data),
                Err(err) => {
                    log::error!("Could not read contact form: {:?}", err);
                    return;
                }
            };
            let missing = message.missing_fields();
            if !missing.is_empty() {
                log::warn!("Contact form submitted without {:?}", missing);
                return;
            }

            phase.set(current);
            let phase = phase.clone();
            spawn_local(async move {
                let outcome = contact::submit(&message).await;
                let mut settled = SubmissionPhase::Submitting;
                match settled.finish(&outcome) {
                    Some(alert) => {
                        log::warn!("Contact form submission failed: {:?}", outcome);
                        match window() {
                            Some(window) => {
                                if let Err(err) = window.alert_with_message(alert) {
                                    log::error!("Could not show failure alert: {:?}", err);
                                }
                            }
                            None => log::error!("No window to show failure alert in"),
                        }
                    }
                    None => log::info!("Contact form submitted"),
                }
                phase.set(settled);
            });
        })
    };

    let send_another = {
        let phase = phase.clone();
        Callback::from(move |_: MouseEvent| {
            let mut current = *phase;
            current.reset();
            phase.set(current);
        })
    };

    if phase.is_sent() {
        return html! {
            <div class="contact-success">
                <div class="success-icon">{"✓"}</div>
                <h3>{"Message Sent!"}</h3>
                <p>{"Thank you for contacting us. We will get back to you shortly."}</p>
                <button class="send-another" onclick={send_another}>
                    {"Send another message"}
                </button>
            </div>
        };
    }

    let submitting = phase.is_submitting();

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <div>
                <label>{"First name *"}</label>
                <input type="text" name="name" class="input-field" required=true />
            </div>
            <div>
                <label>{"Email *"}</label>
                <input type="email" name="email" class="input-field" required=true />
            </div>
            <div>
                <label>{"Phone Number *"}</label>
                <input type="tel" name="phone" class="input-field" required=true />
            </div>
            <div>
                <label>{"Message"}</label>
                <textarea rows="4" name="message" class="input-field"></textarea>
            </div>
            <button type="submit" class="submit-button" disabled={submitting}>
                { if submitting { "Sending..." } else { "Submit" } }
            </button>
        </form>
    }
}
