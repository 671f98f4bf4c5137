use yew::prelude::*;

use crate::config;

pub fn whatsapp_link(number: &str, greeting: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(greeting))
}

#[function_component]
pub fn WhatsAppButton() -> Html {
    let href = whatsapp_link(config::WHATSAPP_NUMBER, config::WHATSAPP_GREETING);

    html! {
        <a
            href={href}
            target="_blank"
            rel="noopener noreferrer"
            class="whatsapp-button"
            aria-label="Chat on WhatsApp"
        >
            <svg viewBox="0 0 24 24" width="32" height="32" fill="none" stroke="currentColor" stroke-width="2">
                <path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z"></path>
            </svg>
        </a>
    }
}
