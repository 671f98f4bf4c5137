use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

pub const SECTIONS: &[&str] = &["Home", "About", "Services", "Works", "Contact"];

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLL_THRESHOLD
}

pub fn section_anchor(section: &str) -> String {
    format!("#{}", section.to_lowercase())
}

#[function_component]
pub fn Nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let close_timer = use_mut_ref(|| None::<Timeout>);

    {
        let close_timer = close_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    close_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(true);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    // Let the anchor jump happen before the overlay slides away
    let on_link_click = {
        let menu_open = menu_open.clone();
        let close_timer = close_timer.clone();
        Callback::from(move |_: MouseEvent| {
            let menu_open = menu_open.clone();
            *close_timer.borrow_mut() = Some(Timeout::new(config::NAV_CLOSE_DELAY_MS, move || {
                menu_open.set(false);
            }));
        })
    };

    html! {
        <>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.5rem 3rem;
                        transition: all 0.3s;
                        background: transparent;
                    }
                    .top-nav.scrolled {
                        padding: 1rem 3rem;
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .menu-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 60;
                        background: #000;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        transform: translateY(-100%);
                        opacity: 0;
                        transition: all 0.7s cubic-bezier(0.7, 0, 0.3, 1);
                    }
                    .menu-overlay.open {
                        transform: translateY(0);
                        opacity: 1;
                    }
                    .menu-link {
                        display: block;
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        font-weight: bold;
                        color: #fff;
                        transform: translateY(2.5rem);
                        opacity: 0;
                        transition: all 0.3s;
                    }
                    .menu-overlay.open .menu-link {
                        transform: translateY(0);
                        opacity: 1;
                    }
                "#}
            </style>
            <nav class={classes!("top-nav", is_scrolled(scroll_y).then(|| "scrolled"))}>
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Hevora Technologies"}
                </Link<Route>>
                <button class="menu-button" onclick={open_menu}>
                    <span class="menu-label">{"MENU"}</span>
                    <span class="burger-menu">
                        <span></span>
                        <span></span>
                        <span></span>
                    </span>
                </button>
            </nav>

            <div class={classes!("menu-overlay", (*menu_open).then(|| "open"))}>
                <button class="menu-close" onclick={close_menu}>{"✕"}</button>
                <div class="menu-links">
                    { for SECTIONS.iter().enumerate().map(|(index, section)| html! {
                        <a
                            key={*section}
                            href={section_anchor(section)}
                            class="menu-link"
                            style={format!("transition-delay: {}ms;", index * 100)}
                            onclick={on_link_click.clone()}
                        >
                            <span class="menu-link-hover">{*section}</span>
                        </a>
                    }) }
                </div>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_background_only_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(1200.0));
    }

    #[test]
    fn anchors_follow_section_ids() {
        let anchors: Vec<String> = SECTIONS.iter().map(|s| section_anchor(s)).collect();
        assert_eq!(anchors, vec!["#home", "#about", "#services", "#works", "#contact"]);
    }
}
