use gloo_timers::callback::Interval;
use stylist::yew::styled_component;
use yew::prelude::*;

use crate::animation::carousel::{Rotation, RotationAction};

#[derive(Clone, Copy, PartialEq)]
pub enum SlideFit {
    /// Full-bleed screenshots, desktop projects.
    Cover,
    /// Portrait phone screens centered on a dark frame.
    Contain,
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: Vec<AttrValue>,
    pub alt_prefix: AttrValue,
    pub interval_ms: u32,
    pub initial: Rotation,
    pub fit: SlideFit,
}

/// Every slide stays mounted; only the active one is opaque, so nothing
/// reloads when the rotation moves on.
#[styled_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let initial = props.initial;
    let rotation = use_reducer_eq(move || initial);

    {
        let dispatcher = rotation.dispatcher();
        use_effect_with_deps(
            move |interval_ms: &u32| {
                let interval = Interval::new(*interval_ms, move || {
                    dispatcher.dispatch(RotationAction::Advance);
                });
                move || drop(interval)
            },
            props.interval_ms,
        );
    }

    let frame = css!(
        r#"
            position: relative;
            width: 100%;
            aspect-ratio: 16 / 9;
            overflow: hidden;
            display: flex;
            align-items: center;
            justify-content: center;

            img {
                position: absolute;
                transition: all 1s ease-in-out;
            }
            img.cover {
                inset: 0;
                width: 100%;
                height: 100%;
                object-fit: cover;
                object-position: top;
            }
            img.contain {
                height: 100%;
                width: auto;
                object-fit: contain;
            }
            img.active {
                opacity: 1;
                transform: scale(1);
                filter: blur(0);
            }
            img.cover.idle {
                opacity: 0;
                transform: scale(1.05);
            }
            img.contain.idle {
                opacity: 0;
                transform: scale(0.95);
                filter: blur(4px);
            }
        "#
    );

    let fit = match props.fit {
        SlideFit::Cover => "cover",
        SlideFit::Contain => "contain",
    };

    let active = rotation.active();

    html! {
        <div class={classes!(frame, format!("carousel-{}", fit))}>
            {
                props.slides.iter().enumerate().map(|(index, src)| {
                    let state = if index == active { "active" } else { "idle" };
                    html! {
                        <img
                            key={index}
                            src={src.clone()}
                            alt={format!("{} Slide {}", props.alt_prefix, index + 1)}
                            class={classes!(fit, state)}
                        />
                    }
                }).collect::<Html>()
            }
            <div class="carousel-shade"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    pub title: AttrValue,
    pub category: AttrValue,
    pub badge: AttrValue,
    pub description: Html,
    pub tags: Vec<AttrValue>,
    pub slides: Vec<AttrValue>,
    pub interval_ms: u32,
    pub fit: SlideFit,
}

#[function_component]
pub fn ProjectCard(props: &ProjectCardProps) -> Html {
    let gallery = match Rotation::new(props.slides.len(), 0) {
        Some(initial) => html! {
            <Carousel
                slides={props.slides.clone()}
                alt_prefix={props.title.clone()}
                interval_ms={props.interval_ms}
                initial={initial}
                fit={props.fit}
            />
        },
        None => {
            log::error!("Project card '{}' has no slides, carousel disabled", props.title);
            html! { <div class="carousel-empty"></div> }
        }
    };

    html! {
        <div id={props.id.clone()} class="project-card">
            <div class="project-media">
                {gallery}
                <div class="project-badge">{props.badge.clone()}</div>
            </div>
            <div class="project-body">
                <div class="project-heading">
                    <div>
                        <h3>{props.title.clone()}</h3>
                        <p class="project-category">{props.category.clone()}</p>
                    </div>
                    <span class="project-link-icon">{"↗"}</span>
                </div>
                <p class="project-description">{props.description.clone()}</p>
                <div class="project-tags">
                    { for props.tags.iter().map(|tag| html! {
                        <span key={tag.to_string()} class="project-tag">{tag.clone()}</span>
                    }) }
                </div>
            </div>
        </div>
    }
}
