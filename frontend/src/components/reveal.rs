use stylist::yew::styled_component;
use yew::prelude::*;

use crate::animation::visibility::use_revealed;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Fades and lifts its children in the first time they scroll into view.
#[styled_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_revealed(node.clone(), config::REVEAL_VISIBILITY_THRESHOLD);

    let base = css!(
        r#"
            opacity: 0;
            transform: translateY(30px);
            transition: opacity 0.8s ease-out, transform 0.8s ease-out;
            transition-delay: ${delay}ms;

            &.revealed {
                opacity: 1;
                transform: translateY(0);
            }
        "#,
        delay = props.delay_ms,
    );

    html! {
        <div
            ref={node}
            class={classes!(base, props.class.clone(), revealed.then(|| "revealed"))}
        >
            { for props.children.iter() }
        </div>
    }
}
