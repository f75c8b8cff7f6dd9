use yew::prelude::*;

use crate::config::{get_site_config, SiteConfig};
use crate::dom::{self, Listener};

pub fn scroll_top_visible(scroll_y: f64, config: &SiteConfig) -> bool {
    scroll_y > config.scroll_top_visible_after
}

#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(move |_| {
            let config = get_site_config();
            let listener = Listener::on_window("scroll", move |_| {
                visible.set(scroll_top_visible(dom::scroll_y(), &config));
            });
            move || drop(listener)
        }, ());
    }

    let onclick = Callback::from(|_: MouseEvent| dom::smooth_scroll_to(0.0));

    html! {
        <button id="scrollTop" class={classes!("scroll-top", (*visible).then(|| "visible"))} {onclick} aria-label="Scroll to top">
            <svg width="20" height="20" fill="none" stroke="currentColor" stroke-width="2.5" viewBox="0 0 24 24">
                <polyline points="18 15 12 9 6 15"/>
            </svg>
        </button>
    }
}
