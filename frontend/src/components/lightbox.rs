use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::config::get_site_config;
use crate::dom::{self, Listener};

/// Gallery thumbnails are requested at w=500; the overlay asks for w=1200.
pub fn hi_res_src(src: &str) -> String {
    src.replacen("w=500", "w=1200", 1)
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    pub caption: AttrValue,
    pub on_close: Callback<()>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let closing = use_state(|| false);
    let close_timer = use_mut_ref(|| None::<Timeout>);

    let close = {
        let closing = closing.clone();
        let close_timer = close_timer.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            if *closing {
                return;
            }
            closing.set(true);
            let on_close = on_close.clone();
            let fade_ms = get_site_config().lightbox_fade_ms;
            *close_timer.borrow_mut() = Some(Timeout::new(fade_ms, move || on_close.emit(())));
        })
    };

    {
        let close = close.clone();
        use_effect_with_deps(move |_| {
            dom::set_body_scroll_locked(true);
            let listener = Listener::on_document("keydown", move |e| {
                if let Ok(key) = e.dyn_into::<KeyboardEvent>() {
                    if key.key() == "Escape" {
                        close.emit(());
                    }
                }
            });
            move || {
                drop(listener);
                dom::set_body_scroll_locked(false);
            }
        }, ());
    }

    let backdrop = use_node_ref();
    let on_backdrop = {
        let close = close.clone();
        let backdrop = backdrop.clone();
        Callback::from(move |e: MouseEvent| {
            let on_backdrop = match (e.target(), backdrop.get()) {
                (Some(target), Some(node)) => JsValue::from(target) == JsValue::from(node),
                _ => false,
            };
            if on_backdrop {
                close.emit(());
            }
        })
    };
    let on_close_button = {
        let close = close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            close.emit(());
        })
    };

    html! {
        <div ref={backdrop} class={classes!("lightbox", (*closing).then(|| "closing"))} onclick={on_backdrop}>
            <img class="lightbox-image" src={hi_res_src(&props.src)} alt={props.alt.clone()} />
            <div class="lightbox-caption">{ props.caption.clone() }</div>
            <button class="lightbox-close" onclick={on_close_button} aria-label="Close">{"×"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_thumbnail_width() {
        assert_eq!(
            hi_res_src("https://images.unsplash.com/photo-1?w=500&q=80"),
            "https://images.unsplash.com/photo-1?w=1200&q=80"
        );
    }

    #[test]
    fn leaves_other_sources_alone() {
        assert_eq!(hi_res_src("/assets/stage.jpg"), "/assets/stage.jpg");
    }
}
