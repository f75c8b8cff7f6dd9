use web_sys::Element;
use yew::prelude::*;

use crate::config::get_site_config;
use crate::dom::{self, Listener};

/// Cursor position relative to the card, each axis in `[0, 1]`.
fn relative_position(e: &MouseEvent, card: &NodeRef) -> Option<(f64, f64)> {
    let el = card.cast::<Element>()?;
    let rect = el.get_bounding_client_rect();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    Some((
        (e.client_x() as f64 - rect.left()) / rect.width(),
        (e.client_y() as f64 - rect.top()) / rect.height(),
    ))
}

pub fn glow_background(x: f64, y: f64) -> String {
    format!(
        "radial-gradient(circle at {:.1}% {:.1}%, rgba(234,179,8,0.04) 0%, transparent 70%), #fff",
        x * 100.0,
        y * 100.0
    )
}

/// `x` and `y` are centred offsets in `[-0.5, 0.5]`.
pub fn tilt_transform(x: f64, y: f64) -> String {
    format!(
        "translateY(-4px) rotateX({:.2}deg) rotateY({:.2}deg)",
        -y * 4.0 + 0.0, // keeps a centred cursor from printing -0.00
        x * 4.0 + 0.0
    )
}

pub fn parallax_position(scroll_y: f64, factor: f64) -> String {
    format!("calc(50% + {:.1}px)", scroll_y * factor)
}

pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    format!("transition-delay: {}ms;", (index as u32).saturating_mul(step_ms))
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let card = use_node_ref();
    let background = use_state(String::new);

    let onmousemove = {
        let card = card.clone();
        let background = background.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some((x, y)) = relative_position(&e, &card) {
                background.set(glow_background(x, y));
            }
        })
    };
    let onmouseleave = {
        let background = background.clone();
        Callback::from(move |_: MouseEvent| background.set(String::new()))
    };

    let style = if background.is_empty() {
        String::new()
    } else {
        format!("background: {};", *background)
    };

    html! {
        <div ref={card} class="service-card reveal" {style} {onmousemove} {onmouseleave}>
            <div class="service-icon">{ props.icon.clone() }</div>
            <h3>{ props.title.clone() }</h3>
            <p>{ props.description.clone() }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub quote: AttrValue,
    pub author: AttrValue,
    pub event: AttrValue,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let card = use_node_ref();
    let style = use_state(String::new);

    let onmousemove = {
        let card = card.clone();
        let style = style.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some((x, y)) = relative_position(&e, &card) {
                style.set(format!("transform: {};", tilt_transform(x - 0.5, y - 0.5)));
            }
        })
    };
    let onmouseleave = {
        let style = style.clone();
        Callback::from(move |_: MouseEvent| {
            style.set("transform: none; transition: transform 0.5s ease;".to_string())
        })
    };

    html! {
        <div ref={card} class="testimonial-card reveal" style={(*style).clone()} {onmousemove} {onmouseleave}>
            <div class="stars">{"★★★★★"}</div>
            <p class="quote">{ props.quote.clone() }</p>
            <div class="author">
                <strong>{ props.author.clone() }</strong>
                <span>{ props.event.clone() }</span>
            </div>
        </div>
    }
}

/// Background offset for the hero while it is still on screen.
#[hook]
pub fn use_parallax() -> String {
    let position = use_state_eq(|| parallax_position(0.0, 0.0));

    {
        let position = position.clone();
        use_effect_with_deps(move |_| {
            let factor = get_site_config().parallax_factor;
            let listener = Listener::on_window("scroll", move |_| {
                let scroll_y = dom::scroll_y();
                if scroll_y < dom::inner_height() {
                    position.set(parallax_position(scroll_y, factor));
                }
            });
            move || drop(listener)
        }, ());
    }

    (*position).clone()
}
