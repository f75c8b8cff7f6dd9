use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Node};
use yew::prelude::*;

use crate::config::{get_site_config, SiteConfig};
use crate::dom;

const REVEAL_THRESHOLD: f64 = 0.08;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";

/// Delay before an element reveals, staggered by its position among sibling reveals.
pub fn reveal_delay_ms(sibling_index: usize, config: &SiteConfig) -> u32 {
    let delay = (sibling_index as u32).saturating_mul(config.reveal_stagger_ms);
    delay.min(config.reveal_max_delay_ms)
}

fn sibling_index(element: &Element) -> usize {
    let Some(parent) = element.parent_element() else {
        return 0;
    };
    let Ok(siblings) = parent.query_selector_all(".reveal") else {
        return 0;
    };
    let element: &Node = element;
    (0..siblings.length())
        .filter_map(|i| siblings.item(i))
        .position(|node| node.is_same_node(Some(element)))
        .unwrap_or(0)
}

/// Fades `.reveal` elements in the first time they scroll into view.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(move |_| {
        let config = get_site_config();
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let delay = reveal_delay_ms(sibling_index(&target), &config);
                observer.unobserve(&target);
                Timeout::new(delay, move || {
                    let _ = target.class_list().add_1("visible");
                })
                .forget();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&REVEAL_THRESHOLD.into());
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|_| warn!("IntersectionObserver unavailable, revealing everything"))
            .ok();

        if let Some(elements) = dom::document().and_then(|d| d.query_selector_all(".reveal").ok()) {
            for el in (0..elements.length()).filter_map(|i| elements.item(i)) {
                let Ok(el) = el.dyn_into::<Element>() else {
                    continue;
                };
                match &observer {
                    Some(observer) => observer.observe(&el),
                    None => {
                        let _ = el.class_list().add_1("visible");
                    }
                }
            }
        }

        move || {
            if let Some(observer) = observer {
                observer.disconnect();
            }
            drop(callback);
        }
    }, ());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_staggers_by_sibling_index() {
        let config = SiteConfig::default();
        assert_eq!(reveal_delay_ms(0, &config), 0);
        assert_eq!(reveal_delay_ms(1, &config), 80);
        assert_eq!(reveal_delay_ms(4, &config), 320);
    }

    #[test]
    fn delay_is_capped() {
        let config = SiteConfig::default();
        assert_eq!(reveal_delay_ms(5, &config), 400);
        assert_eq!(reveal_delay_ms(12, &config), 400);
        assert_eq!(reveal_delay_ms(usize::MAX, &config), 400);
    }
}
