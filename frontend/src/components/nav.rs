use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, Node};
use yew::prelude::*;

use crate::config::{get_site_config, SiteConfig};
use crate::dom::{self, Listener};

const NAV_HEIGHT_VAR: &str = "--nav-height";

pub static SECTIONS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("services", "Services"),
    ("gallery", "Gallery"),
    ("testimonials", "Testimonials"),
    ("why-us", "Why Us"),
    ("contact", "Contact"),
];

/// Vertical extent of a page section, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Picks the section containing `probe`. Later sections win on overlap.
pub fn active_section(probe: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .filter(|s| probe >= s.top && probe < s.top + s.height)
        .last()
        .map(|s| s.id.as_str())
}

/// Navbar styling and highlighted link for a scroll position.
#[derive(Clone, Debug, PartialEq)]
pub struct NavScrollState {
    pub scrolled: bool,
    pub active: Option<String>,
}

/// Depends only on the current position, never on the previously active link.
pub fn nav_scroll_state(scroll_y: f64, sections: &[SectionBounds], config: &SiteConfig) -> NavScrollState {
    NavScrollState {
        scrolled: scroll_y > config.navbar_scrolled_after,
        active: active_section(scroll_y + config.active_section_probe, sections).map(str::to_string),
    }
}

pub fn anchor_scroll_top(target_viewport_top: f64, scroll_y: f64, nav_height: f64) -> f64 {
    target_viewport_top + scroll_y - nav_height
}

/// Parses a CSS pixel length such as `80px`.
pub fn parse_px(value: &str) -> Option<f64> {
    value
        .trim()
        .strip_suffix("px")?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|px| px.is_finite() && *px > 0.0)
}

/// Navbar height last measured by `Navbar`, or the configured fallback.
pub fn current_nav_height() -> f64 {
    dom::document()
        .and_then(|d| d.document_element())
        .and_then(|root| root.dyn_into::<web_sys::HtmlElement>().ok())
        .and_then(|root| root.style().get_property_value(NAV_HEIGHT_VAR).ok())
        .and_then(|value| parse_px(&value))
        .unwrap_or(get_site_config().fallback_nav_height)
}

fn measure_sections() -> Vec<SectionBounds> {
    SECTIONS
        .iter()
        .filter_map(|(id, _)| {
            dom::element_by_id(id).map(|el| SectionBounds {
                id: id.to_string(),
                top: el.offset_top() as f64,
                height: el.offset_height() as f64,
            })
        })
        .collect()
}

/// Scrolls to an in-page section, leaving room for the fixed navbar.
pub fn scroll_to_section(id: &str) {
    if let Some(target) = dom::element_by_id(id) {
        let top = anchor_scroll_top(target.get_bounding_client_rect().top(), dom::scroll_y(), current_nav_height());
        dom::smooth_scroll_to(top);
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let config = get_site_config();
    let nav_ref = use_node_ref();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| "home".to_string());

    {
        let is_scrolled = is_scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(move |_| {
            let update = move || {
                let state = nav_scroll_state(dom::scroll_y(), &measure_sections(), &config);
                is_scrolled.set(state.scrolled);
                if let Some(id) = state.active {
                    active.set(id);
                }
            };
            update();
            let listener = Listener::on_window("scroll", move |_| update());
            move || drop(listener)
        }, ());
    }

    // Keeps --nav-height in sync so CSS scroll offsets match the real navbar.
    {
        let nav_ref = nav_ref.clone();
        use_effect_with_deps(move |_| {
            let measure = move || {
                let Some(nav) = nav_ref.cast::<web_sys::HtmlElement>() else {
                    return;
                };
                let height = nav.offset_height() as f64;
                if height <= 0.0 {
                    return;
                }
                if let Some(root) = dom::document().and_then(|d| d.document_element()) {
                    if let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() {
                        let _ = root.style().set_property(NAV_HEIGHT_VAR, &format!("{}px", height));
                    }
                }
            };
            measure();
            let listener = Listener::on_window("resize", move |_| measure());
            move || drop(listener)
        }, ());
    }

    {
        let nav_ref = nav_ref.clone();
        let menu_open = menu_open.clone();
        use_effect_with_deps(move |_| {
            let listener = Listener::on_document("click", move |e| {
                let Some(nav) = nav_ref.cast::<Element>() else {
                    return;
                };
                let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                if !nav.contains(target.as_ref()) {
                    menu_open.set(false);
                }
            });
            move || drop(listener)
        }, ());
    }

    {
        use_effect_with_deps(move |open| {
            dom::set_body_scroll_locked(*open);
            || dom::set_body_scroll_locked(false)
        }, *menu_open);
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let open_class = (*menu_open).then(|| "open");

    html! {
        <nav ref={nav_ref} id="navbar" class={classes!("navbar", (*is_scrolled).then(|| "scrolled"), (*menu_open).then(|| "menu-open"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={section_link("home", menu_open.clone())}>
                    {"Anandeshwar "}<span>{"Events"}</span>
                </a>
                <button id="hamburger" class={classes!("hamburger", open_class)} onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul id="navLinks" class={classes!("nav-links", open_class)}>
                    { for SECTIONS.iter().map(|&(id, label)| html! {
                        <li>
                            <a
                                href={format!("#{}", id)}
                                class={classes!("nav-link", (*active == id).then(|| "active"))}
                                onclick={section_link(id, menu_open.clone())}
                            >
                                {label}
                            </a>
                        </li>
                    }) }
                </ul>
            </div>
        </nav>
    }
}

fn section_link(id: &'static str, menu_open: UseStateHandle<bool>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        menu_open.set(false);
        debug!("Scrolling to #{}", id);
        scroll_to_section(id);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(id: &str, top: f64, height: f64) -> SectionBounds {
        SectionBounds { id: id.to_string(), top, height }
    }

    #[test]
    fn active_section_contains_probe() {
        let sections = vec![
            bounds("home", 0.0, 700.0),
            bounds("services", 700.0, 900.0),
            bounds("gallery", 1600.0, 800.0),
        ];
        assert_eq!(active_section(120.0, &sections), Some("home"));
        assert_eq!(active_section(700.0, &sections), Some("services"));
        assert_eq!(active_section(1599.9, &sections), Some("services"));
        assert_eq!(active_section(2399.0, &sections), Some("gallery"));
        assert_eq!(active_section(2400.0, &sections), None);
    }

    #[test]
    fn later_section_wins_on_overlap() {
        let sections = vec![bounds("home", 0.0, 1000.0), bounds("services", 800.0, 400.0)];
        assert_eq!(active_section(900.0, &sections), Some("services"));
    }

    #[test]
    fn scrolling_back_up_reactivates_home() {
        let config = SiteConfig::default();
        let sections = vec![bounds("home", 0.0, 700.0), bounds("services", 700.0, 900.0)];

        let down = nav_scroll_state(800.0, &sections, &config);
        assert!(down.scrolled);
        assert_eq!(down.active.as_deref(), Some("services"));

        let up = nav_scroll_state(0.0, &sections, &config);
        assert!(!up.scrolled);
        assert_eq!(up.active.as_deref(), Some("home"));
    }

    #[test]
    fn navbar_scrolled_only_past_threshold() {
        let config = SiteConfig::default();
        assert!(!nav_scroll_state(60.0, &[], &config).scrolled);
        assert!(nav_scroll_state(61.0, &[], &config).scrolled);
        assert_eq!(nav_scroll_state(61.0, &[], &config).active, None);
    }

    #[test]
    fn measured_nav_height_is_parsed_from_css() {
        assert_eq!(parse_px("80px"), Some(80.0));
        assert_eq!(parse_px(" 64.5px "), Some(64.5));
        assert_eq!(parse_px(""), None);
        assert_eq!(parse_px("0px"), None);
        assert_eq!(parse_px("4rem"), None);
    }

    #[test]
    fn anchor_offset_subtracts_navbar() {
        assert_eq!(anchor_scroll_top(300.0, 1000.0, 72.0), 1228.0);
        assert_eq!(anchor_scroll_top(-200.0, 500.0, 80.0), 220.0);
    }
}
