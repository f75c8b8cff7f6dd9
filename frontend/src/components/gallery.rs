use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use super::lightbox::Lightbox;
use crate::config::{get_site_config, SiteConfig};

pub const ALL: &str = "all";

pub static FILTERS: [(&str, &str); 5] = [
    (ALL, "All"),
    ("wedding", "Weddings"),
    ("birthday", "Birthdays"),
    ("corporate", "Corporate"),
    ("decor", "Decor"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem {
    pub category: &'static str,
    pub src: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

pub static GALLERY: [GalleryItem; 8] = [
    GalleryItem {
        category: "wedding",
        src: "https://images.unsplash.com/photo-1519741497674-611481863552?w=500&q=80",
        alt: "Wedding stage with floral arch",
        caption: "Royal Wedding Stage",
    },
    GalleryItem {
        category: "birthday",
        src: "https://images.unsplash.com/photo-1530103862676-de8c9debad1d?w=500&q=80",
        alt: "Balloon decorated birthday hall",
        caption: "Birthday Bash",
    },
    GalleryItem {
        category: "corporate",
        src: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=500&q=80",
        alt: "Conference hall set up for a corporate event",
        caption: "Annual Corporate Meet",
    },
    GalleryItem {
        category: "decor",
        src: "https://images.unsplash.com/photo-1464366400600-7168b8af9bc3?w=500&q=80",
        alt: "Table setting with candles and flowers",
        caption: "Elegant Table Decor",
    },
    GalleryItem {
        category: "wedding",
        src: "https://images.unsplash.com/photo-1511285560929-80b456fea0bc?w=500&q=80",
        alt: "Couple during the varmala ceremony",
        caption: "Varmala Moments",
    },
    GalleryItem {
        category: "birthday",
        src: "https://images.unsplash.com/photo-1464349095431-e9a21285b5f3?w=500&q=80",
        alt: "Themed birthday cake",
        caption: "Themed Celebrations",
    },
    GalleryItem {
        category: "decor",
        src: "https://images.unsplash.com/photo-1478146896981-b80fe463b330?w=500&q=80",
        alt: "Marigold and fairy light decoration",
        caption: "Marigold Mandap",
    },
    GalleryItem {
        category: "corporate",
        src: "https://images.unsplash.com/photo-1505373877841-8d25f7d46678?w=500&q=80",
        alt: "Product launch stage with lighting",
        caption: "Product Launch",
    },
];

pub fn matches_filter(filter: &str, category: &str) -> bool {
    filter == ALL || filter == category
}

/// Where an item is in the filter transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemPhase {
    /// Fading in after `delay_ms`.
    Shown { delay_ms: u32 },
    /// Fading out, still taking up space.
    Leaving,
    /// Removed from layout once the fade finished.
    Hidden,
}

/// `settled` is the filter whose fade-out has already completed.
pub fn item_phase(filter: &str, settled: &str, category: &str, index: usize, config: &SiteConfig) -> ItemPhase {
    if matches_filter(filter, category) {
        ItemPhase::Shown {
            delay_ms: (index as u32).saturating_mul(config.gallery_stagger_ms),
        }
    } else if filter == settled || !matches_filter(settled, category) {
        ItemPhase::Hidden
    } else {
        ItemPhase::Leaving
    }
}

impl ItemPhase {
    pub fn class(&self) -> &'static str {
        match self {
            ItemPhase::Shown { .. } => "gallery-item",
            ItemPhase::Leaving => "gallery-item leaving",
            ItemPhase::Hidden => "gallery-item hidden",
        }
    }

    pub fn style(&self) -> String {
        match self {
            ItemPhase::Shown { delay_ms } => format!("animation-delay: {}ms;", delay_ms),
            _ => String::new(),
        }
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let config = get_site_config();
    let filter = use_state(|| ALL.to_string());
    let settled = use_state(|| ALL.to_string());
    let hide_timer = use_mut_ref(|| None::<Timeout>);
    let selected = use_state(|| None::<usize>);

    let on_filter = {
        let filter = filter.clone();
        let settled = settled.clone();
        let hide_ms = config.gallery_hide_ms;
        move |value: &'static str| {
            let filter = filter.clone();
            let settled = settled.clone();
            let hide_timer = hide_timer.clone();
            Callback::from(move |_: MouseEvent| {
                if *filter == value {
                    return;
                }
                debug!("Gallery filter: {}", value);
                filter.set(value.to_string());
                let settled = settled.clone();
                *hide_timer.borrow_mut() = Some(Timeout::new(hide_ms, move || {
                    settled.set(value.to_string());
                }));
            })
        }
    };

    let close_lightbox = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    html! {
        <>
            <div class="gallery-filters">
                { for FILTERS.iter().map(|&(value, label)| html! {
                    <button
                        class={classes!("filter-btn", (*filter == value).then(|| "active"))}
                        data-filter={value}
                        onclick={on_filter(value)}
                    >
                        { label }
                    </button>
                }) }
            </div>
            <div class="gallery-grid">
                { for GALLERY.iter().enumerate().map(|(i, item)| {
                    let phase = item_phase(&filter, &settled, item.category, i, &config);
                    let onclick = {
                        let selected = selected.clone();
                        Callback::from(move |_: MouseEvent| selected.set(Some(i)))
                    };
                    html! {
                        // Keyed on the filter so the fade-in animation replays.
                        <div key={format!("{}-{}", *filter, i)} class={phase.class()} style={phase.style()} data-category={item.category} {onclick}>
                            <img src={item.src} alt={item.alt} loading="lazy" />
                            <div class="gallery-overlay"><span>{ item.caption }</span></div>
                        </div>
                    }
                }) }
            </div>
            {
                if let Some(item) = (*selected).and_then(|i| GALLERY.get(i)) {
                    html! {
                        <Lightbox
                            src={item.src}
                            alt={item.alt}
                            caption={item.caption}
                            on_close={close_lightbox}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}
