use gloo_timers::future::TimeoutFuture;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::get_site_config;
use crate::dom::{self, Listener};

#[derive(Clone, PartialEq)]
pub struct Stat {
    pub target: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub static HERO_STATS: [Stat; 4] = [
    Stat { target: 500, suffix: "+", label: "Events Managed" },
    Stat { target: 1200, suffix: "+", label: "Happy Clients" },
    Stat { target: 10, suffix: "+", label: "Years Experience" },
    Stat { target: 50, suffix: "+", label: "Partner Venues" },
];

/// Value shown after `step` of `steps` ticks; the last tick lands exactly on target.
pub fn counter_value(target: u32, steps: u32, step: u32) -> u32 {
    if steps == 0 || step >= steps {
        return target;
    }
    let increment = target as f64 / steps as f64;
    ((increment * step as f64).round() as u32).min(target)
}

pub fn in_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height && bottom > 0.0
}

fn hero_in_view() -> bool {
    dom::element_by_id("home")
        .map(|hero| {
            let rect = hero.get_bounding_client_rect();
            in_viewport(rect.top(), rect.bottom(), dom::inner_height())
        })
        .unwrap_or(false)
}

#[function_component(StatsCounter)]
pub fn stats_counter() -> Html {
    let config = get_site_config();
    let started = use_state(|| false);
    let step = use_state(|| 0u32);

    // Starts the count once the hero is on screen, checked on scroll and shortly after mount.
    {
        let started = started.clone();
        let config = config.clone();
        use_effect_with_deps(move |_| {
            let check = {
                let started = started.clone();
                move || {
                    if hero_in_view() {
                        started.set(true);
                    }
                }
            };
            {
                let check = check.clone();
                spawn_local(async move {
                    TimeoutFuture::new(config.stats_initial_check_ms).await;
                    check();
                });
            }
            let listener = Listener::on_window("scroll", move |_| check());
            move || drop(listener)
        }, ());
    }

    {
        let setter = step.setter();
        let config = config.clone();
        use_effect_with_deps(move |started| {
            if *started {
                debug!("Animating hero stats");
                let steps = config.stats_steps.max(1);
                let tick_ms = config.stats_duration_ms / steps;
                spawn_local(async move {
                    for step in 1..=steps {
                        TimeoutFuture::new(tick_ms).await;
                        setter.set(step);
                    }
                });
            }
            || ()
        }, *started);
    }

    html! {
        <div class="hero-stats">
            { for HERO_STATS.iter().map(|stat| html! {
                <div class="stat">
                    <span class="stat-number" data-target={stat.target.to_string()}>
                        { counter_value(stat.target, config.stats_steps, *step) }
                    </span>
                    <span class="stat-suffix">{ stat.suffix }</span>
                    <span class="stat-label">{ stat.label }</span>
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_zero_and_ends_on_target() {
        assert_eq!(counter_value(500, 60, 0), 0);
        assert_eq!(counter_value(500, 60, 60), 500);
        assert_eq!(counter_value(500, 60, 90), 500);
    }

    #[test]
    fn counter_rounds_intermediate_steps() {
        assert_eq!(counter_value(10, 60, 6), 1);
        assert_eq!(counter_value(10, 60, 30), 5);
        assert_eq!(counter_value(1200, 60, 1), 20);
        assert_eq!(counter_value(50, 60, 59), 49);
    }

    #[test]
    fn counter_never_decreases() {
        let values: Vec<u32> = (0..=60).map(|s| counter_value(1200, 60, s)).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn zero_steps_shows_target() {
        assert_eq!(counter_value(42, 0, 0), 42);
    }

    #[test]
    fn viewport_overlap() {
        assert!(in_viewport(-100.0, 500.0, 800.0));
        assert!(!in_viewport(900.0, 1500.0, 800.0));
        assert!(!in_viewport(-600.0, 0.0, 800.0));
    }
}
