use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::config::get_site_config;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub size_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub opacity: f64,
}

impl Particle {
    /// Builds one particle from five samples in `[0, 1)`.
    pub fn from_samples(mut sample: impl FnMut() -> f64) -> Self {
        let size_px = sample() * 6.0 + 3.0;
        Self {
            left_pct: sample() * 100.0,
            size_px,
            duration_s: sample() * 12.0 + 8.0,
            delay_s: sample() * 10.0,
            opacity: sample() * 0.5 + 0.1,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; width: {:.2}px; height: {:.2}px; animation-duration: {:.2}s; animation-delay: {:.2}s; opacity: {:.2};",
            self.left_pct, self.size_px, self.size_px, self.duration_s, self.delay_s, self.opacity
        )
    }
}

pub fn generate_particles(count: usize, mut sample: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count).map(|_| Particle::from_samples(&mut sample)).collect()
}

#[function_component(HeroParticles)]
pub fn hero_particles() -> Html {
    let particles = use_state(|| generate_particles(get_site_config().particle_count, Math::random));

    html! {
        <div class="hero-particles" id="heroParticles">
            { for particles.iter().map(|p| html! { <div class="particle" style={p.style()}></div> }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_map_onto_documented_ranges() {
        let low = Particle::from_samples(|| 0.0);
        assert_eq!(low, Particle { left_pct: 0.0, size_px: 3.0, duration_s: 8.0, delay_s: 0.0, opacity: 0.1 });

        let high = Particle::from_samples(|| 0.999);
        assert!(high.size_px < 9.0 && high.size_px > 8.9);
        assert!(high.duration_s < 20.0);
        assert!(high.delay_s < 10.0);
        assert!(high.opacity < 0.6);
    }

    #[test]
    fn generates_requested_count() {
        let mut n = 0.0;
        let particles = generate_particles(18, || {
            n = (n + 0.37) % 1.0;
            n
        });
        assert_eq!(particles.len(), 18);
        assert!(particles.iter().all(|p| (0.0..100.0).contains(&p.left_pct)));
    }

    #[test]
    fn style_sets_square_size() {
        let p = Particle::from_samples(|| 0.5);
        assert_eq!(
            p.style(),
            "left: 50.00%; width: 6.00px; height: 6.00px; animation-duration: 14.00s; animation-delay: 5.00s; opacity: 0.35;"
        );
    }
}
