use log::Level;

/// Timings and scroll thresholds shared by the page behaviours.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Simulated latency between a valid submit and the success banner.
    pub submit_latency_ms: u32,
    /// How long the success banner stays up.
    pub banner_visible_ms: u32,
    pub navbar_scrolled_after: f64,
    pub scroll_top_visible_after: f64,
    /// Added to scrollY when deciding which section is active.
    pub active_section_probe: f64,
    /// Used for anchor offsets until the navbar has been measured.
    pub fallback_nav_height: f64,
    pub particle_count: usize,
    pub stats_duration_ms: u32,
    pub stats_steps: u32,
    pub stats_initial_check_ms: u32,
    pub reveal_stagger_ms: u32,
    pub reveal_max_delay_ms: u32,
    pub gallery_stagger_ms: u32,
    pub gallery_hide_ms: u32,
    pub lightbox_fade_ms: u32,
    pub parallax_factor: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            submit_latency_ms: 1800,
            banner_visible_ms: 5000,
            navbar_scrolled_after: 60.0,
            scroll_top_visible_after: 400.0,
            active_section_probe: 120.0,
            fallback_nav_height: 72.0,
            particle_count: 18,
            stats_duration_ms: 2000,
            stats_steps: 60,
            stats_initial_check_ms: 500,
            reveal_stagger_ms: 80,
            reveal_max_delay_ms: 400,
            gallery_stagger_ms: 60,
            gallery_hide_ms: 250,
            lightbox_fade_ms: 250,
            parallax_factor: 0.3,
        }
    }
}

pub fn get_site_config() -> SiteConfig {
    SiteConfig::default()
}

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose state transitions when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}
