use yew::prelude::*;

use crate::components::effects::{stagger_delay, use_parallax, ServiceCard, TestimonialCard};
use crate::components::gallery::Gallery;
use crate::components::nav::{scroll_to_section, Navbar};
use crate::components::particles::HeroParticles;
use crate::components::reveal::use_reveal_on_scroll;
use crate::components::scroll_top::ScrollTopButton;
use crate::components::stats::StatsCounter;
use crate::config::get_site_config;
use crate::contact::ContactFormView;

static SERVICES: [(&str, &str, &str); 6] = [
    ("💍", "Weddings", "From haldi to vidaai, every ritual planned and decorated end to end."),
    ("🎂", "Birthday Parties", "Themed décor, cakes, entertainment and return gifts for all ages."),
    ("🏢", "Corporate Events", "Conferences, product launches and annual meets run on schedule."),
    ("💐", "Decoration", "Floral, balloon and lighting décor tailored to your venue."),
    ("🍽️", "Catering", "Multi-cuisine menus from trusted caterers across Kanpur."),
    ("📸", "Photography", "Candid and traditional coverage so no moment goes unrecorded."),
];

static TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "They handled our wedding so smoothly that we actually got to enjoy our own day.",
        "Neha & Arjun",
        "Wedding, Kanpur",
    ),
    (
        "The birthday décor was exactly what my daughter dreamed of. Highly recommended!",
        "Sunita Verma",
        "Birthday Party",
    ),
    (
        "Professional team, punctual setup and a flawless product launch.",
        "Rahul Agarwal",
        "Corporate Launch",
    ),
];

static WHY_US: [(&str, &str); 4] = [
    ("Experienced Team", "A decade of events across Uttar Pradesh."),
    ("Transparent Pricing", "Clear packages with no hidden charges."),
    ("Custom Themes", "Every event designed around your story."),
    ("On-Time Delivery", "Setup done and checked before guests arrive."),
];

#[function_component(Hero)]
fn hero() -> Html {
    let background_y = use_parallax();

    let on_enquire = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("contact");
    });

    html! {
        <section id="home" class="hero" style={format!("background-position-y: {};", background_y)}>
            <HeroParticles />
            <div class="hero-content">
                <p class="hero-tag">{"Kanpur's Trusted Event Planners"}</p>
                <h1>{"Making Moments "}<span>{"Memorable"}</span></h1>
                <p class="hero-subtitle">
                    {"Weddings, birthdays and corporate events planned, decorated and delivered with care."}
                </p>
                <a href="#contact" class="btn btn-primary" onclick={on_enquire}>{"Plan Your Event"}</a>
                <StatsCounter />
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_reveal_on_scroll();
    let config = get_site_config();

    html! {
        <div class="home">
            <style>{ STYLES }</style>
            <Navbar />
            <Hero />

            <section id="services" class="section">
                <h2 class="section-title reveal">{"Our Services"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().map(|(icon, title, description)| html! {
                        <ServiceCard icon={*icon} title={*title} description={*description} />
                    }) }
                </div>
            </section>

            <section id="gallery" class="section section-alt">
                <h2 class="section-title reveal">{"Gallery"}</h2>
                <Gallery />
            </section>

            <section id="testimonials" class="section">
                <h2 class="section-title reveal">{"What Our Clients Say"}</h2>
                <div class="testimonials-grid">
                    { for TESTIMONIALS.iter().map(|(quote, author, event)| html! {
                        <TestimonialCard quote={*quote} author={*author} event={*event} />
                    }) }
                </div>
            </section>

            <section id="why-us" class="section section-alt">
                <h2 class="section-title reveal">{"Why Choose Us"}</h2>
                <div class="why-grid">
                    { for WHY_US.iter().enumerate().map(|(i, (title, text))| html! {
                        <div class="why-card reveal" style={stagger_delay(i, config.reveal_stagger_ms)}>
                            <h3>{ *title }</h3>
                            <p>{ *text }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="contact" class="section">
                <h2 class="section-title reveal">{"Send an Enquiry"}</h2>
                <div class="contact-wrapper reveal">
                    <div class="contact-info">
                        <h3>{"Anandeshwar Events"}</h3>
                        <p>{"Civil Lines, Kanpur, Uttar Pradesh"}</p>
                        <p>{"Tell us about your event and we'll call you back within a day."}</p>
                    </div>
                    <ContactFormView />
                </div>
            </section>

            <footer class="footer">
                <p>{"© Anandeshwar Events · Making Moments Memorable | Kanpur"}</p>
            </footer>
            <ScrollTopButton />
        </div>
    }
}

const STYLES: &str = r#"
:root {
    --gold: #EAB308;
    --gold-dark: #D97706;
    --ink: #1E293B;
    --muted: #64748B;
    --nav-height: 72px;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: "Poppins", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; color: var(--ink); }
.navbar {
    position: fixed; top: 0; left: 0; right: 0; z-index: 100;
    background: transparent; transition: background 0.3s ease, box-shadow 0.3s ease;
}
.navbar.scrolled, .navbar.menu-open { background: #fff; box-shadow: 0 4px 20px rgba(0,0,0,0.08); }
.nav-content { max-width: 1200px; margin: 0 auto; display: flex; align-items: center; justify-content: space-between; padding: 1rem 1.5rem; }
.nav-logo { font-weight: 700; font-size: 1.3rem; color: var(--ink); text-decoration: none; }
.nav-logo span { color: var(--gold-dark); }
.nav-links { display: flex; gap: 1.5rem; list-style: none; }
.nav-link { color: var(--ink); text-decoration: none; font-weight: 500; }
.nav-link.active { color: var(--gold-dark); }
.hamburger { display: none; background: none; border: none; cursor: pointer; }
.hamburger span { display: block; width: 24px; height: 2px; margin: 5px 0; background: var(--ink); transition: transform 0.3s ease; }
@media (max-width: 860px) {
    .hamburger { display: block; }
    .nav-links { position: fixed; inset: var(--nav-height) 0 0 0; flex-direction: column; align-items: center; padding-top: 2rem; background: #fff; transform: translateX(100%); transition: transform 0.3s ease; }
    .nav-links.open { transform: none; }
}
.hero {
    position: relative; min-height: 100vh; display: flex; align-items: center; justify-content: center;
    text-align: center; color: #fff; overflow: hidden;
    background: linear-gradient(rgba(15,23,42,0.7), rgba(15,23,42,0.7)), url('https://images.unsplash.com/photo-1492684223066-81342ee5ff30?w=1600&q=80') center / cover;
}
.hero h1 { font-size: clamp(2.2rem, 6vw, 4rem); }
.hero h1 span { color: var(--gold); }
.hero-particles { position: absolute; inset: 0; pointer-events: none; }
.particle { position: absolute; bottom: -10px; border-radius: 50%; background: var(--gold); animation: rise linear infinite; }
@keyframes rise { from { transform: translateY(0); } to { transform: translateY(-110vh); } }
.hero-stats { display: flex; gap: 2rem; justify-content: center; margin-top: 2.5rem; flex-wrap: wrap; }
.stat-number { font-size: 2rem; font-weight: 700; color: var(--gold); }
.stat-label { display: block; font-size: 0.85rem; opacity: 0.8; }
.btn { display: inline-flex; align-items: center; gap: 0.5rem; padding: 0.85rem 1.8rem; border-radius: 100px; border: none; font-weight: 600; cursor: pointer; text-decoration: none; }
.btn-primary { background: var(--gold); color: #fff; }
.btn-primary:disabled { opacity: 0.7; cursor: wait; }
.section { padding: 5rem 1.5rem; max-width: 1200px; margin: 0 auto; }
.section-alt { background: #FFFBEB; max-width: none; }
.section-title { text-align: center; margin-bottom: 2.5rem; font-size: 2rem; }
.services-grid, .testimonials-grid, .why-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 1.5rem; }
.service-card, .testimonial-card, .why-card { background: #fff; padding: 2rem; border-radius: 16px; box-shadow: 0 8px 30px rgba(0,0,0,0.06); transition: transform 0.3s ease; }
.service-icon { font-size: 2rem; margin-bottom: 1rem; }
.stars { color: var(--gold); margin-bottom: 0.75rem; }
.author span { display: block; color: var(--muted); font-size: 0.85rem; }
.reveal { opacity: 0; transform: translateY(30px); transition: opacity 0.6s ease, transform 0.6s ease; }
.reveal.visible { opacity: 1; transform: none; }
.gallery-filters { display: flex; gap: 0.75rem; justify-content: center; flex-wrap: wrap; margin-bottom: 2rem; }
.filter-btn { padding: 0.5rem 1.2rem; border-radius: 100px; border: 1px solid var(--gold); background: #fff; cursor: pointer; }
.filter-btn.active { background: var(--gold); color: #fff; }
.gallery-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1rem; max-width: 1200px; margin: 0 auto; }
.gallery-item { position: relative; border-radius: 12px; overflow: hidden; cursor: pointer; animation: galleryIn 0.4s ease both; transition: opacity 0.25s ease, transform 0.25s ease; }
.gallery-item.leaving { opacity: 0; transform: scale(0.9); animation: none; }
.gallery-item.hidden { display: none; }
.gallery-item img { width: 100%; height: 220px; object-fit: cover; display: block; }
.gallery-overlay { position: absolute; inset: auto 0 0 0; padding: 0.75rem; color: #fff; background: linear-gradient(transparent, rgba(0,0,0,0.7)); }
@keyframes galleryIn { from { opacity: 0; transform: scale(0.9); } to { opacity: 1; transform: scale(1); } }
.lightbox { position: fixed; inset: 0; z-index: 9999; background: rgba(0,0,0,0.92); display: flex; align-items: center; justify-content: center; padding: 20px; cursor: pointer; animation: fadeIn 0.3s ease; }
.lightbox.closing { animation: fadeOut 0.25s ease forwards; }
.lightbox-image { max-width: 90vw; max-height: 85vh; object-fit: contain; border-radius: 12px; box-shadow: 0 20px 60px rgba(0,0,0,0.5); }
.lightbox-caption { position: absolute; bottom: 30px; left: 50%; transform: translateX(-50%); color: #fff; font-weight: 600; background: rgba(234,179,8,0.9); padding: 8px 24px; border-radius: 100px; white-space: nowrap; }
.lightbox-close { position: absolute; top: 20px; right: 20px; width: 44px; height: 44px; border-radius: 50%; border: none; background: rgba(255,255,255,0.15); color: #fff; font-size: 28px; cursor: pointer; }
.lightbox-close:hover { background: rgba(255,255,255,0.25); }
@keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
@keyframes fadeOut { from { opacity: 1; } to { opacity: 0; } }
.contact-wrapper { display: grid; grid-template-columns: 1fr 1.4fr; gap: 2rem; }
@media (max-width: 860px) { .contact-wrapper { grid-template-columns: 1fr; } }
.form-group { display: flex; flex-direction: column; margin-bottom: 1.2rem; }
.form-group input, .form-group select { padding: 0.8rem 1rem; border: 1px solid #CBD5E1; border-radius: 10px; font-size: 1rem; }
.form-group .error { border-color: #DC2626; }
.form-error { display: none; color: #DC2626; font-size: 0.85rem; margin-top: 0.35rem; }
.form-error.show { display: block; }
.form-success { display: none; margin-top: 1rem; padding: 1rem; border-radius: 10px; background: #DCFCE7; color: #166534; }
.form-success.show { display: block; }
.footer { text-align: center; padding: 2rem; background: var(--ink); color: #fff; }
.scroll-top { position: fixed; right: 24px; bottom: 24px; width: 48px; height: 48px; border-radius: 50%; border: none; background: var(--gold); color: #fff; cursor: pointer; opacity: 0; pointer-events: none; transition: opacity 0.3s ease; }
.scroll-top.visible { opacity: 1; pointer-events: auto; }
"#;
