use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::config;
use crate::interactions::{badges, cards, footer, preload, reveal, scroll};

/// Marketing landing page. The class names and ids in this markup are the
/// contract with the stylesheet and with the wiring below.
#[function_component(Landing)]
pub fn landing() -> Html {
    // Everything that works on the rendered document hooks up once, after
    // the first render put the elements in place.
    use_effect_once(|| {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        window.scroll_to_with_x_and_y(0.0, 0.0);

        scroll::wire_smooth_scroll(&window, &document);
        scroll::wire_active_links(&window, &document);
        reveal::wire_fade_ins(&document);
        cards::wire_pricing_cards(&document);
        cards::wire_feature_cards(&document);
        cards::wire_floating_cards(&document);
        badges::wire_store_badges(&document);
        badges::wire_qr_placeholders(&document);
        preload::wire_hero_preload(&document);
        footer::wire_copyright_year(&document);

        || ()
    });

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">{"Manage Your Clients Like a Pro"}</h1>
                    <p class="hero-subtitle">
                        {"Clientist keeps every client, invoice and follow-up in one place, so you can spend your time on the work itself."}
                    </p>
                    <a href="#download" class="hero-cta">{"Get the App"}</a>
                </div>
                <div class="hero-visual">
                    <img
                        src="/assets/hero-dashboard-small.png"
                        data-src="/assets/hero-dashboard.png"
                        alt="Clientist dashboard preview"
                    />
                    <div class="floating-card">{"Invoice paid"}</div>
                    <div class="floating-card">{"New client added"}</div>
                    <div class="floating-card">{"Reminder sent"}</div>
                </div>
            </header>

            <section id="features" class="features">
                <h2 class="section-title fade-in">{"Everything in one place"}</h2>
                <div class="feature-grid">
                    <div class="feature-card fade-in">
                        <h3>{"Client profiles"}</h3>
                        <p>{"Contact details, notes and full history for every client."}</p>
                    </div>
                    <div class="feature-card fade-in">
                        <h3>{"Smart reminders"}</h3>
                        <p>{"Never miss a follow-up; Clientist nudges you at the right time."}</p>
                    </div>
                    <div class="feature-card fade-in">
                        <h3>{"Invoicing"}</h3>
                        <p>{"Send invoices in seconds and watch their status live."}</p>
                    </div>
                </div>
            </section>

            <section id="pricing" class="pricing">
                <h2 class="section-title fade-in">{"Simple pricing"}</h2>
                <div class="pricing-grid">
                    <div class="pricing-card fade-in">
                        <h3>{"Starter"}</h3>
                        <p class="price">{"Free"}</p>
                        <p>{"Up to 5 clients."}</p>
                    </div>
                    <div class="pricing-card featured fade-in">
                        <h3>{"Professional"}</h3>
                        <p class="price">{"9€/mo"}</p>
                        <p>{"Unlimited clients, invoicing and reminders."}</p>
                    </div>
                    <div class="pricing-card fade-in">
                        <h3>{"Team"}</h3>
                        <p class="price">{"29€/mo"}</p>
                        <p>{"Everything shared across your whole team."}</p>
                    </div>
                </div>
            </section>

            <section id="download" class="download">
                <h2 class="section-title fade-in">{"Take Clientist with you"}</h2>
                <div class="store-badges">
                    <a href={config::APP_STORE_URL} class="store-badge">
                        <div class="store-badge-text">
                            <small>{"Download on the"}</small>
                            <span>{"App Store"}</span>
                        </div>
                    </a>
                    <a href={config::PLAY_STORE_URL} class="store-badge">
                        <div class="store-badge-text">
                            <small>{"Get it on"}</small>
                            <span>{"Google Play"}</span>
                        </div>
                    </a>
                </div>
                <div class="qr-code-placeholder">
                    {"Scan to download"}
                </div>
            </section>

            <section id="contact" class="contact">
                <h2 class="section-title fade-in">{"Questions?"}</h2>
                <p>
                    {"Write to us at "}
                    <a href={format!("mailto:{}", config::SUPPORT_EMAIL)}>
                        {config::SUPPORT_EMAIL}
                    </a>
                </p>
            </section>

            <footer class="footer">
                <div class="footer-bottom">
                    <p>{"© 2024 Clientist. All rights reserved."}</p>
                </div>
            </footer>
        </div>
    }
}
