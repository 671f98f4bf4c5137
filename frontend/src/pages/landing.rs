use chrono::Datelike;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::project_card::{ProjectCard, SlideFit};
use crate::components::reveal::Reveal;
use crate::components::stats_counter::StatsCounter;
use crate::config;

const HERO_BACKGROUND: &str = "https://images.unsplash.com/photo-1497215728101-856f4ea42174?q=80&w=2070&auto=format&fit=crop";
const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1522071820081-009f0129c71c?q=80&w=2070&auto=format&fit=crop";

const STATS: &[(u32, &str)] = &[
    (5, "Years of Cumulative Experience"),
    (4, "Satisfied Clients"),
    (7, "Projects Delivered"),
];

const SERVICES: &[(&str, &str)] = &[
    (
        "App Development",
        "Building robust, scalable mobile applications tailored to your needs for both iOS and Android.",
    ),
    (
        "UI/UX Design",
        "Designing intuitive interfaces and engaging user journeys to bridge functionality with beauty.",
    ),
    (
        "Digital Marketing",
        "Data-driven strategies to boost your online presence, optimize reach, and grow your brand.",
    ),
];

const TEXAS_SLIDES: &[&str] = &[
    "/Screenshot 2025-12-16 122413.png",
    "/Screenshot 2025-12-16 122742.png",
    "/Screenshot 2025-12-16 123716.png",
    "/Screenshot 2025-12-16 123824.png",
    "/Screenshot 2025-12-16 123031.png",
];

const RENTHOUSE_SLIDES: &[&str] = &[
    "/WhatsApp Image 2025-12-17 at 19.41.52_f412bb1b.jpg",
    "/WhatsApp Image 2025-12-17 at 19.41.51_98bff560.jpg",
    "/WhatsApp Image 2025-12-17 at 19.41.51_397a2299.jpg",
    "/WhatsApp Image 2025-12-17 at 19.41.50_0724ffdd.jpg",
];

fn attr_list(items: &[&'static str]) -> Vec<AttrValue> {
    items.iter().map(|item| AttrValue::Static(*item)).collect()
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Start at the top when the page mounts
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let year = chrono::Local::now().year();

    html! {
        <main class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: #000;
                        color: #fff;
                    }
                    .landing-page ::selection {
                        background: #ccff00;
                        color: #000;
                    }
                    .accent {
                        color: #ccff00;
                    }
                    .hero {
                        position: relative;
                        height: 100vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        overflow: hidden;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                        opacity: 0.4;
                    }
                    .hero-content {
                        z-index: 1;
                        text-align: center;
                        padding: 0 1rem;
                    }
                    .hero-content h1 {
                        font-size: clamp(3rem, 12vw, 8rem);
                        font-weight: bold;
                        letter-spacing: -0.05em;
                    }
                    .hero-cta {
                        position: absolute;
                        bottom: 10rem;
                        z-index: 2;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                        animation: bounce 1s infinite;
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translateY(-25%); }
                        50% { transform: translateY(0); }
                    }
                    .hero-wave {
                        position: absolute;
                        bottom: 0;
                        width: 100%;
                        line-height: 0;
                        fill: #fff;
                    }
                    .about {
                        background: #fff;
                        color: #000;
                        padding: 8rem 5rem;
                    }
                    .stats-strip {
                        background: #0a0a0a;
                        padding: 5rem 0;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 2.5rem;
                    }
                    .stats-counter {
                        text-align: center;
                        padding: 1.5rem;
                    }
                    .stats-value {
                        font-size: clamp(3.75rem, 8vw, 6rem);
                        font-weight: bold;
                        margin-bottom: 1rem;
                    }
                    .stats-title {
                        color: #9ca3af;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }
                    .services-grid, .works-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 2rem;
                    }
                    .project-card {
                        position: relative;
                        overflow: hidden;
                        border-radius: 1rem;
                        background: #111;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        transition: border-color 0.5s;
                    }
                    .project-card:hover {
                        border-color: #ccff00;
                    }
                    .project-media {
                        position: relative;
                        background: #050505;
                    }
                    .project-badge {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: #ccff00;
                        color: #000;
                        font-size: 0.75rem;
                        font-weight: bold;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        text-transform: uppercase;
                    }
                    .whatsapp-button {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 50;
                        padding: 1rem;
                        border-radius: 9999px;
                        background: #22c55e;
                        color: #fff;
                    }
                    .input-field {
                        width: 100%;
                        background: transparent;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.3);
                        color: #fff;
                        padding: 0.5rem 0;
                    }
                    .submit-button:disabled {
                        opacity: 0.5;
                    }
                "#}
            </style>

            <section id="home" class="hero">
                <div class="hero-background" style={format!("background-image: url('{}');", HERO_BACKGROUND)}></div>
                <div class="hero-content">
                    <p class="hero-kicker">
                        {"Welcome to J. Robins, where we redefine cloud-based software solutions."}
                    </p>
                    <h1>{"Innovative Solutions"}</h1>
                </div>
                <div class="hero-cta">
                    <span class="hero-arrow">{"↓"}</span>
                    <a href="#contact" class="hero-contact">{"Contact"}</a>
                </div>
                <div class="hero-wave">
                    <svg viewBox="0 0 1440 120" preserveAspectRatio="none">
                        <path d="M0,120 L0,60 Q150,60 250,60 L450,60 Q500,60 520,30 L550,0 L890,0 L920,30 Q940,60 990,60 L1190,60 Q1290,60 1440,60 L1440,120 Z"></path>
                    </svg>
                </div>
            </section>

            <section id="about" class="about">
                <div class="about-grid">
                    <div class="about-image">
                        <img src={ABOUT_IMAGE} alt="Team working" />
                    </div>
                    <Reveal class="about-copy">
                        <h2>{"About Us"}</h2>
                        <div class="divider"></div>
                        <p>
                            {"We are committed to providing "}
                            <span class="bold">{"customizable and innovative"}</span>
                            {" software solutions. Our focus on user-friendly interfaces ensures you achieve your business goals efficiently."}
                        </p>
                        <a href="#services" class="learn-more">{"Learn More →"}</a>
                    </Reveal>
                </div>
            </section>

            <section class="stats-strip">
                { for STATS.iter().map(|(end, title)| html! {
                    <StatsCounter key={*title} end={*end} title={*title} />
                }) }
            </section>

            <section id="services" class="services">
                <div class="section-heading">
                    <h2>{"Services We Provide"}</h2>
                    <div class="divider accent-bg"></div>
                </div>
                <div class="services-grid">
                    <a href="#work-texas" class="service-link">
                        <Reveal class="notch-card">
                            <h3>{"Web Designing"}</h3>
                            <p>
                                {"We craft visually stunning, responsive websites."}
                                <br />
                                <span class="accent see-work">{"See our latest work ↓"}</span>
                            </p>
                        </Reveal>
                    </a>
                    { for SERVICES.iter().enumerate().map(|(index, (title, desc))| html! {
                        <Reveal key={*title} class="notch-card" delay_ms={(index as u32 + 1) * 100}>
                            <h3>{*title}</h3>
                            <p>{*desc}</p>
                        </Reveal>
                    }) }
                </div>
                <Reveal class="services-tagline" delay_ms={300}>
                    <h3>
                        {"Make Your"}<br />
                        {"Online Presence "}<span class="accent">{"Strong"}</span>
                    </h3>
                    <p>{"With HevoraTechnologies"}</p>
                </Reveal>
            </section>

            <section id="works" class="works">
                <div class="works-header">
                    <div>
                        <h2>{"Our Work"}</h2>
                        <div class="divider accent-bg"></div>
                    </div>
                    <p>{"A selection of projects that define our approach to digital excellence."}</p>
                </div>
                <div class="works-grid">
                    <ProjectCard
                        id={Some(AttrValue::Static("work-texas"))}
                        title="Texas Travel"
                        category="Web Design & Development"
                        badge="Featured"
                        description={html! {
                            <>
                                {"A comprehensive travel platform featuring real-time "}
                                <strong>{"Flight Booking"}</strong>{", "}
                                <strong>{"Visa Processing"}</strong>
                                {", and hotel reservations."}
                            </>
                        }}
                        tags={attr_list(&["React", "Tailwind", "API"])}
                        slides={attr_list(TEXAS_SLIDES)}
                        interval_ms={3000}
                        fit={SlideFit::Cover}
                    />
                    <ProjectCard
                        title="RentHouse"
                        category="App Development"
                        badge="Mobile App"
                        description={html! {
                            <>
                                {"A peer-to-peer rental marketplace app featuring "}
                                <strong>{"User KYC"}</strong>{", real-time "}
                                <strong>{"Booking Management"}</strong>
                                {", and secure item listings."}
                            </>
                        }}
                        tags={attr_list(&["React Native", "Node.js", "Firebase"])}
                        slides={attr_list(RENTHOUSE_SLIDES)}
                        interval_ms={3500}
                        fit={SlideFit::Contain}
                    />
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="contact-details">
                    <h2>{"Contact"}</h2>
                    <p class="contact-lead">{"Have a question? Get in touch with our team today."}</p>
                    <div class="contact-lines">
                        <p class="accent site-name">{"hevoratechnologies.in"}</p>
                        { for config::PHONE_NUMBERS.iter().map(|(dial, display)| html! {
                            <a key={*dial} href={format!("tel:{}", dial)} class="phone-link">
                                {"☎ "}{*display}
                            </a>
                        }) }
                    </div>
                    <div class="social-links">
                        <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" class="social-link">
                            {"Instagram"}
                        </a>
                        <a href={config::LINKEDIN_URL} target="_blank" rel="noopener noreferrer" class="social-link">
                            {"LinkedIn"}
                        </a>
                        <a href="#" class="social-link">{"Chat"}</a>
                    </div>
                </div>
                <ContactForm />
            </section>

            <footer class="site-footer">
                {format!("© {} Hevora Technologies. All rights reserved.", year)}
            </footer>
        </main>
    }
}
