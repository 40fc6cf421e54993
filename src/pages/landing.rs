use std::rc::Rc;

use yew::prelude::*;

use crate::components::whatsapp::FloatingWhatsApp;
use crate::content::{Section, SiteContent, VariantKind};
use crate::sections::{
    academy::AcademySection, contact::ContactFooter, hero::HeroSection,
    pricing::PricingSection, services::ServicesSection, testimonials::TestimonialsSection,
};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub variant: VariantKind,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let variant = content.variant(props.variant);

    // Start at the top on first render
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let render_section = |section: &Section| -> Html {
        match section {
            Section::Hero => html! { <HeroSection hero={content.hero.clone()} /> },
            Section::Services => html! { <ServicesSection services={content.services.clone()} /> },
            Section::Academy => html! { <AcademySection academy={content.academy.clone()} /> },
            Section::Pricing => html! { <PricingSection pricing={content.pricing.clone()} /> },
            Section::Testimonials => html! {
                <TestimonialsSection testimonials={content.testimonials.clone()} />
            },
            Section::Contact => html! {
                <ContactFooter
                    brand={content.brand.clone()}
                    contact={content.contact.clone()}
                    copyright={variant.copyright.clone()}
                />
            },
        }
    };

    html! {
        <div class="app">
            { for variant.sections.iter().map(render_section) }
            <FloatingWhatsApp />
            <style>
                {r#"
.container {
    width: 100%;
    max-width: 1280px;
    margin: 0 auto;
    padding: 0 2rem;
}

.font-display {
    font-family: 'Playfair Display', serif;
}

.eyebrow {
    color: var(--primary);
    letter-spacing: 5px;
    margin-bottom: 1rem;
}

.btn-lux {
    background: var(--primary);
    color: black;
    border: 1px solid var(--primary);
    padding: 1.1rem 2.8rem;
    font-size: 0.8rem;
    font-weight: 700;
    letter-spacing: 3px;
    cursor: pointer;
    transition: all 0.3s ease;
}

.btn-lux:hover {
    background: transparent;
    color: var(--primary);
}

.btn-outline {
    background: transparent;
    color: var(--primary);
}

.btn-dark {
    background: black;
    color: white;
}

.btn-light {
    width: 100%;
    background: white;
    color: black;
}

.light {
    background: white;
    color: black;
}

.hero {
    min-height: 100vh;
    display: flex;
    align-items: center;
    background-size: cover;
    background-position: center;
    text-align: center;
}

.hero-inner {
    position: relative;
    z-index: 2;
}

.hero-eyebrow {
    color: #FFD700;
    font-weight: bold;
}

.hero h1 {
    font-size: clamp(3rem, 8vw, 7rem);
    color: white;
}

.hero .accent {
    color: var(--primary);
}

.hero-artist {
    letter-spacing: 2px;
    color: white;
    font-size: 1.5rem;
    margin-bottom: 2rem;
}

.hero-actions {
    display: flex;
    gap: 1.5rem;
    justify-content: center;
    margin-top: 2rem;
    flex-wrap: wrap;
}

.services {
    padding: 10rem 0;
    background: #050505;
}

.section-heading {
    text-align: center;
    margin-bottom: 6rem;
}

.section-heading h2 {
    font-size: 4rem;
    color: white;
}

.divider {
    width: 80px;
    height: 2px;
    background: var(--primary);
    margin: 2rem auto;
}

.service-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 2rem;
}

.service-card {
    position: relative;
    height: 600px;
    overflow: hidden;
}

.service-card img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.service-shade {
    position: absolute;
    inset: 0;
    background: linear-gradient(to bottom, rgba(0,0,0,0.1), rgba(0,0,0,0.8));
}

.service-info {
    position: absolute;
    bottom: 0;
    padding: 3rem;
}

.service-tag {
    color: var(--primary);
    letter-spacing: 4px;
    font-size: 0.7rem;
    font-weight: bold;
    margin-bottom: 1rem;
}

.service-info h3 {
    font-size: 2.5rem;
    margin-bottom: 1rem;
    color: white;
}

.service-desc {
    color: rgba(255,255,255,0.7);
    margin-bottom: 2rem;
    font-size: 0.9rem;
    line-height: 1.6;
}

.text-link {
    background: none;
    border: none;
    color: var(--primary);
    font-weight: 700;
    cursor: pointer;
    padding: 0;
    font-size: 0.8rem;
    letter-spacing: 2px;
}

.academy, .testimonials, .pricing {
    padding: 10rem 0;
}

.stats {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 4rem;
}

.stat-number {
    font-size: 4rem;
    font-weight: 700;
    color: var(--primary);
}

.stat-label {
    letter-spacing: 3px;
    font-size: 0.8rem;
    font-weight: 600;
}

.academy-detail, .two-column {
    margin-top: 8rem;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 6rem;
    align-items: center;
}

.academy-detail h2, .testimonials h2 {
    font-size: 4rem;
    line-height: 1;
    margin-bottom: 2rem;
}

.academy-body {
    color: #555;
    font-size: 1.2rem;
    margin-bottom: 2rem;
}

.course-list {
    list-style: none;
    margin-bottom: 3rem;
}

.course-list li {
    padding: 0.8rem 0;
    display: flex;
    align-items: center;
    gap: 15px;
    border-bottom: 1px solid #eee;
}

.dot {
    width: 8px;
    height: 8px;
    background: var(--primary);
    border-radius: 50%;
}

.academy-image {
    width: 100%;
    border-radius: 20px;
    box-shadow: 0 30px 60px rgba(0,0,0,0.1);
}

.pricing {
    background: #0a0a0a;
}

.pricing h2 {
    font-size: 3.5rem;
}

.price-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(350px, 1fr));
    gap: 4rem;
}

.price-card {
    border: 1px solid #222;
    padding: 4rem;
}

.price-card h3 {
    font-size: 2rem;
    color: var(--primary);
    margin-bottom: 1rem;
}

.price-desc {
    color: #666;
    font-size: 0.9rem;
}

.price-list {
    list-style: none;
    margin: 2.5rem 0;
}

.price-list li {
    display: flex;
    justify-content: space-between;
    padding: 1rem 0;
    border-bottom: 1px dashed #333;
}

.testimonials .two-column {
    margin-top: 0;
}

.carousel-controls {
    display: flex;
    gap: 1rem;
}

.round-btn {
    padding: 1rem;
    border: 1px solid #ddd;
    border-radius: 50%;
    background: none;
    cursor: pointer;
}

.testimonial-quote {
    font-size: 1.6rem;
    font-style: italic;
    margin-bottom: 2rem;
}

.testimonial-author {
    font-weight: 700;
    font-size: 1.2rem;
}

.testimonial-role {
    color: var(--primary);
    font-size: 0.8rem;
    letter-spacing: 2px;
}

.contact {
    background: black;
    color: white;
    padding: 10rem 0 4rem;
    border-top: 1px solid #222;
}

.footer-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 4rem;
    margin-bottom: 6rem;
}

.footer-logo {
    color: var(--primary);
    font-size: 2.5rem;
    margin-bottom: 1rem;
}

.footer-logo .logo-mark {
    font-size: 3.5rem;
}

.footer-tagline {
    color: #FFD700;
    letter-spacing: 2px;
    font-weight: bold;
}

.footer-socials {
    display: flex;
    gap: 1.5rem;
    margin-top: 2rem;
    justify-content: inherit;
}

.social {
    font-size: 1.5rem;
    cursor: pointer;
}

.hover-primary:hover {
    color: var(--primary);
}

.footer-section h4 {
    margin-bottom: 2rem;
    font-size: 1.5rem;
    color: var(--primary);
}

.footer-list {
    list-style: none;
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    color: #ccc;
}

.footer-list li {
    display: flex;
    gap: 15px;
}

.address-line {
    display: block;
}

.icon {
    color: var(--primary);
}

.muted {
    color: #ccc;
    margin-bottom: 1.5rem;
}

.footer-email {
    font-size: 1.1rem;
    margin-bottom: 2rem;
}

.footer-cta {
    width: 100%;
    max-width: 400px;
}

.copyright {
    text-align: center;
    border-top: 1px solid #222;
    padding-top: 4rem;
    color: #444;
    font-size: 0.8rem;
}

@media (max-width: 768px) {
    .section-heading h2, .academy-detail h2, .testimonials h2 {
        font-size: 2.6rem;
    }
    .footer-grid {
        text-align: center;
    }
    .footer-list li {
        justify-content: center;
    }
}
                "#}
            </style>
        </div>
    }
}
