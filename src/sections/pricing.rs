use yew::prelude::*;

use crate::content::Pricing;

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub pricing: Pricing,
}

#[function_component(PricingSection)]
pub fn pricing_section(props: &PricingProps) -> Html {
    let pricing = &props.pricing;

    html! {
        <section id="pricing" class="pricing">
            <div class="container">
                <div class="section-heading">
                    <p class="eyebrow">{&pricing.eyebrow}</p>
                    <h2 class="font-display">{&pricing.heading}</h2>
                </div>

                <div class="price-grid">
                    { for pricing.tiers.iter().enumerate().map(|(index, tier)| html! {
                        <div key={index} class="price-card">
                            <h3 class="font-display">{&tier.title}</h3>
                            <p class="price-desc">{&tier.description}</p>
                            <ul class="price-list">
                                { for tier.lines.iter().enumerate().map(|(index, line)| html! {
                                    <li key={index}>
                                        <span>{&line.item}</span>
                                        <span>{&line.price}</span>
                                    </li>
                                }) }
                            </ul>
                            <button class="btn-lux btn-light">{&tier.cta_label}</button>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
