use yew::prelude::*;

use crate::components::motion::Motion;
use crate::content::Services;
use crate::motion::presets;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub services: Services,
}

#[function_component(ServicesSection)]
pub fn services_section(props: &ServicesProps) -> Html {
    let services = &props.services;

    html! {
        <section id="services" class="services">
            <div class="container">
                <Motion class={classes!("section-heading")} spec={presets::reveal_up(0.0)}>
                    <p class="eyebrow">{&services.eyebrow}</p>
                    <h2 class="font-display">{&services.heading}</h2>
                    <div class="divider"></div>
                </Motion>

                <div class="service-grid">
                    { for services.cards.iter().enumerate().map(|(index, card)| html! {
                        <Motion key={index} class={classes!("service-card")} spec={presets::service_card(index)}>
                            <img src={card.image.clone()} alt={card.title.clone()} loading="lazy" />
                            <div class="service-shade"></div>
                            <div class="service-info">
                                <p class="service-tag">{&card.tag}</p>
                                <h3 class="font-display">{&card.title}</h3>
                                <p class="service-desc">{&card.description}</p>
                                <button class="text-link">{&services.cta_label}{" →"}</button>
                            </div>
                        </Motion>
                    }) }
                </div>
            </div>
        </section>
    }
}
