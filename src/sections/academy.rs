use yew::prelude::*;

use crate::components::motion::Motion;
use crate::content::Academy;
use crate::motion::presets;

#[derive(Properties, PartialEq)]
pub struct AcademyProps {
    pub academy: Academy,
}

#[function_component(AcademySection)]
pub fn academy_section(props: &AcademyProps) -> Html {
    let academy = &props.academy;

    html! {
        <section id="academy" class="academy light">
            <div class="container">
                <div class="stats">
                    { for academy.stats.iter().enumerate().map(|(index, stat)| html! {
                        <div key={index} class="stat-item">
                            <p class="stat-number">{&stat.value}</p>
                            <p class="stat-label">{&stat.label}</p>
                        </div>
                    }) }
                </div>

                <div class="academy-detail">
                    <Motion spec={presets::reveal_side(-30.0)}>
                        <h2 class="font-display">{&academy.heading}</h2>
                        <p class="academy-body">{&academy.body}</p>
                        <ul class="course-list">
                            { for academy.courses.iter().enumerate().map(|(index, course)| html! {
                                <li key={index}>
                                    <span class="dot"></span>
                                    {course}
                                </li>
                            }) }
                        </ul>
                        <button class="btn-lux btn-dark">{&academy.cta_label}</button>
                    </Motion>
                    <Motion spec={presets::reveal_side(30.0)}>
                        <img class="academy-image" src={academy.image.clone()} alt="Training" loading="lazy" />
                    </Motion>
                </div>
            </div>
        </section>
    }
}
