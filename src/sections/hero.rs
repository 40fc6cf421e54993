use yew::prelude::*;

use crate::components::motion::Motion;
use crate::content::Hero;
use crate::motion::presets;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: Hero,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    let hero = &props.hero;
    let background = format!(
        "background-image: linear-gradient(rgba(0,0,0,0.8), rgba(0,0,0,0.4), rgba(0,0,0,0.9)), url('{}');",
        hero.poster
    );

    html! {
        <section id="home" class="hero" style={background}>
            <div class="container hero-inner">
                <div class="hero-content">
                    <Motion tag="p" class={classes!("hero-eyebrow")} spec={presets::hero_eyebrow()}>
                        {&hero.eyebrow}
                    </Motion>
                    <Motion tag="h1" class={classes!("font-display")} spec={presets::hero_title()}>
                        <span class="accent">{&hero.title_accent}</span>
                        {" "}
                        {&hero.title}
                    </Motion>
                    <Motion tag="p" class={classes!("hero-artist")} spec={presets::hero_artist()}>
                        {&hero.artist_label}{" "}<strong>{&hero.artist}</strong>
                    </Motion>
                    <Motion class={classes!("hero-actions")} spec={presets::hero_actions()}>
                        { for hero.actions.iter().enumerate().map(|(index, action)| html! {
                            <button
                                key={index}
                                class={classes!("btn-lux", action.outline.then_some("btn-outline"))}
                            >
                                {&action.label}
                            </button>
                        }) }
                    </Motion>
                </div>
            </div>
        </section>
    }
}
