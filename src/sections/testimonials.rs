use yew::prelude::*;

use crate::content::Testimonials;
use crate::state::Carousel;

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub testimonials: Testimonials,
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section(props: &TestimonialsProps) -> Html {
    let entries = &props.testimonials.entries;
    let carousel = use_state_eq(|| Carousel::new(entries.len()));

    let prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.prev()))
    };
    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.next()))
    };

    html! {
        <section id="testimonials" class="testimonials light">
            <div class="container two-column">
                <div>
                    <p class="eyebrow">{&props.testimonials.eyebrow}</p>
                    <h2 class="font-display">{&props.testimonials.heading}</h2>
                    <div class="carousel-controls">
                        <button class="round-btn" aria-label="Previous" onclick={prev}>{"←"}</button>
                        <button class="round-btn" aria-label="Next" onclick={next}>{"→"}</button>
                    </div>
                </div>
                <div>
                    {
                        if let Some(entry) = entries.get(carousel.index()) {
                            html! {
                                <div class="testimonial-card">
                                    <p class="testimonial-quote">{format!("\"{}\"", entry.quote)}</p>
                                    <div>
                                        <p class="testimonial-author">{&entry.author}</p>
                                        <p class="testimonial-role">{&entry.role}</p>
                                    </div>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </section>
    }
}
