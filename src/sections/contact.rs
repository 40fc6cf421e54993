use yew::prelude::*;

use crate::components::whatsapp::open_in_new_context;
use crate::content::{Brand, Contact};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub brand: Brand,
    pub contact: Contact,
    pub copyright: String,
}

#[function_component(ContactFooter)]
pub fn contact_footer(props: &ContactProps) -> Html {
    let ContactProps { brand, contact, copyright } = props;

    let message_now = {
        let link = contact.whatsapp_link.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(err) = open_in_new_context(&link) {
                log::warn!("{}", err);
            }
        })
    };

    html! {
        <footer id="contact" class="contact">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-section">
                        <h2 class="logo footer-logo">
                            <span class="logo-mark">{&brand.mark}</span>
                            {&brand.name}
                        </h2>
                        <p class="footer-tagline">{&brand.tagline}</p>
                        <div class="footer-socials">
                            { for contact.socials.iter().enumerate().map(|(index, social)| html! {
                                <span
                                    key={index}
                                    class="social hover-primary"
                                    role="img"
                                    aria-label={social.name.clone()}
                                    title={social.name.clone()}
                                >
                                    {&social.glyph}
                                </span>
                            }) }
                        </div>
                    </div>

                    <div class="footer-section">
                        <h4 class="font-display">{&contact.visit_heading}</h4>
                        <ul class="footer-list">
                            <li>
                                <span class="icon">{"⌖"}</span>
                                <span>
                                    { for contact.address_lines.iter().enumerate().map(|(index, line)| html! {
                                        <span key={index} class="address-line">{line}</span>
                                    }) }
                                </span>
                            </li>
                            <li><span class="icon">{"✆"}</span>{&contact.phone_display}</li>
                            <li><span class="icon">{"◷"}</span>{&contact.hours}</li>
                        </ul>
                    </div>

                    <div class="footer-section">
                        <h4 class="font-display">{&contact.touch_heading}</h4>
                        <p class="muted">{&contact.enquiry_label}</p>
                        <p class="footer-email">{&contact.email}</p>
                        <button class="btn-lux footer-cta" onclick={message_now}>
                            {&contact.cta_label}
                        </button>
                    </div>
                </div>
                <div class="copyright">
                    <p>{copyright}</p>
                </div>
            </div>
        </footer>
    }
}
