use std::rc::Rc;

use stylist::yew::styled_component;
use yew::prelude::*;

use crate::components::motion::Motion;
use crate::content::SiteContent;
use crate::error::UiError;
use crate::motion::presets;

/// Opens `url` in a new browsing context. The host decides what that means.
pub fn open_in_new_context(url: &str) -> Result<(), UiError> {
    let window = web_sys::window().ok_or(UiError::NoWindow)?;
    window
        .open_with_url_and_target(url, "_blank")
        .map_err(|err| UiError::open(url, err))?;
    Ok(())
}

/// Messaging shortcut pinned to the bottom-right corner.
#[styled_component(FloatingWhatsApp)]
pub fn floating_whatsapp() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();

    let style = css!(
        r#"
        position: fixed;
        bottom: 30px;
        right: 30px;
        z-index: 9999;

        a {
            background: #25D366;
            color: white;
            width: 60px;
            height: 60px;
            border-radius: 50%;
            display: flex;
            align-items: center;
            justify-content: center;
            box-shadow: 0 10px 25px rgba(37, 211, 102, 0.4);
            text-decoration: none;
            font-size: 1.8rem;
            transition: transform 0.2s ease;
        }

        a:hover {
            transform: scale(1.1);
        }
        "#
    );

    html! {
        <Motion class={classes!(style)} spec={presets::floating_action()}>
            <a
                href={content.contact.whatsapp_link.clone()}
                target="_blank"
                rel="noopener noreferrer"
                aria-label="WhatsApp"
            >
                {"✆"}
            </a>
        </Motion>
    }
}
