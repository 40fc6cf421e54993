use std::rc::Rc;

use stylist::yew::styled_component;
use yew::prelude::*;

use crate::components::motion::Motion;
use crate::components::presence::Presence;
use crate::content::{MenuItem, SiteContent};
use crate::motion::{presets, AnimationSpec};
use crate::state::{use_scroll_state, MenuAction, MenuState};

/// Overlay rows in the same order as the desktop list, each with its own
/// staggered entrance.
pub fn overlay_entries(items: &[MenuItem]) -> Vec<(&MenuItem, AnimationSpec)> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| (item, presets::mobile_link(index)))
        .collect()
}

#[styled_component(Nav)]
pub fn nav() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let scroll = use_scroll_state();
    let menu = use_reducer_eq(MenuState::default);

    let toggle_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    // No prevent_default: the anchor still scrolls after the close is queued.
    let close_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |_: ()| menu.dispatch(MenuAction::LinkSelected))
    };

    let style = css!(
        r#"
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        z-index: 1000;
        padding: 2rem 0;
        transition: background 0.4s ease, padding 0.4s ease;

        &.scrolled {
            background: rgba(0, 0, 0, 0.92);
            backdrop-filter: blur(12px);
            padding: 1rem 0;
            border-bottom: 1px solid rgba(212, 175, 55, 0.2);
        }

        .nav-content {
            display: flex;
            align-items: center;
            justify-content: space-between;
        }

        .logo {
            color: var(--primary);
            display: flex;
            align-items: baseline;
            gap: 5px;
            text-decoration: none;
            font-weight: 700;
            letter-spacing: 4px;
        }

        .logo-mark {
            font-size: 2rem;
        }

        .nav-links {
            display: flex;
            gap: 3rem;
            list-style: none;
        }

        .nav-links a {
            color: white;
            text-decoration: none;
            font-size: 0.75rem;
            letter-spacing: 3px;
            text-transform: uppercase;
        }

        .nav-links a:hover {
            color: var(--primary);
        }

        .nav-actions {
            display: flex;
            align-items: center;
            gap: 2rem;
        }

        .nav-book-btn {
            padding: 0.8rem 2rem;
            font-size: 0.7rem;
        }

        .mobile-toggle {
            display: none;
            background: none;
            border: none;
            color: white;
            font-size: 2rem;
            cursor: pointer;
        }

        @media (max-width: 900px) {
            .nav-links, .nav-book-btn {
                display: none;
            }
            .mobile-toggle {
                display: block;
            }
        }
        "#
    );

    let is_open = menu.is_open();
    let overlay_millis = presets::mobile_overlay().exit_millis();

    html! {
        <>
            <Motion tag="nav" class={classes!(style, scroll.nav_class())} spec={presets::nav_entrance()}>
                <div class="container nav-content" style="position: relative;">
                    <a href="#" class="logo">
                        <span class="logo-mark">{&content.brand.mark}</span>
                        {&content.brand.name}
                    </a>

                    <ul class="nav-links">
                        { for content.menu.iter().enumerate().map(|(index, item)| html! {
                            <li key={index}>
                                <a href={item.target_anchor.clone()}>{&item.label}</a>
                            </li>
                        }) }
                    </ul>

                    <div class="nav-actions">
                        <button class="btn-lux nav-book-btn">{&content.brand.book_label}</button>
                        <button
                            class="mobile-toggle"
                            aria-label={if is_open { "Close menu" } else { "Open menu" }}
                            aria-expanded={is_open.to_string()}
                            onclick={toggle_menu}
                        >
                            { if is_open { "✕" } else { "☰" } }
                        </button>
                    </div>
                </div>
            </Motion>

            <Presence present={is_open} exit_millis={overlay_millis}>
                <MobileOverlay items={content.menu.clone()} on_select={close_menu} />
            </Presence>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileOverlayProps {
    pub items: Vec<MenuItem>,
    pub on_select: Callback<()>,
}

#[styled_component(MobileOverlay)]
pub fn mobile_overlay(props: &MobileOverlayProps) -> Html {
    let style = css!(
        r#"
        position: fixed;
        inset: 0;
        z-index: 990;
        background: #050505;
        display: flex;
        align-items: center;
        justify-content: center;

        .mobile-links {
            list-style: none;
            text-align: center;
            display: flex;
            flex-direction: column;
            gap: 2.5rem;
        }

        .mobile-links a {
            color: white;
            text-decoration: none;
            font-size: 2rem;
            letter-spacing: 6px;
            text-transform: uppercase;
        }

        .mobile-links a:hover {
            color: var(--primary);
        }
        "#
    );

    html! {
        <Motion class={classes!(style, "mobile-overlay", "open")} spec={presets::mobile_overlay()}>
            <ul class="mobile-links">
                { for overlay_entries(&props.items).into_iter().enumerate().map(|(index, (item, spec))| {
                    let on_select = props.on_select.clone();
                    html! {
                        <Motion key={index} tag="li" spec={spec}>
                            <a
                                href={item.target_anchor.clone()}
                                onclick={Callback::from(move |_: MouseEvent| on_select.emit(()))}
                            >
                                {&item.label}
                            </a>
                        </Motion>
                    }
                }) }
            </ul>
        </Motion>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;

    #[test]
    fn test_overlay_matches_desktop_order() {
        let content = SiteContent::bundled();
        let desktop: Vec<&str> = content.menu.iter().map(|item| item.label.as_str()).collect();
        let overlay: Vec<&str> = overlay_entries(&content.menu)
            .into_iter()
            .map(|(item, _)| item.label.as_str())
            .collect();
        assert_eq!(desktop, overlay);
    }

    #[test]
    fn test_overlay_specs_are_per_item() {
        let content = SiteContent::bundled();
        let entries = overlay_entries(&content.menu);
        let delays: Vec<f64> = entries.iter().map(|(_, spec)| spec.delay_secs).collect();
        assert!(delays.windows(2).all(|pair| pair[1] > pair[0]));
    }

    #[test]
    fn test_open_then_pick_second_link() {
        let content = SiteContent::bundled();
        let menu = MenuState::default().next(MenuAction::Toggle);
        assert!(menu.is_open());

        let rendered = overlay_entries(&content.menu);
        assert_eq!(rendered.len(), content.menu.len());
        assert_eq!(rendered[1].0.label, "Services");

        assert_eq!(menu.next(MenuAction::LinkSelected), MenuState::Closed);
    }
}
