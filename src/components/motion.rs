use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

use crate::components::presence::PresenceState;
use crate::config::MOUNT_TICK_MS;
use crate::motion::{AnimationSpec, Playback, PlaybackEvent, Trigger, ViewportWatch};

#[derive(Properties, PartialEq)]
pub struct MotionProps {
    pub spec: AnimationSpec,
    #[prop_or(AttrValue::Static("div"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    /// Static declarations appended after the animated ones.
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Renders `tag` and drives it through its [`AnimationSpec`].
#[function_component(Motion)]
pub fn motion(props: &MotionProps) -> Html {
    let node = use_node_ref();
    let playback = use_reducer_eq({
        let spec = props.spec.clone();
        move || Playback::new(&spec)
    });
    let exiting = use_context::<PresenceState>()
        .map(|presence| presence.exiting)
        .unwrap_or(false);

    {
        let dispatcher = playback.dispatcher();
        let node = node.clone();
        let trigger = props.spec.trigger;
        use_effect_with_deps(
            move |_| {
                let mut tick = None;
                let mut watch = None;

                match trigger {
                    Trigger::OnMount => {
                        tick = Some(Timeout::new(MOUNT_TICK_MS, move || {
                            dispatcher.dispatch(PlaybackEvent::Mounted);
                        }));
                    }
                    Trigger::OnViewportEnter => {
                        let on_change = {
                            let dispatcher = dispatcher.clone();
                            Callback::from(move |visible: bool| {
                                dispatcher.dispatch(PlaybackEvent::Intersection(visible));
                            })
                        };
                        let observed = node
                            .cast::<Element>()
                            .ok_or_else(|| "element not mounted".to_string())
                            .and_then(|element| {
                                ViewportWatch::observe(&element, on_change)
                                    .map_err(|err| err.to_string())
                            });
                        match observed {
                            Ok(w) => watch = Some(w),
                            Err(reason) => {
                                log::warn!("revealing without viewport signal: {}", reason);
                                dispatcher.dispatch(PlaybackEvent::ObserverUnavailable);
                            }
                        }
                    }
                }

                move || {
                    drop(tick);
                    drop(watch);
                }
            },
            (),
        );
    }

    {
        let dispatcher = playback.dispatcher();
        use_effect_with_deps(
            move |exiting: &bool| {
                dispatcher.dispatch(if *exiting {
                    PlaybackEvent::Exit
                } else {
                    PlaybackEvent::Restore
                });
                || ()
            },
            exiting,
        );
    }

    let style = format!(
        "{}{}",
        playback.style(&props.spec),
        props.style.as_deref().unwrap_or("")
    );

    html! {
        <@{props.tag.to_string()}
            ref={node}
            id={props.id.clone()}
            class={props.class.clone()}
            style={style}
            data-phase={playback.phase().as_str()}
        >
            { for props.children.iter() }
        </@>
    }
}
