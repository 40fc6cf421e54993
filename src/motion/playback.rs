use std::rc::Rc;

use yew::prelude::*;

use super::spec::{AnimationSpec, Trigger};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Rendered at the spec's initial state, waiting for its trigger.
    Initial,
    /// Transitioning to (or resting at) the target state.
    Entered,
    /// Reversing to the initial state before removal.
    Exiting,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Initial => "initial",
            Phase::Entered => "entered",
            Phase::Exiting => "exiting",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackEvent {
    Mounted,
    Intersection(bool),
    /// No viewport signal can be had; the element must still become visible.
    ObserverUnavailable,
    Exit,
    /// The owning presence came back before the exit finished.
    Restore,
}

/// Playback state of one animated element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playback {
    trigger: Trigger,
    repeat: bool,
    exit: bool,
    phase: Phase,
    plays: u32,
}

impl Playback {
    pub fn new(spec: &AnimationSpec) -> Self {
        Self {
            trigger: spec.trigger,
            repeat: spec.repeat,
            exit: spec.exit,
            phase: Phase::Initial,
            plays: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of times the entrance transition has started.
    pub fn plays(&self) -> u32 {
        self.plays
    }

    /// Returns the next state, or `None` when the event changes nothing.
    pub fn next(&self, event: PlaybackEvent) -> Option<Self> {
        if self.phase == Phase::Exiting {
            return match event {
                PlaybackEvent::Restore => Some(Self {
                    phase: Phase::Entered,
                    ..self.clone()
                }),
                _ => None,
            };
        }

        match event {
            PlaybackEvent::Mounted => {
                if self.trigger == Trigger::OnMount && self.plays == 0 {
                    Some(self.enter())
                } else {
                    None
                }
            }
            PlaybackEvent::Intersection(visible) => {
                if self.trigger != Trigger::OnViewportEnter {
                    return None;
                }
                match (visible, self.phase) {
                    (true, Phase::Initial) if self.repeat || self.plays == 0 => Some(self.enter()),
                    (false, Phase::Entered) if self.repeat => Some(Self {
                        phase: Phase::Initial,
                        ..self.clone()
                    }),
                    _ => None,
                }
            }
            PlaybackEvent::ObserverUnavailable => {
                if self.phase == Phase::Initial {
                    Some(self.enter())
                } else {
                    None
                }
            }
            PlaybackEvent::Exit => {
                if self.exit {
                    Some(Self {
                        phase: Phase::Exiting,
                        ..self.clone()
                    })
                } else {
                    None
                }
            }
            PlaybackEvent::Restore => None,
        }
    }

    fn enter(&self) -> Self {
        Self {
            phase: Phase::Entered,
            plays: self.plays + 1,
            ..self.clone()
        }
    }

    /// Inline style for the current phase of `spec`.
    pub fn style(&self, spec: &AnimationSpec) -> String {
        match self.phase {
            Phase::Initial => spec.initial.to_css(),
            Phase::Entered => format!("{}{}", spec.target.to_css(), spec.enter_transition()),
            Phase::Exiting => format!("{}{}", spec.initial.to_css(), spec.exit_transition()),
        }
    }
}

impl Reducible for Playback {
    type Action = PlaybackEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.next(action) {
            Some(next) => {
                log::debug!(
                    "playback {:?} -> {:?} on {:?} (plays: {})",
                    self.phase,
                    next.phase,
                    action,
                    next.plays()
                );
                Rc::new(next)
            }
            None => self,
        }
    }
}
