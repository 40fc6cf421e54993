use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Provided to everything under a [`Presence`]. `exiting` is set once the
/// presence has been asked to leave but is still mounted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PresenceState {
    pub exiting: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresenceEvent {
    Present(bool),
    /// The removal scheduled for `generation` has waited out the exit.
    RemovalDue(u32),
}

/// Whether a presence's children are rendered. Every change of `present`
/// bumps `generation`, so a removal scheduled before a re-open is stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visibility {
    mounted: bool,
    exiting: bool,
    generation: u32,
}

impl Visibility {
    pub fn new(present: bool) -> Self {
        Self {
            mounted: present,
            exiting: false,
            generation: 0,
        }
    }

    pub fn mounted(&self) -> bool {
        self.mounted
    }

    pub fn exiting(&self) -> bool {
        self.exiting
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn next(self, event: PresenceEvent) -> Self {
        match event {
            PresenceEvent::Present(true) if !self.mounted || self.exiting => Self {
                mounted: true,
                exiting: false,
                generation: self.generation.wrapping_add(1),
            },
            PresenceEvent::Present(false) if self.mounted && !self.exiting => Self {
                mounted: true,
                exiting: true,
                generation: self.generation.wrapping_add(1),
            },
            PresenceEvent::RemovalDue(generation)
                if self.exiting && generation == self.generation =>
            {
                Self {
                    mounted: false,
                    exiting: false,
                    generation: self.generation,
                }
            }
            _ => self,
        }
    }
}

impl Reducible for Visibility {
    type Action = PresenceEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.next(action);
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct PresenceProps {
    pub present: bool,
    /// How long children keep rendering after `present` turns false.
    pub exit_millis: u32,
    #[prop_or_default]
    pub children: Children,
}

/// Mounts its children while `present`, and keeps them mounted for
/// `exit_millis` afterwards so their exit transitions can finish.
#[function_component(Presence)]
pub fn presence(props: &PresenceProps) -> Html {
    let visibility = use_reducer_eq(|| Visibility::new(props.present));

    {
        let dispatcher = visibility.dispatcher();
        use_effect_with_deps(
            move |present: &bool| {
                dispatcher.dispatch(PresenceEvent::Present(*present));
                || ()
            },
            props.present,
        );
    }

    {
        // Dropping the timeout on teardown cancels a removal still in flight.
        let dispatcher = visibility.dispatcher();
        let exit_millis = props.exit_millis;
        use_effect_with_deps(
            move |(exiting, generation): &(bool, u32)| {
                let generation = *generation;
                let removal = exiting.then(|| {
                    Timeout::new(exit_millis, move || {
                        dispatcher.dispatch(PresenceEvent::RemovalDue(generation));
                    })
                });
                move || drop(removal)
            },
            (visibility.exiting(), visibility.generation()),
        );
    }

    if !visibility.mounted() {
        return html! {};
    }

    let state = PresenceState {
        exiting: visibility.exiting(),
    };

    html! {
        <ContextProvider<PresenceState> context={state}>
            { for props.children.iter() }
        </ContextProvider<PresenceState>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(start: Visibility, events: &[PresenceEvent]) -> Visibility {
        events.iter().fold(start, |state, event| state.next(*event))
    }

    #[test]
    fn test_starts_from_present_flag() {
        assert!(!Visibility::new(false).mounted());
        assert!(Visibility::new(true).mounted());
        assert!(!Visibility::new(true).exiting());
    }

    #[test]
    fn test_stays_mounted_until_removal_due() {
        let open = Visibility::new(false).next(PresenceEvent::Present(true));
        let closing = open.next(PresenceEvent::Present(false));
        assert!(closing.mounted());
        assert!(closing.exiting());

        let removed = closing.next(PresenceEvent::RemovalDue(closing.generation()));
        assert!(!removed.mounted());
        assert!(!removed.exiting());
    }

    #[test]
    fn test_reopen_during_exit_cancels_removal() {
        let closing = run(
            Visibility::new(false),
            &[PresenceEvent::Present(true), PresenceEvent::Present(false)],
        );
        let scheduled = closing.generation();

        let reopened = closing.next(PresenceEvent::Present(true));
        assert!(reopened.mounted());
        assert!(!reopened.exiting());

        // The removal timed for the earlier close lands after the re-open.
        let after = reopened.next(PresenceEvent::RemovalDue(scheduled));
        assert_eq!(after, reopened);
        assert!(after.mounted());
    }

    #[test]
    fn test_repeated_present_is_stable() {
        let open = Visibility::new(true);
        assert_eq!(open.next(PresenceEvent::Present(true)), open);

        let closing = open.next(PresenceEvent::Present(false));
        assert_eq!(closing.next(PresenceEvent::Present(false)), closing);
    }

    #[test]
    fn test_removal_ignored_while_present() {
        let open = Visibility::new(true);
        assert_eq!(open.next(PresenceEvent::RemovalDue(open.generation())), open);
    }
}
