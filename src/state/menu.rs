use std::rc::Rc;

use yew::prelude::*;

/// Open/closed state of the mobile navigation overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// The burger/close button was activated.
    Toggle,
    /// A menu link was activated.
    LinkSelected,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn next(self, action: MenuAction) -> Self {
        match (self, action) {
            (MenuState::Closed, MenuAction::Toggle) => MenuState::Open,
            (MenuState::Open, MenuAction::Toggle) => MenuState::Closed,
            (_, MenuAction::LinkSelected) => MenuState::Closed,
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.next(action);
        if next == *self {
            return self;
        }
        log::debug!("menu {:?} -> {:?} on {:?}", *self, next, action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for start in [MenuState::Closed, MenuState::Open] {
            assert_eq!(start.next(MenuAction::Toggle).next(MenuAction::Toggle), start);
        }
    }

    #[test]
    fn test_link_always_closes() {
        assert_eq!(MenuState::Open.next(MenuAction::LinkSelected), MenuState::Closed);
        assert_eq!(MenuState::Closed.next(MenuAction::LinkSelected), MenuState::Closed);
    }

    #[test]
    fn test_reducer_keeps_rc_when_unchanged() {
        let closed = Rc::new(MenuState::Closed);
        let same = closed.clone().reduce(MenuAction::LinkSelected);
        assert!(Rc::ptr_eq(&closed, &same));

        let open = closed.reduce(MenuAction::Toggle);
        assert!(open.is_open());
    }
}
