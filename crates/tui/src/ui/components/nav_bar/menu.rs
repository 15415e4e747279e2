/// Open/closed state of the compact navigation menu.
///
/// Closed on every mount. Only user actions change it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Flips the state.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        };
    }

    /// Closes the menu; closing a closed menu is a no-op.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
    }

    #[test]
    fn toggle_is_an_involution() {
        for start in [MenuState::Closed, MenuState::Open] {
            let mut state = start;
            state.toggle();
            assert_ne!(state, start);
            state.toggle();
            assert_eq!(state, start);
        }
    }

    #[test]
    fn close_from_any_state_ends_closed() {
        let mut state = MenuState::Open;
        state.close();
        assert!(!state.is_open());
        state.close();
        assert_eq!(state, MenuState::Closed);
    }
}
