/// Open/closed state of a menu item and its panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

/// What happened to a menu item, as seen by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTrigger {
    PointerEnter,
    PointerLeave,
    FocusIn,
    /// Focus left the item for a node inside its own subtree
    FocusMovedInside,
    /// Focus left the item for a node outside it, or for nothing at all
    FocusMovedOutside,
}

impl Disclosure {
    /// State after `trigger`. Transitions are immediate, there is no debounce.
    pub fn after(self, trigger: MenuTrigger) -> Disclosure {
        match trigger {
            MenuTrigger::PointerEnter | MenuTrigger::FocusIn => Disclosure::Open,
            MenuTrigger::PointerLeave | MenuTrigger::FocusMovedOutside => Disclosure::Closed,
            MenuTrigger::FocusMovedInside => self,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Disclosure::Closed => "closed",
            Disclosure::Open => "open",
        }
    }
}

impl std::fmt::Display for Disclosure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nesting level of a bound item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuLevel {
    /// Entry of the header bar, owns a dropdown panel centered under its link
    TopLevel,
    /// Entry inside a dropdown panel, owns a panel opening sideways
    Submenu,
}

impl MenuLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuLevel::TopLevel => "top-level",
            MenuLevel::Submenu => "submenu",
        }
    }
}
