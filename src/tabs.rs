// Tab Selector
// The single piece of mutable state in the system: which of the three
// tabbed datasets is currently displayed.

use std::fmt;
use std::str::FromStr;

/// Active tab of the content panel.
///
/// A closed three-value enumeration, so dataset dispatch can be matched
/// exhaustively with no fallback branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// "What I Built" - the projects dataset (initial tab)
    #[default]
    Built,
    /// "What I Learnt" - the learnings dataset
    Learnt,
    /// "What I Taught" - the teachings dataset
    Taught,
}

impl Tab {
    /// All tabs in display order
    pub const ALL: [Tab; 3] = [Tab::Built, Tab::Learnt, Tab::Taught];

    pub fn next(&self) -> Self {
        match self {
            Tab::Built => Tab::Learnt,
            Tab::Learnt => Tab::Taught,
            Tab::Taught => Tab::Built,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Tab::Built => Tab::Taught,
            Tab::Learnt => Tab::Built,
            Tab::Taught => Tab::Learnt,
        }
    }

    /// Button label shown in the tab control
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Built => "What I Built",
            Tab::Learnt => "What I Learnt",
            Tab::Taught => "What I Taught",
        }
    }

    /// Stable identifier used in query parameters and element ids
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Built => "built",
            Tab::Learnt => "learnt",
            Tab::Taught => "taught",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "built" => Ok(Tab::Built),
            "learnt" => Ok(Tab::Learnt),
            "taught" => Ok(Tab::Taught),
            other => Err(format!("unknown tab: {}", other)),
        }
    }
}

/// Page-lifetime state: holds the active tab and nothing else.
///
/// Switching tabs is the only mutation the page performs; it cannot fail
/// and needs no teardown.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageState {
    active_tab: Tab,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_is_built() {
        assert_eq!(Tab::default(), Tab::Built);
        assert_eq!(PageState::new().active_tab(), Tab::Built);
    }

    #[test]
    fn test_next_cycles_through_all_tabs() {
        assert_eq!(Tab::Built.next(), Tab::Learnt);
        assert_eq!(Tab::Learnt.next(), Tab::Taught);
        assert_eq!(Tab::Taught.next(), Tab::Built);
    }

    #[test]
    fn test_previous_is_inverse_of_next() {
        for tab in Tab::ALL {
            assert_eq!(tab.next().previous(), tab);
            assert_eq!(tab.previous().next(), tab);
        }
    }

    #[test]
    fn test_parse_round_trips_as_str() {
        for tab in Tab::ALL {
            assert_eq!(tab.as_str().parse::<Tab>().unwrap(), tab);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert!("".parse::<Tab>().is_err());
        assert!("BUILT".parse::<Tab>().is_err());
        assert!("projects".parse::<Tab>().is_err());
    }

    #[test]
    fn test_set_tab_updates_state() {
        let mut state = PageState::new();

        state.set_tab(Tab::Taught);
        assert_eq!(state.active_tab(), Tab::Taught);

        state.set_tab(Tab::Built);
        assert_eq!(state.active_tab(), Tab::Built);
    }

    #[test]
    fn test_titles_are_distinct() {
        assert_ne!(Tab::Built.title(), Tab::Learnt.title());
        assert_ne!(Tab::Learnt.title(), Tab::Taught.title());
        assert_ne!(Tab::Taught.title(), Tab::Built.title());
    }
}
