// Page navigation.
// Exactly one of the four pages is visible at a time; Escape walks back.

/// The four pages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Compose,
    Browse,
    Detail,
}

impl Page {
    /// Title shown in the header bar.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Compose => "New Note",
            Page::Browse => "Notes",
            Page::Detail => "Note",
        }
    }

    /// The page Escape returns to.
    pub fn back(&self) -> Self {
        match self {
            Page::Home => Page::Home,
            Page::Compose => Page::Home,
            Page::Browse => Page::Home,
            Page::Detail => Page::Browse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_targets() {
        assert_eq!(Page::Home.back(), Page::Home);
        assert_eq!(Page::Compose.back(), Page::Home);
        assert_eq!(Page::Browse.back(), Page::Home);
        assert_eq!(Page::Detail.back(), Page::Browse);
    }
}
