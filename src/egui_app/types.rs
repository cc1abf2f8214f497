/**
 * Shared Types Module
 *
 * Screens of the desktop app and the result of a navigation check.
 */

/// Current app view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Login screen
    Login,
    /// User administration dashboard
    Dashboard,
}

impl View {
    /// Views that need a signed-in user
    pub fn requires_auth(self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

/// Outcome of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Show the requested view
    Allow(View),
    /// Show this view instead
    Redirect(View),
}

impl Navigation {
    /// The view that ends up on screen
    pub fn view(self) -> View {
        match self {
            Self::Allow(view) | Self::Redirect(view) => view,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_auth() {
        assert!(!View::Login.requires_auth());
        assert!(View::Dashboard.requires_auth());
    }

    #[test]
    fn test_navigation_view() {
        assert_eq!(Navigation::Allow(View::Dashboard).view(), View::Dashboard);
        assert_eq!(Navigation::Redirect(View::Login).view(), View::Login);
    }
}
