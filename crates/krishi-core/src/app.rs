//! Session and navigation state.
//!
//! One owned value holds the whole session: who is signed in, which view is
//! active, which language is selected. Single writer; no globals.

use krishi_auth::Identity;

use crate::locale::Locale;

/// The feature views reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Chat,
    Diagnose,
    Weather,
    Prices,
    Schemes,
}

/// In-memory application state for one running client.
#[derive(Debug, Clone)]
pub struct AppState {
    identity: Option<Identity>,
    view: View,
    locale: Locale,
}

impl AppState {
    pub fn new(locale: Locale) -> Self {
        Self {
            identity: None,
            view: View::Home,
            locale,
        }
    }

    /// Bind an identity to the session and return to the home view.
    pub fn login(&mut self, identity: Identity) {
        tracing::info!("Session started for {}", identity.display_name());
        self.identity = Some(identity);
        self.view = View::Home;
    }

    /// Drop the identity and return to the home view.
    pub fn logout(&mut self) {
        if let Some(identity) = self.identity.take() {
            tracing::info!("Session ended for {}", identity.display_name());
        }
        self.view = View::Home;
    }

    /// Switch the active view. Ignored while signed out: the auth screen is
    /// the only surface then.
    pub fn navigate(&mut self, view: View) {
        if self.identity.is_some() {
            self.view = view;
        }
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krishi_auth::Profile;

    fn ravi() -> Identity {
        Identity::User(Profile {
            name: "Ravi".to_string(),
            phone: "9876543210".to_string(),
            state: "Telangana".to_string(),
            village: String::new(),
        })
    }

    #[test]
    fn test_login_resets_view() {
        let mut state = AppState::new(Locale::En);
        state.login(ravi());
        state.navigate(View::Prices);
        assert_eq!(state.view(), View::Prices);

        state.login(Identity::Guest);
        assert_eq!(state.view(), View::Home);
        assert!(state.is_authenticated());
    }

    #[test]
    fn test_logout_clears_identity_and_view() {
        let mut state = AppState::new(Locale::En);
        state.login(ravi());
        state.navigate(View::Chat);

        state.logout();
        assert!(!state.is_authenticated());
        assert_eq!(state.view(), View::Home);
        assert!(state.identity().is_none());
    }

    #[test]
    fn test_navigation_requires_identity() {
        let mut state = AppState::new(Locale::En);
        state.navigate(View::Weather);
        assert_eq!(state.view(), View::Home);

        state.login(Identity::Guest);
        state.navigate(View::Weather);
        assert_eq!(state.view(), View::Weather);
    }

    #[test]
    fn test_locale_switch_preserves_session() {
        let mut state = AppState::new(Locale::En);
        state.login(ravi());
        state.navigate(View::Chat);

        state.set_locale(Locale::Te);
        assert_eq!(state.locale(), Locale::Te);
        assert_eq!(state.view(), View::Chat);
        assert!(state.is_authenticated());
    }
}
