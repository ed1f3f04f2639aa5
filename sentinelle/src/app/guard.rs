//! # Route Guard
//!
//! Gates rendering of protected screens on session state and role.
//!
//! The guard never touches the network: it trusts the already-initialized
//! session store. While the store is still rehydrating, the decision is
//! `Loading` so protected content is never rendered early.

use shared::Role;

use crate::app::state::Screen;
use crate::services::session::SessionStatus;

/// What the caller should render for a guarded screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the protected content.
    Allow,
    /// Session still rehydrating: render a loading state.
    Loading,
    /// Not signed in: route to the login screen.
    RequireLogin,
    /// Signed in, but the role is not in the required set: render the
    /// permission-denied view (no redirect).
    Deny,
}

/// Declarative access requirement for a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteGuard {
    require_auth: bool,
    allowed_roles: Option<&'static [Role]>,
}

impl RouteGuard {
    pub const fn public() -> Self {
        RouteGuard {
            require_auth: false,
            allowed_roles: None,
        }
    }

    pub const fn authenticated() -> Self {
        RouteGuard {
            require_auth: true,
            allowed_roles: None,
        }
    }

    pub const fn roles(roles: &'static [Role]) -> Self {
        RouteGuard {
            require_auth: true,
            allowed_roles: Some(roles),
        }
    }

    pub fn evaluate(&self, status: SessionStatus, role: Option<Role>) -> RouteDecision {
        if !self.require_auth {
            return RouteDecision::Allow;
        }
        match status {
            SessionStatus::Rehydrating => RouteDecision::Loading,
            SessionStatus::Unauthenticated => RouteDecision::RequireLogin,
            SessionStatus::Authenticated => match self.allowed_roles {
                None => RouteDecision::Allow,
                Some(allowed) => match role {
                    Some(role) if allowed.contains(&role) => RouteDecision::Allow,
                    _ => RouteDecision::Deny,
                },
            },
        }
    }
}

impl Screen {
    /// Access requirement for this screen.
    pub fn guard(&self) -> RouteGuard {
        match self {
            Screen::Login => RouteGuard::public(),
            Screen::Dashboard
            | Screen::Campaigns
            | Screen::Payments
            | Screen::Spins
            | Screen::Wheel => RouteGuard::authenticated(),
            Screen::Users | Screen::Prizes => RouteGuard::roles(&[Role::Admin]),
        }
    }

    /// Whether the screen should appear in the navigation bar for `role`.
    pub fn visible_for(&self, role: Option<Role>) -> bool {
        match self {
            Screen::Login => false,
            Screen::Users | Screen::Prizes => role == Some(Role::Admin),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_screens_always_render() {
        let guard = RouteGuard::public();
        assert_eq!(
            guard.evaluate(SessionStatus::Rehydrating, None),
            RouteDecision::Allow
        );
        assert_eq!(
            guard.evaluate(SessionStatus::Unauthenticated, None),
            RouteDecision::Allow
        );
    }

    #[test]
    fn protected_screen_never_renders_without_session() {
        let guard = RouteGuard::authenticated();
        assert_eq!(
            guard.evaluate(SessionStatus::Unauthenticated, None),
            RouteDecision::RequireLogin
        );
        assert_eq!(
            guard.evaluate(SessionStatus::Rehydrating, None),
            RouteDecision::Loading
        );
        assert_eq!(
            guard.evaluate(SessionStatus::Authenticated, Some(Role::Member)),
            RouteDecision::Allow
        );
    }

    #[test]
    fn role_mismatch_is_denied_not_redirected() {
        let guard = RouteGuard::roles(&[Role::Admin]);
        assert_eq!(
            guard.evaluate(SessionStatus::Authenticated, Some(Role::Member)),
            RouteDecision::Deny
        );
        assert_eq!(
            guard.evaluate(SessionStatus::Authenticated, None),
            RouteDecision::Deny
        );
        assert_eq!(
            guard.evaluate(SessionStatus::Authenticated, Some(Role::Admin)),
            RouteDecision::Allow
        );
    }

    #[test]
    fn screen_guards_match_roles() {
        assert_eq!(
            Screen::Users.guard().evaluate(SessionStatus::Authenticated, Some(Role::Member)),
            RouteDecision::Deny
        );
        assert_eq!(
            Screen::Wheel.guard().evaluate(SessionStatus::Authenticated, Some(Role::Member)),
            RouteDecision::Allow
        );
        assert_eq!(
            Screen::Login.guard().evaluate(SessionStatus::Unauthenticated, None),
            RouteDecision::Allow
        );
    }

    #[test]
    fn nav_visibility_follows_role() {
        assert!(Screen::Users.visible_for(Some(Role::Admin)));
        assert!(!Screen::Users.visible_for(Some(Role::Member)));
        assert!(Screen::Wheel.visible_for(Some(Role::Member)));
        assert!(!Screen::Login.visible_for(Some(Role::Admin)));
    }
}
