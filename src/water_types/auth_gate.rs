use thiserror::Error;

pub const LOGIN_ROUTE: &str = "/login";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("Not signed in, redirecting to {to}")]
    Redirect { to: &'static str },
}

/// Answers whether the current request carries a signed-in session.
pub trait SessionProvider {
    fn has_session(&self) -> bool;
}

/// Guards pages that need a signed-in station owner.
pub fn require_session<S: SessionProvider + ?Sized>(sessions: &S) -> Result<(), AccessError> {
    if sessions.has_session() {
        Ok(())
    } else {
        tracing::debug!("No session, redirecting to login");
        Err(AccessError::Redirect { to: LOGIN_ROUTE })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(bool);

    impl SessionProvider for Fixed {
        fn has_session(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_redirects_without_session() {
        assert_eq!(require_session(&Fixed(true)), Ok(()));
        assert_eq!(require_session(&Fixed(false)), Err(AccessError::Redirect { to: "/login" }));
    }
}
