//! Driving port for credential checks.
//!
//! Inbound adapters call [`LoginService::authorize`] with whatever the login
//! form submitted; implementations own the shape check, the lookup and the
//! password comparison so handlers never see password material.

use async_trait::async_trait;

use crate::domain::{AuthError, DemoUser, LoginCredentials, PasswordDigest, SessionUser};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate `email`/`password` and return the identity to store in the
    /// session.
    async fn authorize(&self, email: &str, password: &str) -> Result<SessionUser, AuthError>;
}

const DEMO_PASSWORD: &str = "password@123";

/// Fixed set of users with salted password digests.
///
/// [`DemoUserDirectory::default`] holds the two demo accounts, both using
/// the password `password@123`; [`DemoUserDirectory::new`] accepts a list
/// loaded from configuration.
#[derive(Debug, Clone)]
pub struct DemoUserDirectory {
    users: Vec<DemoUser>,
}

impl DemoUserDirectory {
    pub fn new(users: Vec<DemoUser>) -> Self {
        Self { users }
    }

    /// Number of users the directory knows.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for DemoUserDirectory {
    fn default() -> Self {
        Self::new(vec![
            DemoUser {
                profile: SessionUser {
                    id: "1".into(),
                    name: "Admin User".into(),
                    email: "admin@example.com".into(),
                    image: Some(
                        "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=250&auto=format&fit=crop"
                            .into(),
                    ),
                },
                digest: PasswordDigest::derive(b"demo-admin", DEMO_PASSWORD),
            },
            DemoUser {
                profile: SessionUser {
                    id: "2".into(),
                    name: "Test User".into(),
                    email: "user@example.com".into(),
                    image: Some("https://ui-avatars.com/api/?name=Test+User".into()),
                },
                digest: PasswordDigest::derive(b"demo-user", DEMO_PASSWORD),
            },
        ])
    }
}

#[async_trait]
impl LoginService for DemoUserDirectory {
    async fn authorize(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        let credentials = LoginCredentials::try_from_parts(email, password)?;
        let user = self
            .users
            .iter()
            .find(|user| user.profile.email == credentials.email())
            .ok_or(AuthError::UserNotFound)?;
        if user.digest.verify(credentials.password()) {
            Ok(user.profile.clone())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
