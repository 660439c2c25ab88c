//! Authentication primitives: login credentials, password digests and the
//! session identity issued on success.
//!
//! Credential shape is checked here, before any user lookup, so a malformed
//! request is rejected without touching the user directory.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use utoipa::ToSchema;
use zeroize::Zeroizing;

/// Shortest password the login form accepts.
pub const PASSWORD_MIN_LEN: usize = 6;

/// Message shown for both unknown users and wrong passwords so callers
/// cannot tell which part was wrong.
pub const INVALID_LOGIN_MESSAGE: &str = "Invalid email or password";
/// Message shown when the submitted credentials are malformed.
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid credentials format";

/// Reasons submitted credentials fail the shape check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Email is not of the form `local@domain.tld`.
    InvalidEmail,
    /// Password is shorter than [`PASSWORD_MIN_LEN`] characters.
    PasswordTooShort { min: usize },
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail => write!(f, "email must be a valid address"),
            Self::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters")
            }
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Failure modes of [`crate::domain::ports::LoginService::authorize`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Credentials failed the shape check; no lookup happened.
    #[error("invalid credentials format: {0}")]
    InvalidFormat(LoginValidationError),
    /// No user has the submitted email.
    #[error("user not found")]
    UserNotFound,
    /// The user exists but the password does not match.
    #[error("password mismatch")]
    InvalidCredentials,
}

impl AuthError {
    /// Message safe to show the person logging in.
    ///
    /// [`AuthError::UserNotFound`] and [`AuthError::InvalidCredentials`]
    /// share one message.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidFormat(_) => INVALID_FORMAT_MESSAGE,
            Self::UserNotFound | Self::InvalidCredentials => INVALID_LOGIN_MESSAGE,
        }
    }
}

impl From<LoginValidationError> for AuthError {
    fn from(value: LoginValidationError) -> Self {
        Self::InvalidFormat(value)
    }
}

/// Shape-checked login credentials.
///
/// ## Invariants
/// - `email` is trimmed and looks like `local@domain.tld`.
/// - `password` has at least [`PASSWORD_MIN_LEN`] characters and keeps any
///   whitespace the caller typed.
///
/// # Examples
/// ```
/// use student_portal::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" admin@example.com ", "password@123")
///     .expect("well-formed");
/// assert_eq!(creds.email(), "admin@example.com");
/// assert!(LoginCredentials::try_from_parts("bad-email", "short").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Validate raw email and password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let email = email.trim();
        if !is_well_formed_email(email) {
            return Err(LoginValidationError::InvalidEmail);
        }
        if password.chars().count() < PASSWORD_MIN_LEN {
            return Err(LoginValidationError::PasswordTooShort {
                min: PASSWORD_MIN_LEN,
            });
        }
        Ok(Self {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Whether `email` has the shape `local@domain.tld`.
///
/// No whitespace, exactly one `@`, a non-empty local part and a dotted
/// domain without empty labels.
///
/// # Examples
///
/// ```
/// use student_portal::domain::is_well_formed_email;
///
/// assert!(is_well_formed_email("jane@example.com"));
/// assert!(!is_well_formed_email("jane@example."));
/// ```
pub fn is_well_formed_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Identity carried by an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SessionUser {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Admin User")]
    pub name: String,
    #[schema(example = "admin@example.com")]
    pub email: String,
    pub image: Option<String>,
}

/// Errors raised while decoding a stored [`PasswordDigest`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordDigestError {
    /// Salt or digest was not valid hex.
    #[error("{field} is not valid hex")]
    InvalidHex { field: &'static str },
    /// Digest was not 32 bytes long.
    #[error("digest must be 32 bytes, got {length}")]
    WrongLength { length: usize },
}

/// Salted SHA-256 password digest: `sha256(salt || password)`.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    salt: Vec<u8>,
    digest: [u8; 32],
}

impl PasswordDigest {
    /// Digest `password` under `salt`.
    pub fn derive(salt: &[u8], password: &str) -> Self {
        Self {
            salt: salt.to_vec(),
            digest: salted_sha256(salt, password),
        }
    }

    /// Decode a digest stored as hex strings.
    pub fn from_hex(salt: &str, digest: &str) -> Result<Self, PasswordDigestError> {
        let salt =
            hex::decode(salt).map_err(|_| PasswordDigestError::InvalidHex { field: "salt" })?;
        let bytes = hex::decode(digest).map_err(|_| PasswordDigestError::InvalidHex {
            field: "passwordSha256",
        })?;
        let digest: [u8; 32] =
            bytes
                .as_slice()
                .try_into()
                .map_err(|_| PasswordDigestError::WrongLength {
                    length: bytes.len(),
                })?;
        Ok(Self { salt, digest })
    }

    /// Compare `password` against the digest without short-circuiting on the
    /// first differing byte.
    pub fn verify(&self, password: &str) -> bool {
        let candidate = salted_sha256(&self.salt, password);
        candidate
            .iter()
            .zip(self.digest.iter())
            .fold(0_u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }

    /// Hex-encoded salt, as written to user files.
    pub fn salt_hex(&self) -> String {
        hex::encode(&self.salt)
    }

    /// Hex-encoded digest, as written to user files.
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordDigest").finish_non_exhaustive()
    }
}

fn salted_sha256(salt: &[u8], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

/// Directory entry: a session identity plus its password digest.
#[derive(Debug, Clone)]
pub struct DemoUser {
    pub profile: SessionUser,
    pub digest: PasswordDigest,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("bad-email", "password@123", LoginValidationError::InvalidEmail)]
    #[case("a@b", "password@123", LoginValidationError::InvalidEmail)]
    #[case("@example.com", "password@123", LoginValidationError::InvalidEmail)]
    #[case("a b@example.com", "password@123", LoginValidationError::InvalidEmail)]
    #[case("a@@example.com", "password@123", LoginValidationError::InvalidEmail)]
    #[case("a@example..com", "password@123", LoginValidationError::InvalidEmail)]
    #[case("admin@example.com", "short", LoginValidationError::PasswordTooShort { min: 6 })]
    #[case("bad-email", "short", LoginValidationError::InvalidEmail)]
    fn malformed_credentials_are_rejected(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: LoginValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(email, password)
            .expect_err("malformed inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn password_whitespace_is_preserved() {
        let creds = LoginCredentials::try_from_parts("user@example.com", "  secret  ")
            .expect("well-formed");
        assert_eq!(creds.password(), "  secret  ");
    }

    #[rstest]
    fn lookup_failures_share_one_message() {
        assert_eq!(
            AuthError::UserNotFound.user_message(),
            AuthError::InvalidCredentials.user_message()
        );
        assert_ne!(
            AuthError::from(LoginValidationError::InvalidEmail).user_message(),
            INVALID_LOGIN_MESSAGE
        );
    }

    #[rstest]
    fn digest_verifies_only_the_original_password() {
        let digest = PasswordDigest::derive(b"pepper", "password@123");
        assert!(digest.verify("password@123"));
        assert!(!digest.verify("password@124"));
    }

    #[rstest]
    fn digest_survives_hex_round_trip() {
        let digest = PasswordDigest::derive(b"salt", "hunter22");
        let decoded =
            PasswordDigest::from_hex(&digest.salt_hex(), &digest.digest_hex()).expect("decode");
        assert!(decoded.verify("hunter22"));
    }

    #[rstest]
    #[case("zz", "00", PasswordDigestError::InvalidHex { field: "salt" })]
    #[case("00", "abcd", PasswordDigestError::WrongLength { length: 2 })]
    fn malformed_hex_is_rejected(
        #[case] salt: &str,
        #[case] digest: &str,
        #[case] expected: PasswordDigestError,
    ) {
        assert_eq!(PasswordDigest::from_hex(salt, digest), Err(expected));
    }
}
