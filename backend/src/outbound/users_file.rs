//! Loader for the configured login directory.
//!
//! The file is a JSON array of entries:
//!
//! ```json
//! [{"id": "1", "name": "Admin User", "email": "admin@example.com",
//!   "image": null, "salt": "64656d6f", "passwordSha256": "..."}]
//! ```
//!
//! `passwordSha256` is the hex SHA-256 of the salt bytes followed by the
//! password.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::ports::DemoUserDirectory;
use crate::domain::{DemoUser, PasswordDigest, PasswordDigestError, SessionUser};

/// Errors raised while loading a users file.
#[derive(Debug, Error)]
pub enum UserFileError {
    /// The file or its directory could not be read.
    #[error("failed to read users file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The contents were not a JSON array of user entries.
    #[error("users file {path} is not valid: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// An entry carried an undecodable salt or digest.
    #[error("user {email} has an invalid password digest: {source}")]
    Digest {
        email: String,
        #[source]
        source: PasswordDigestError,
    },
    /// The file held no users, which would lock everyone out.
    #[error("users file {path} lists no users")]
    Empty { path: String },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct UserFileEntry {
    id: String,
    name: String,
    email: String,
    #[serde(default)]
    image: Option<String>,
    salt: String,
    password_sha256: String,
}

impl TryFrom<UserFileEntry> for DemoUser {
    type Error = UserFileError;

    fn try_from(entry: UserFileEntry) -> Result<Self, Self::Error> {
        let digest =
            PasswordDigest::from_hex(&entry.salt, &entry.password_sha256).map_err(|source| {
                UserFileError::Digest {
                    email: entry.email.clone(),
                    source,
                }
            })?;
        Ok(Self {
            profile: SessionUser {
                id: entry.id,
                name: entry.name,
                email: entry.email,
                image: entry.image,
            },
            digest,
        })
    }
}

/// Parse a users file body.
pub fn parse_users(contents: &str, path: &str) -> Result<DemoUserDirectory, UserFileError> {
    let entries: Vec<UserFileEntry> =
        serde_json::from_str(contents).map_err(|source| UserFileError::Parse {
            path: path.to_owned(),
            source,
        })?;
    if entries.is_empty() {
        return Err(UserFileError::Empty {
            path: path.to_owned(),
        });
    }
    let users = entries
        .into_iter()
        .map(DemoUser::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DemoUserDirectory::new(users))
}

/// Read and parse the users file at `path`.
pub fn load_users(path: &Utf8Path) -> Result<DemoUserDirectory, UserFileError> {
    let read_error = |source| UserFileError::Read {
        path: path.to_string(),
        source,
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "users path must be a file",
        ))
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir.read_to_string(file_name).map_err(read_error)?;
    parse_users(&contents, path.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::LoginService;
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use serde_json::json;

    fn entry_json(email: &str, salt: &[u8], password: &str) -> serde_json::Value {
        let digest = PasswordDigest::derive(salt, password);
        json!({
            "id": "7",
            "name": "Registrar",
            "email": email,
            "image": null,
            "salt": digest.salt_hex(),
            "passwordSha256": digest.digest_hex(),
        })
    }

    #[rstest]
    #[tokio::test]
    async fn loaded_users_can_log_in() {
        let temp = tempfile::tempdir().expect("temp dir");
        let path = Utf8PathBuf::from_path_buf(temp.path().join("users.json")).expect("utf-8 path");
        let body = json!([entry_json("registrar@example.com", b"salt-7", "s3cret!!")]);
        std::fs::write(&path, body.to_string()).expect("write users file");

        let directory = load_users(&path).expect("load users");
        assert_eq!(directory.len(), 1);
        let user = directory
            .authorize("registrar@example.com", "s3cret!!")
            .await
            .expect("configured user authenticates");
        assert_eq!(user.id, "7");
        assert_eq!(user.image, None);
    }

    #[rstest]
    fn missing_file_is_a_read_error() {
        let temp = tempfile::tempdir().expect("temp dir");
        let path = Utf8PathBuf::from_path_buf(temp.path().join("absent.json")).expect("utf-8 path");
        assert!(matches!(load_users(&path), Err(UserFileError::Read { .. })));
    }

    #[rstest]
    #[case("[]", "lists no users")]
    #[case("{\"id\": 1}", "is not valid")]
    fn unusable_bodies_are_rejected(#[case] body: &str, #[case] fragment: &str) {
        let err = parse_users(body, "users.json").expect_err("must fail");
        assert!(err.to_string().contains(fragment), "{err}");
    }

    #[rstest]
    fn bad_digest_names_the_user() {
        let body = json!([{
            "id": "9",
            "name": "Broken",
            "email": "broken@example.com",
            "salt": "00",
            "passwordSha256": "zz",
        }]);
        let err = parse_users(&body.to_string(), "users.json").expect_err("must fail");
        assert!(matches!(err, UserFileError::Digest { ref email, .. } if email == "broken@example.com"));
    }
}
