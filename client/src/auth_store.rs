use std::fs::OpenOptions;
#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;
use crate::error::Result;

/// On-disk credential file. Holds the short-lived bearer token, the
/// long-lived refresh token, and the time of the last rotation.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct AuthDotJson {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_refresh: Option<DateTime<Utc>>,
}

impl AuthDotJson {
    /// Record a rotated bearer credential, stamping the rotation time.
    pub fn rotate_access_token(&mut self, access_token: String) {
        self.access_token = access_token;
        self.last_refresh = Some(Utc::now());
    }
}

/// Read and deserialize the auth file at the given path.
pub fn try_read_auth_json(auth_file: &Path) -> Result<AuthDotJson> {
    let contents = std::fs::read_to_string(auth_file).map_err(|source| Error::AuthRead {
        path: auth_file.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| Error::AuthParse {
        path: auth_file.to_path_buf(),
        source,
    })
}

/// Write the auth file, owner-readable only on Unix.
pub fn write_auth_json(auth_file: &Path, auth: &AuthDotJson) -> Result<()> {
    let json_data = serde_json::to_string_pretty(auth).map_err(|source| Error::AuthParse {
        path: auth_file.to_path_buf(),
        source,
    })?;
    let mut options = OpenOptions::new();
    options.truncate(true).write(true).create(true);
    #[cfg(unix)]
    {
        options.mode(0o600);
    }
    let written: std::io::Result<()> = (|| {
        use std::io::Write as _;
        let mut file = options.open(auth_file)?;
        file.write_all(json_data.as_bytes())?;
        file.flush()
    })();
    written.map_err(|source| Error::AuthWrite {
        path: auth_file.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    #[expect(clippy::unwrap_used)]
    fn auth_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth.json");
        let auth = AuthDotJson {
            access_token: "bearer-abc".to_string(),
            refresh_token: "refresh-xyz".to_string(),
            last_refresh: None,
        };
        write_auth_json(&path, &auth).unwrap();
        assert_eq!(try_read_auth_json(&path).unwrap(), auth);
    }

    #[test]
    fn missing_auth_file_is_a_read_error() {
        let err = try_read_auth_json(Path::new("/definitely/not/here/auth.json"));
        assert!(matches!(err, Err(Error::AuthRead { .. })));
    }

    #[test]
    #[expect(clippy::unwrap_used)]
    fn malformed_auth_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            try_read_auth_json(&path),
            Err(Error::AuthParse { .. })
        ));
    }

    #[test]
    fn rotation_stamps_last_refresh() {
        let mut auth = AuthDotJson {
            access_token: "old".to_string(),
            refresh_token: "r".to_string(),
            last_refresh: None,
        };
        auth.rotate_access_token("new".to_string());
        assert_eq!(auth.access_token, "new");
        assert!(auth.last_refresh.is_some());
    }
}
