use std::{fs, path::Path};

use crate::{
    client::PortalClient,
    error::{AgentError, Result},
};

/// Reads the license key, ignoring surrounding whitespace.
pub fn read_key(path: &Path) -> Result<String> {
    let key = fs::read_to_string(path)?.trim().to_string();

    if key.is_empty() {
        return Err(AgentError::EmptyKey(path.to_path_buf()));
    }

    Ok(key)
}

/// Replaces the key in `key_path` when the portal reports a started replacement.
///
/// Returns whether the key was replaced.
pub async fn exchange_license(client: &PortalClient, key_path: &Path) -> Result<bool> {
    let old = read_key(key_path)?;

    let check = client.check_license(&old).await?;
    if !check.exist {
        tracing::info!("No replacement for license {}", old);
        return Ok(false);
    }

    fs::write(key_path, &check.key)?;

    let status = client.confirm_license(&old, &check.key, true).await?;
    tracing::info!("Replaced license {} with {}: {}", old, check.key, status);

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn trims_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.txt");
        fs::write(&path, "  LIC-42\r\n").unwrap();

        assert_eq!(read_key(&path).unwrap(), "LIC-42");
    }

    #[test]
    fn empty_key_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.txt");
        fs::write(&path, "\n").unwrap();

        assert!(matches!(read_key(&path), Err(AgentError::EmptyKey(_))));
    }

    #[tokio::test]
    async fn replaces_key_and_confirms() {
        let server = MockServer::start();
        let check = server.mock(|when, then| {
            when.method(POST)
                .path("/licenses/license-heartbeat")
                .body_contains("key=ALT-1");
            then.status(200)
                .json_body(serde_json::json!({ "exist": true, "key": "NEU-2" }));
        });
        let save = server.mock(|when, then| {
            when.method(POST)
                .path("/licenses/license-heartbeat/save")
                .body_contains("old=ALT-1")
                .body_contains("new=NEU-2")
                .body_contains("new_exists=true");
            then.status(200)
                .json_body(serde_json::json!({ "status": "Lizenz ersetzt." }));
        });

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.txt");
        fs::write(&path, "ALT-1\n").unwrap();
        let client = PortalClient::new(&server.base_url()).unwrap();

        let replaced = exchange_license(&client, &path).await.unwrap();

        assert!(replaced);
        check.assert();
        save.assert();
        assert_eq!(fs::read_to_string(&path).unwrap(), "NEU-2");
    }

    #[tokio::test]
    async fn keeps_key_without_replacement() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/licenses/license-heartbeat");
            then.status(200)
                .json_body(serde_json::json!({ "exist": false, "key": "" }));
        });
        let save = server.mock(|when, then| {
            when.method(POST).path("/licenses/license-heartbeat/save");
            then.status(200)
                .json_body(serde_json::json!({ "status": "Keine Änderung." }));
        });

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.txt");
        fs::write(&path, "ALT-1").unwrap();
        let client = PortalClient::new(&server.base_url()).unwrap();

        let replaced = exchange_license(&client, &path).await.unwrap();

        assert!(!replaced);
        save.assert_hits(0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "ALT-1");
    }
}
