use std::{collections::BTreeMap, path::PathBuf};

use crate::{Res, config};

/// Small string key/value store persisted as JSON.
///
/// Mirrors browser local storage: every write is flushed to disk immediately.
pub struct LocalStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl LocalStorage {
    /// Opens the store at its default location in the local data directory.
    pub async fn load() -> Res<Self> {
        Self::load_from(Self::default_path()).await
    }

    /// Opens the store at `path`. A missing file is an empty store.
    pub async fn load_from(path: impl Into<PathBuf>) -> Res<Self> {
        let path = path.into();
        let items = match async_fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, items })
    }

    /// Value stored under `key`, if any.
    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    /// Stores `value` under `key` and writes the whole store to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the file
    /// cannot be written.
    pub async fn set_item(&mut self, key: &str, value: &str) -> Res<()> {
        self.items.insert(key.to_string(), value.to_string());
        self.persist().await
    }

    async fn persist(&self) -> Res<()> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(&self.items)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    fn default_path() -> PathBuf {
        config::app_dir().join("local-storage.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::load_from(dir.path().join("ls.json"))
            .await
            .unwrap();
        assert_eq!(storage.get_item("anything"), None);
    }

    #[tokio::test]
    async fn items_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/ls.json");

        let mut storage = LocalStorage::load_from(&path).await.unwrap();
        storage.set_item("a", "1").await.unwrap();
        storage.set_item("b", "2").await.unwrap();
        storage.set_item("b", "3").await.unwrap();

        let reloaded = LocalStorage::load_from(&path).await.unwrap();
        assert_eq!(reloaded.get_item("a"), Some("1"));
        assert_eq!(reloaded.get_item("b"), Some("3"));
        assert_eq!(reloaded.get_item("c"), None);
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ls.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(LocalStorage::load_from(&path).await.is_err());
    }
}
