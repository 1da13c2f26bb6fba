//! JSON file storage implementation.
//!
//! Stores goals as `goals/<id>.json` and shelves as `shelves/<slug>.json`
//! under a root directory.

use std::path::{Path, PathBuf};
use bookgoal_core::{GoalId, ReadingGoal, Shelf, ShelfName};
use super::{Storage, Result};
use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::debug;

/// File-based JSON storage backend.
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Create storage, making the `goals/` and `shelves/` directories if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        fs::create_dir_all(root.join("goals")).await?;
        fs::create_dir_all(root.join("shelves")).await?;

        debug!("Opened JSON storage at {}", root.display());
        Ok(Self { root })
    }

    fn goal_path(&self, id: GoalId) -> PathBuf {
        self.root.join("goals").join(format!("{}.json", id))
    }

    fn shelf_path(&self, name: ShelfName) -> PathBuf {
        self.root.join("shelves").join(format!("{}.json", name))
    }
}

#[async_trait::async_trait]
impl Storage for JsonStorage {
    async fn save_goal(&mut self, goal: &ReadingGoal) -> Result<()> {
        let json = serde_json::to_string_pretty(goal)?;
        fs::write(self.goal_path(goal.id), json.as_bytes()).await?;
        Ok(())
    }

    async fn list_goals(&self) -> Result<Vec<ReadingGoal>> {
        let mut goals = list_dir(&self.root.join("goals")).await?;
        goals.sort_by(|a: &ReadingGoal, b| a.created_at.cmp(&b.created_at));
        Ok(goals)
    }

    async fn delete_goal(&mut self, id: GoalId) -> Result<()> {
        fs::remove_file(self.goal_path(id)).await.or_else(|e| {
            if e.kind() == std::io::ErrorKind::NotFound { Ok(()) } else { Err(e) }
        })?;
        Ok(())
    }

    async fn save_shelf(&mut self, shelf: &Shelf) -> Result<()> {
        let json = serde_json::to_string_pretty(shelf)?;
        fs::write(self.shelf_path(shelf.name), json.as_bytes()).await?;
        Ok(())
    }

    async fn load_shelf(&self, name: ShelfName) -> Result<Option<Shelf>> {
        read_json(&self.shelf_path(name)).await
    }

    async fn list_shelves(&self) -> Result<Vec<Shelf>> {
        let mut shelves = list_dir(&self.root.join("shelves")).await?;
        shelves.sort_by_key(|s: &Shelf| ShelfName::ALL.iter().position(|n| *n == s.name));
        Ok(shelves)
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(s) => Ok(Some(serde_json::from_str(&s)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn list_dir<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>> {
    let mut items = Vec::new();
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let s = fs::read_to_string(&path).await?;
        items.push(serde_json::from_str(&s)?);
    }
    Ok(items)
}
