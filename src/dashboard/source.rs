use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    dashboard::aggregate::Snapshot, developers::Developer, projects::Project,
    time_entries::TimeEntry,
};

/// Where the dashboard reads its input from.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn load(&self) -> anyhow::Result<Snapshot>;
}

#[derive(Clone)]
pub struct PgSnapshotSource {
    db: PgPool,
}

impl PgSnapshotSource {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SnapshotSource for PgSnapshotSource {
    async fn load(&self) -> anyhow::Result<Snapshot> {
        let (developers, projects, entries) = tokio::try_join!(
            Developer::list(&self.db),
            Project::list(&self.db),
            TimeEntry::list(&self.db, None),
        )?;
        Ok(Snapshot {
            developers,
            projects,
            entries,
        })
    }
}

/// Fixed snapshot, handed out by value on every load.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct InMemorySnapshots(pub Snapshot);

#[cfg(test)]
#[async_trait]
impl SnapshotSource for InMemorySnapshots {
    async fn load(&self) -> anyhow::Result<Snapshot> {
        Ok(self.0.clone())
    }
}
