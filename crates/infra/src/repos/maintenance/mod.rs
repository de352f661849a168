mod inmemory;
mod sqlite;

use enterprise_planner_domain::{MaintenanceRecord, ID};
pub use inmemory::InMemoryMaintenanceRepo;
pub use sqlite::SqliteMaintenanceRepo;

#[async_trait::async_trait]
pub trait IMaintenanceRepo: Send + Sync {
    async fn insert(&self, record: &MaintenanceRecord) -> anyhow::Result<()>;
    async fn save(&self, record: &MaintenanceRecord) -> anyhow::Result<()>;
    async fn find(&self, record_id: &ID) -> anyhow::Result<Option<MaintenanceRecord>>;
    /// All records, the ones due first come first
    async fn find_all(&self) -> anyhow::Result<Vec<MaintenanceRecord>>;
    async fn delete(&self, record_id: &ID) -> anyhow::Result<Option<MaintenanceRecord>>;
}
