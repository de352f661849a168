use super::IMaintenanceRepo;
use crate::repos::shared::inmemory_repo::*;
use enterprise_planner_domain::{MaintenanceRecord, ID};

pub struct InMemoryMaintenanceRepo {
    records: std::sync::Mutex<Vec<MaintenanceRecord>>,
}

impl InMemoryMaintenanceRepo {
    pub fn new() -> Self {
        Self {
            records: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IMaintenanceRepo for InMemoryMaintenanceRepo {
    async fn insert(&self, record: &MaintenanceRecord) -> anyhow::Result<()> {
        insert(record, &self.records);
        Ok(())
    }

    async fn save(&self, record: &MaintenanceRecord) -> anyhow::Result<()> {
        save(record, &self.records);
        Ok(())
    }

    async fn find(&self, record_id: &ID) -> anyhow::Result<Option<MaintenanceRecord>> {
        Ok(find(record_id, &self.records))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<MaintenanceRecord>> {
        let mut records = find_all(&self.records);
        records.sort_by_key(|r| (r.next_maintenance.is_none(), r.next_maintenance));
        Ok(records)
    }

    async fn delete(&self, record_id: &ID) -> anyhow::Result<Option<MaintenanceRecord>> {
        Ok(delete(record_id, &self.records))
    }
}
