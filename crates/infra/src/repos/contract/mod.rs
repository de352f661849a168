mod inmemory;
mod sqlite;

use enterprise_planner_domain::{Contract, ID};
pub use inmemory::InMemoryContractRepo;
pub use sqlite::SqliteContractRepo;

#[async_trait::async_trait]
pub trait IContractRepo: Send + Sync {
    async fn insert(&self, contract: &Contract) -> anyhow::Result<()>;
    async fn save(&self, contract: &Contract) -> anyhow::Result<()>;
    async fn find(&self, contract_id: &ID) -> anyhow::Result<Option<Contract>>;
    /// All contracts, the ones ending first come first
    async fn find_all(&self) -> anyhow::Result<Vec<Contract>>;
    async fn delete(&self, contract_id: &ID) -> anyhow::Result<Option<Contract>>;
}

#[cfg(test)]
mod tests {
    use crate::repos::tests::create_contexts;
    use chrono::{NaiveDate, Utc};
    use enterprise_planner_domain::Contract;

    #[tokio::test]
    async fn create_list_and_delete() {
        for ctx in create_contexts().await {
            let mut contract = Contract::new(
                "Leasing Stapler".into(),
                "Fördertechnik Nord".into(),
                "Leasing".into(),
                Utc::now(),
            );
            contract.start_date = NaiveDate::from_ymd_opt(2022, 1, 1);
            contract.end_date = NaiveDate::from_ymd_opt(2025, 12, 31);
            contract.cancelation_period = Some("3 Monate".into());

            ctx.repos.contracts.insert(&contract).await.unwrap();

            let contracts = ctx.repos.contracts.find_all().await.unwrap();
            assert_eq!(contracts.len(), 1);
            assert_eq!(contracts[0].partner, "Fördertechnik Nord");
            assert_eq!(contracts[0].end_date, contract.end_date);
            assert_eq!(contracts[0].cancelation_period.as_deref(), Some("3 Monate"));
            assert_eq!(contracts[0].reminder_days(), 90);

            let res = ctx.repos.contracts.delete(&contract.id).await.unwrap();
            assert_eq!(res.map(|c| c.id), Some(contract.id.clone()));
            assert!(ctx.repos.contracts.find_all().await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn find_and_save() {
        for ctx in create_contexts().await {
            let mut contract = Contract::new(
                "Wartung Tore".into(),
                "Torbau Süd".into(),
                "Wartung".into(),
                Utc::now(),
            );
            contract.end_date = NaiveDate::from_ymd_opt(2025, 12, 31);
            ctx.repos.contracts.insert(&contract).await.unwrap();

            contract.end_date = NaiveDate::from_ymd_opt(2024, 6, 30);
            contract.reminder_days = Some(30);
            contract.notes = Some("verlängert".into());
            ctx.repos.contracts.save(&contract).await.unwrap();

            let stored = ctx.repos.contracts.find(&contract.id).await.unwrap().unwrap();
            assert_eq!(stored.end_date, contract.end_date);
            assert_eq!(stored.reminder_days(), 30);
            assert_eq!(stored.notes.as_deref(), Some("verlängert"));
            assert!(ctx.repos.contracts.find(&Default::default()).await.unwrap().is_none());
        }
    }
}
