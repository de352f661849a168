use super::IContractRepo;
use crate::repos::shared::inmemory_repo::*;
use enterprise_planner_domain::{Contract, ID};

pub struct InMemoryContractRepo {
    contracts: std::sync::Mutex<Vec<Contract>>,
}

impl InMemoryContractRepo {
    pub fn new() -> Self {
        Self {
            contracts: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IContractRepo for InMemoryContractRepo {
    async fn insert(&self, contract: &Contract) -> anyhow::Result<()> {
        insert(contract, &self.contracts);
        Ok(())
    }

    async fn save(&self, contract: &Contract) -> anyhow::Result<()> {
        save(contract, &self.contracts);
        Ok(())
    }

    async fn find(&self, contract_id: &ID) -> anyhow::Result<Option<Contract>> {
        Ok(find(contract_id, &self.contracts))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Contract>> {
        let mut contracts = find_all(&self.contracts);
        contracts.sort_by_key(|c| (c.end_date.is_none(), c.end_date));
        Ok(contracts)
    }

    async fn delete(&self, contract_id: &ID) -> anyhow::Result<Option<Contract>> {
        Ok(delete(contract_id, &self.contracts))
    }
}
