use crate::{APIResponse, BaseClient, ID};
use enterprise_planner_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ContractClient {
    base: Arc<BaseClient>,
}

pub type CreateContractInput = create_contract::RequestBody;

pub struct UpdateContractInput {
    pub contract_id: ID,
    pub update: update_contract::RequestBody,
}

impl ContractClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateContractInput) -> APIResponse<create_contract::APIResponse> {
        self.base
            .post(input, "contracts".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_contracts::APIResponse> {
        self.base.get("contracts".into(), StatusCode::OK).await
    }

    pub async fn update(&self, input: UpdateContractInput) -> APIResponse<update_contract::APIResponse> {
        self.base
            .put(
                input.update,
                format!("contracts/{}", input.contract_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, contract_id: &ID) -> APIResponse<delete_contract::APIResponse> {
        self.base
            .delete(format!("contracts/{}", contract_id), StatusCode::OK)
            .await
    }
}
