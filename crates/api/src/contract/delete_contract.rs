use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::delete_contract::*;
use enterprise_planner_domain::{Contract, ID};
use enterprise_planner_infra::PlannerContext;

fn handle_error(e: UseCaseError) -> PlannerError {
    match e {
        UseCaseError::NotFound(contract_id) => PlannerError::NotFound(format!(
            "The contract with id: {}, was not found.",
            contract_id
        )),
        UseCaseError::StorageError => PlannerError::InternalError,
    }
}

pub async fn delete_contract_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let usecase = DeleteContractUseCase {
        contract_id: path.contract_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|contract| HttpResponse::Ok().json(APIResponse::new(contract)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct DeleteContractUseCase {
    pub contract_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteContractUseCase {
    type Response = Contract;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteContract";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.contracts.delete(&self.contract_id).await {
            Ok(Some(contract)) => Ok(contract),
            Ok(None) => Err(UseCaseError::NotFound(self.contract_id.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
