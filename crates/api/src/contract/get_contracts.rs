use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::get_contracts::*;
use enterprise_planner_domain::Contract;
use enterprise_planner_infra::PlannerContext;

pub async fn get_contracts_controller(
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    execute(GetContractsUseCase {}, &ctx)
        .await
        .map(|contracts| HttpResponse::Ok().json(APIResponse::new(contracts)))
        .map_err(|e| match e {
            UseCaseError::StorageError => PlannerError::InternalError,
        })
}

#[derive(Debug)]
struct GetContractsUseCase {}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetContractsUseCase {
    type Response = Vec<Contract>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetContracts";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .contracts
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
