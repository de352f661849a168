use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::get_certificates::*;
use enterprise_planner_domain::Certificate;
use enterprise_planner_infra::PlannerContext;

pub async fn get_certificates_controller(
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    execute(GetCertificatesUseCase {}, &ctx)
        .await
        .map(|certificates| HttpResponse::Ok().json(APIResponse::new(certificates)))
        .map_err(|e| match e {
            UseCaseError::StorageError => PlannerError::InternalError,
        })
}

#[derive(Debug)]
struct GetCertificatesUseCase {}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCertificatesUseCase {
    type Response = Vec<Certificate>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCertificates";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .certificates
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
