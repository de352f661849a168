use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::delete_certificate::*;
use enterprise_planner_domain::{Certificate, ID};
use enterprise_planner_infra::PlannerContext;

fn handle_error(e: UseCaseError) -> PlannerError {
    match e {
        UseCaseError::NotFound(certificate_id) => PlannerError::NotFound(format!(
            "The certificate with id: {}, was not found.",
            certificate_id
        )),
        UseCaseError::StorageError => PlannerError::InternalError,
    }
}

pub async fn delete_certificate_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let usecase = DeleteCertificateUseCase {
        certificate_id: path.certificate_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|certificate| HttpResponse::Ok().json(APIResponse::new(certificate)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct DeleteCertificateUseCase {
    pub certificate_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteCertificateUseCase {
    type Response = Certificate;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteCertificate";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.certificates.delete(&self.certificate_id).await {
            Ok(Some(certificate)) => Ok(certificate),
            Ok(None) => Err(UseCaseError::NotFound(self.certificate_id.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
