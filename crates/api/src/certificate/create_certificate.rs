use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::create_certificate::*;
use enterprise_planner_domain::Certificate;
use enterprise_planner_infra::PlannerContext;

fn handle_error(e: UseCaseError) -> PlannerError {
    match e {
        UseCaseError::EmptyName => {
            PlannerError::BadClientData("The name of the certificate is required".into())
        }
        UseCaseError::NegativeReminderDays(days) => PlannerError::BadClientData(format!(
            "Reminder days can not be negative, got: {}",
            days
        )),
        UseCaseError::StorageError => PlannerError::InternalError,
    }
}

pub async fn create_certificate_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let body = body.0;
    let mut certificate = Certificate::new(body.name.trim().to_string(), ctx.sys.now());
    certificate.issuer = body.issuer;
    certificate.issued_date = body.issued_date;
    certificate.certificate_type = body.certificate_type;
    certificate.expiry_date = body.expiry_date;
    certificate.reminder_days = body.reminder_days;
    certificate.description = body.description;

    execute(CreateCertificateUseCase { certificate }, &ctx)
        .await
        .map(|certificate| HttpResponse::Created().json(APIResponse::new(certificate)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct CreateCertificateUseCase {
    pub certificate: Certificate,
}

#[derive(Debug)]
enum UseCaseError {
    EmptyName,
    NegativeReminderDays(i64),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateCertificateUseCase {
    type Response = Certificate;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateCertificate";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        if self.certificate.name.is_empty() {
            return Err(UseCaseError::EmptyName);
        }
        match self.certificate.reminder_days {
            Some(days) if days < 0 => return Err(UseCaseError::NegativeReminderDays(days)),
            _ => (),
        }

        ctx.repos
            .certificates
            .insert(&self.certificate)
            .await
            .map(|_| self.certificate.clone())
            .map_err(|_| UseCaseError::StorageError)
    }
}
