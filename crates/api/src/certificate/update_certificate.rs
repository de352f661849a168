use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::update_certificate::*;
use enterprise_planner_domain::{Certificate, ID};
use enterprise_planner_infra::PlannerContext;

fn handle_error(e: UseCaseError) -> PlannerError {
    match e {
        UseCaseError::NotFound(certificate_id) => PlannerError::NotFound(format!(
            "The certificate with id: {}, was not found.",
            certificate_id
        )),
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

pub async fn update_certificate_controller(
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let usecase = UpdateCertificateUseCase {
        certificate_id: path.certificate_id.clone(),
        body: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|certificate| HttpResponse::Ok().json(APIResponse::new(certificate)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct UpdateCertificateUseCase {
    pub certificate_id: ID,
    pub body: RequestBody,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    NotFound(ID),
    EmptyName,
    NegativeReminderDays(i64),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateCertificateUseCase {
    type Response = Certificate;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateCertificate";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        let mut certificate = match ctx.repos.certificates.find(&self.certificate_id).await {
            Ok(Some(certificate)) => certificate,
            Ok(None) => return Err(UseCaseError::NotFound(self.certificate_id.clone())),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        let body = &self.body;
        let name = body.name.trim();
        if name.is_empty() {
            return Err(UseCaseError::EmptyName);
        }
        match body.reminder_days {
            Some(days) if days < 0 => return Err(UseCaseError::NegativeReminderDays(days)),
            _ => (),
        }

        certificate.name = name.to_string();
        certificate.issuer = body.issuer.clone();
        certificate.issued_date = body.issued_date;
        certificate.certificate_type = body.certificate_type.clone();
        certificate.expiry_date = body.expiry_date;
        certificate.reminder_days = body.reminder_days;
        certificate.description = body.description.clone();

        ctx.repos
            .certificates
            .save(&certificate)
            .await
            .map(|_| certificate)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[actix_web::test]
    async fn moves_the_expiry_date() {
        let ctx = PlannerContext::create_inmemory();
        let mut certificate = Certificate::new("ISO 9001".into(), Utc::now());
        certificate.expiry_date = NaiveDate::from_ymd_opt(2024, 4, 1);
        ctx.repos.certificates.insert(&certificate).await.unwrap();

        let usecase = UpdateCertificateUseCase {
            certificate_id: certificate.id.clone(),
            body: RequestBody {
                name: "ISO 9001".into(),
                expiry_date: NaiveDate::from_ymd_opt(2027, 4, 1),
                reminder_days: Some(60),
                ..Default::default()
            },
        };
        execute(usecase, &ctx).await.unwrap();

        let stored = ctx
            .repos
            .certificates
            .find(&certificate.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.expiry_date, NaiveDate::from_ymd_opt(2027, 4, 1));
        assert_eq!(stored.reminder_days(), 60);
    }

    #[actix_web::test]
    async fn rejects_negative_reminder_days() {
        let ctx = PlannerContext::create_inmemory();
        let certificate = Certificate::new("HACCP".into(), Utc::now());
        ctx.repos.certificates.insert(&certificate).await.unwrap();

        let usecase = UpdateCertificateUseCase {
            certificate_id: certificate.id.clone(),
            body: RequestBody {
                name: "HACCP".into(),
                reminder_days: Some(-1),
                ..Default::default()
            },
        };
        assert_eq!(
            execute(usecase, &ctx).await.unwrap_err(),
            UseCaseError::NegativeReminderDays(-1)
        );
    }
}
