use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::update_maintenance_record::*;
use enterprise_planner_domain::{MaintenanceInterval, MaintenanceRecord, ID};
use enterprise_planner_infra::PlannerContext;

fn handle_error(e: UseCaseError) -> PlannerError {
    match e {
        UseCaseError::NotFound(record_id) => PlannerError::NotFound(format!(
            "The maintenance record with id: {}, was not found.",
            record_id
        )),
        UseCaseError::EmptyObject => {
            PlannerError::BadClientData("The maintained object is required".into())
        }
        UseCaseError::UnknownInterval(interval) => PlannerError::BadClientData(format!(
            "Unknown maintenance interval: {}",
            interval
        )),
        UseCaseError::StorageError => PlannerError::InternalError,
    }
}

pub async fn update_maintenance_record_controller(
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let usecase = UpdateMaintenanceRecordUseCase {
        record_id: path.maintenance_id.clone(),
        body: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|record| HttpResponse::Ok().json(APIResponse::new(record)))
        .map_err(handle_error)
}

/// Replaces a maintenance record and derives its next maintenance again.
/// The original author of the record is kept.
#[derive(Debug)]
struct UpdateMaintenanceRecordUseCase {
    pub record_id: ID,
    pub body: RequestBody,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    NotFound(ID),
    EmptyObject,
    UnknownInterval(String),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateMaintenanceRecordUseCase {
    type Response = MaintenanceRecord;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateMaintenanceRecord";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        let mut record = match ctx.repos.maintenance.find(&self.record_id).await {
            Ok(Some(record)) => record,
            Ok(None) => return Err(UseCaseError::NotFound(self.record_id.clone())),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        let body = &self.body;
        let object = body.object.trim();
        if object.is_empty() {
            return Err(UseCaseError::EmptyObject);
        }
        if let Some(interval) = &body.interval {
            if MaintenanceInterval::from_label(interval).is_none() {
                return Err(UseCaseError::UnknownInterval(interval.clone()));
            }
        }

        record.object = object.to_string();
        record.vehicle_id = body.vehicle_id.clone();
        record.maintenance_type = body.maintenance_type.clone();
        record.last_maintenance = body.last_maintenance;
        record.interval = body.interval.clone();
        record.description = body.description.clone();
        record.notes = body.notes.clone();
        record.schedule_next_maintenance();

        ctx.repos
            .maintenance
            .save(&record)
            .await
            .map(|_| record)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn stored_record() -> MaintenanceRecord {
        let mut record = MaintenanceRecord::new("Kompressor".into(), Utc::now());
        record.last_maintenance = NaiveDate::from_ymd_opt(2024, 3, 10);
        record.interval = Some("3 Monate".into());
        record.created_by = Some("Werkstatt".into());
        record.schedule_next_maintenance();
        record
    }

    #[actix_web::test]
    async fn derives_next_maintenance_again() {
        let ctx = PlannerContext::create_inmemory();
        let record = stored_record();
        ctx.repos.maintenance.insert(&record).await.unwrap();

        let usecase = UpdateMaintenanceRecordUseCase {
            record_id: record.id.clone(),
            body: RequestBody {
                object: "Kompressor".into(),
                last_maintenance: NaiveDate::from_ymd_opt(2024, 6, 10),
                interval: Some("1 Jahr".into()),
                created_by: Some("Jemand anderes".into()),
                ..Default::default()
            },
        };
        let updated = execute(usecase, &ctx).await.unwrap();
        assert_eq!(updated.next_maintenance, NaiveDate::from_ymd_opt(2025, 6, 10));
        assert_eq!(updated.created_by.as_deref(), Some("Werkstatt"));

        let stored = ctx.repos.maintenance.find(&record.id).await.unwrap().unwrap();
        assert_eq!(stored.interval.as_deref(), Some("1 Jahr"));
    }

    #[actix_web::test]
    async fn clearing_the_interval_clears_the_next_date() {
        let ctx = PlannerContext::create_inmemory();
        let record = stored_record();
        ctx.repos.maintenance.insert(&record).await.unwrap();

        let usecase = UpdateMaintenanceRecordUseCase {
            record_id: record.id.clone(),
            body: RequestBody {
                object: "Kompressor".into(),
                last_maintenance: record.last_maintenance,
                ..Default::default()
            },
        };
        let updated = execute(usecase, &ctx).await.unwrap();
        assert_eq!(updated.next_maintenance, None);
    }

    #[actix_web::test]
    async fn rejects_unknown_interval() {
        let ctx = PlannerContext::create_inmemory();
        let record = stored_record();
        ctx.repos.maintenance.insert(&record).await.unwrap();

        let usecase = UpdateMaintenanceRecordUseCase {
            record_id: record.id.clone(),
            body: RequestBody {
                object: "Kompressor".into(),
                interval: Some("alle zwei Wochen".into()),
                ..Default::default()
            },
        };
        assert_eq!(
            execute(usecase, &ctx).await.unwrap_err(),
            UseCaseError::UnknownInterval("alle zwei Wochen".into())
        );
    }
}
