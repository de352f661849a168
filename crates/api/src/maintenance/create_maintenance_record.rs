use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::create_maintenance_record::*;
use enterprise_planner_domain::{MaintenanceInterval, MaintenanceRecord};
use enterprise_planner_infra::PlannerContext;

fn handle_error(e: UseCaseError) -> PlannerError {
    match e {
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

pub async fn create_maintenance_record_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let body = body.0;
    let mut record = MaintenanceRecord::new(body.object.trim().to_string(), ctx.sys.now());
    record.vehicle_id = body.vehicle_id;
    record.maintenance_type = body.maintenance_type;
    record.last_maintenance = body.last_maintenance;
    record.interval = body.interval;
    record.description = body.description;
    record.notes = body.notes;
    record.created_by = body.created_by;

    execute(CreateMaintenanceRecordUseCase { record }, &ctx)
        .await
        .map(|record| HttpResponse::Created().json(APIResponse::new(record)))
        .map_err(handle_error)
}

/// Stores a maintenance record with its next maintenance derived from the
/// last one and the interval
#[derive(Debug)]
struct CreateMaintenanceRecordUseCase {
    pub record: MaintenanceRecord,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    EmptyObject,
    UnknownInterval(String),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateMaintenanceRecordUseCase {
    type Response = MaintenanceRecord;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateMaintenanceRecord";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        if self.record.object.is_empty() {
            return Err(UseCaseError::EmptyObject);
        }
        if let Some(interval) = &self.record.interval {
            if MaintenanceInterval::from_label(interval).is_none() {
                return Err(UseCaseError::UnknownInterval(interval.clone()));
            }
        }
        self.record.schedule_next_maintenance();

        ctx.repos
            .maintenance
            .insert(&self.record)
            .await
            .map(|_| self.record.clone())
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[actix_web::test]
    async fn derives_next_maintenance() {
        let ctx = PlannerContext::create_inmemory();
        let mut record = MaintenanceRecord::new("Kompressor".into(), Utc::now());
        record.last_maintenance = NaiveDate::from_ymd_opt(2024, 3, 10);
        record.interval = Some("3 Monate".into());

        let stored = execute(CreateMaintenanceRecordUseCase { record }, &ctx)
            .await
            .unwrap();
        assert_eq!(stored.next_maintenance, NaiveDate::from_ymd_opt(2024, 6, 10));
    }

    #[actix_web::test]
    async fn rejects_unknown_interval() {
        let ctx = PlannerContext::create_inmemory();
        let mut record = MaintenanceRecord::new("Kompressor".into(), Utc::now());
        record.interval = Some("alle zwei Wochen".into());

        let res = execute(CreateMaintenanceRecordUseCase { record }, &ctx).await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::UnknownInterval("alle zwei Wochen".into())
        );
    }
}
