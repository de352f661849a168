use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::get_employees_compliance::*;
use enterprise_planner_domain::EmployeeComplianceReport;
use enterprise_planner_infra::PlannerContext;

pub async fn get_employees_compliance_controller(
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let usecase = GetEmployeesComplianceUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|reports| HttpResponse::Ok().json(APIResponse::new(reports)))
        .map_err(|e| match e {
            UseCaseError::StorageError => PlannerError::InternalError,
        })
}

#[derive(Debug)]
struct GetEmployeesComplianceUseCase {}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEmployeesComplianceUseCase {
    type Response = Vec<EmployeeComplianceReport>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetEmployeesCompliance";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        let today = ctx.sys.today();
        let employees = ctx
            .repos
            .employees
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(employees
            .iter()
            .map(|employee| employee.compliance_report(today))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use enterprise_planner_domain::{date::add_days, ComplianceStatus, Employee};
    use enterprise_planner_infra::StaticTimeSys;
    use std::sync::Arc;

    #[actix_web::test]
    async fn reports_every_employee() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let mut ctx = PlannerContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys::at_date(today));

        let mut expired = Employee::new("Anna".into(), Utc::now());
        expired.safety = Some(add_days(today, -1));
        ctx.repos.employees.insert(&expired).await.unwrap();
        let fine = Employee::new("Bert".into(), Utc::now());
        ctx.repos.employees.insert(&fine).await.unwrap();

        let reports = execute(GetEmployeesComplianceUseCase {}, &ctx).await.unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].name, "Anna");
        assert_eq!(reports[0].status, ComplianceStatus::Critical);
        assert_eq!(reports[0].critical_count, 1);
        assert_eq!(reports[1].status, ComplianceStatus::Ok);
        assert!(reports[1].issues.is_empty());
    }
}
