use super::checkers::{
    check_certificates, check_contracts, check_employees, check_maintenance, check_vehicles,
};
use crate::{
    error::PlannerError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use enterprise_planner_api_structs::run_compliance_check::*;
use enterprise_planner_domain::SweepReport;
use enterprise_planner_infra::PlannerContext;
use std::convert::Infallible;
use tracing::{error, info};

pub async fn run_compliance_check_controller(
    ctx: web::Data<PlannerContext>,
) -> Result<HttpResponse, PlannerError> {
    let usecase = RunComplianceSweepUseCase {
        trigger: SweepTrigger::Manual,
    };

    execute(usecase, &ctx)
        .await
        .map(|report| HttpResponse::Ok().json(APIResponse::new(report)))
        .map_err(|e| match e {})
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepTrigger {
    Manual,
    JobScheduler,
}

/// Runs every compliance checker for today and creates the missing
/// reminder tasks. Never fails: areas that could not be checked are
/// reported in the `SweepReport`.
#[derive(Debug)]
pub struct RunComplianceSweepUseCase {
    pub trigger: SweepTrigger,
}

#[async_trait::async_trait(?Send)]
impl UseCase for RunComplianceSweepUseCase {
    type Response = SweepReport;

    type Error = Infallible;

    const NAME: &'static str = "RunComplianceSweep";

    async fn execute(&mut self, ctx: &PlannerContext) -> Result<Self::Response, Self::Error> {
        let today = ctx.sys.today();
        info!("Checking compliance deadlines for {} ({:?})", today, self.trigger);

        let (employees, vehicles, certificates, contracts, maintenance) = futures::join!(
            check_employees(ctx, today),
            check_vehicles(ctx, today),
            check_certificates(ctx, today),
            check_contracts(ctx, today),
            check_maintenance(ctx, today)
        );
        let report = SweepReport::new(
            today,
            vec![employees, vehicles, certificates, contracts, maintenance],
        );

        for area in report.failed_areas() {
            error!("Compliance check of {} did not complete", area.as_str());
        }
        if report.tasks_created > 0 {
            info!("{} compliance reminder tasks created", report.tasks_created);
        } else {
            info!("All compliance deadlines are up to date");
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use enterprise_planner_domain::{
        date::add_days, ComplianceArea, Contract, DrivingLicense, Employee, TaskPriority,
        TaskStatus, Vehicle, ID,
    };
    use enterprise_planner_infra::{IEmployeeRepo, StaticTimeSys};
    use std::sync::Arc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn setup() -> PlannerContext {
        let mut ctx = PlannerContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys::at_date(today()));
        ctx
    }

    async fn sweep(ctx: &PlannerContext) -> SweepReport {
        let usecase = RunComplianceSweepUseCase {
            trigger: SweepTrigger::Manual,
        };
        execute(usecase, ctx).await.unwrap()
    }

    #[actix_web::test]
    async fn empty_database_creates_nothing() {
        let ctx = setup();
        let report = sweep(&ctx).await;
        assert_eq!(report.today, today());
        assert_eq!(report.tasks_created, 0);
        assert_eq!(report.outcomes.len(), 5);
        assert!(report.failed_areas().is_empty());
    }

    #[actix_web::test]
    async fn expired_tuv_creates_one_critical_task() {
        let ctx = setup();
        let mut vehicle = Vehicle::new("HH-AB 123".into(), "PKW".into(), Utc::now());
        vehicle.tuv_date = Some(add_days(today(), -10));
        ctx.repos.vehicles.insert(&vehicle).await.unwrap();

        let report = sweep(&ctx).await;
        assert_eq!(report.tasks_created, 1);

        let tasks = ctx.repos.tasks.find_all().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "TÜV HH-AB 123: abgelaufen");
        assert_eq!(tasks[0].priority, TaskPriority::Critical);
        assert_eq!(tasks[0].due_date, Some(today()));
        assert_eq!(tasks[0].created_at, ctx.sys.now());
    }

    #[actix_web::test]
    async fn license_expiring_in_45_days_creates_high_task() {
        let ctx = setup();
        let mut employee = Employee::new("Max Muster".into(), Utc::now());
        employee.set_driving_licenses(&[DrivingLicense {
            class: "C".into(),
            expiry: Some(add_days(today(), 45)),
        }]);
        ctx.repos.employees.insert(&employee).await.unwrap();

        assert_eq!(sweep(&ctx).await.tasks_created, 1);
        let task = ctx.repos.tasks.find_all().await.unwrap().remove(0);
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.due_date, Some(add_days(today(), 7)));
    }

    #[actix_web::test]
    async fn contract_reminders_depend_on_the_end_date() {
        let ctx = setup();
        let mut contract = Contract::new(
            "Wartungsvertrag".into(),
            "Kran GmbH".into(),
            "Service".into(),
            Utc::now(),
        );
        contract.end_date = Some(add_days(today(), 200));
        ctx.repos.contracts.insert(&contract).await.unwrap();
        assert_eq!(sweep(&ctx).await.tasks_created, 0);

        let mut contract = Contract::new(
            "Leasing".into(),
            "Kran GmbH".into(),
            "Leasing".into(),
            Utc::now(),
        );
        contract.end_date = Some(add_days(today(), 50));
        ctx.repos.contracts.insert(&contract).await.unwrap();

        assert_eq!(sweep(&ctx).await.tasks_created, 1);
        let task = ctx.repos.tasks.find_all().await.unwrap().remove(0);
        assert_eq!(task.priority, TaskPriority::High);
    }

    #[actix_web::test]
    async fn second_sweep_creates_nothing() {
        let ctx = setup();
        let mut driver = Employee::new("Erika Fahrer".into(), Utc::now());
        driver.driver_card_read = Some(add_days(today(), -29));
        ctx.repos.employees.insert(&driver).await.unwrap();
        let mut truck = Vehicle::new("HH-LK 1".into(), "LKW".into(), Utc::now());
        truck.tachograph_next_read = Some(add_days(today(), 2));
        truck.uvv_date = Some(add_days(today(), 40));
        ctx.repos.vehicles.insert(&truck).await.unwrap();

        let first = sweep(&ctx).await;
        assert_eq!(first.tasks_created, 3);
        let second = sweep(&ctx).await;
        assert_eq!(second.tasks_created, 0);
        assert_eq!(ctx.repos.tasks.find_all().await.unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn completed_reminders_are_created_again() {
        let ctx = setup();
        let mut driver = Employee::new("Erika Fahrer".into(), Utc::now());
        driver.driver_card_read = Some(add_days(today(), -29));
        ctx.repos.employees.insert(&driver).await.unwrap();
        assert_eq!(sweep(&ctx).await.tasks_created, 1);

        let mut task = ctx.repos.tasks.find_all().await.unwrap().remove(0);
        task.set_status(TaskStatus::Completed, today());
        ctx.repos.tasks.save(&task).await.unwrap();

        assert_eq!(sweep(&ctx).await.tasks_created, 1);
    }

    struct FailingEmployeeRepo {}

    #[async_trait::async_trait]
    impl IEmployeeRepo for FailingEmployeeRepo {
        async fn insert(&self, _employee: &Employee) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("database is locked"))
        }
        async fn save(&self, _employee: &Employee) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("database is locked"))
        }
        async fn find(&self, _employee_id: &ID) -> anyhow::Result<Option<Employee>> {
            Err(anyhow::anyhow!("database is locked"))
        }
        async fn find_all(&self) -> anyhow::Result<Vec<Employee>> {
            Err(anyhow::anyhow!("database is locked"))
        }
        async fn delete(&self, _employee_id: &ID) -> anyhow::Result<Option<Employee>> {
            Err(anyhow::anyhow!("database is locked"))
        }
    }

    #[actix_web::test]
    async fn failing_area_does_not_stop_the_sweep() {
        let mut ctx = setup();
        ctx.repos.employees = Arc::new(FailingEmployeeRepo {});
        let mut vehicle = Vehicle::new("HH-AB 123".into(), "PKW".into(), Utc::now());
        vehicle.au_date = Some(add_days(today(), 5));
        ctx.repos.vehicles.insert(&vehicle).await.unwrap();

        let report = sweep(&ctx).await;
        assert_eq!(report.tasks_created, 1);
        assert_eq!(report.failed_areas(), vec![ComplianceArea::Employees]);
        let employees = report
            .outcomes
            .iter()
            .find(|o| o.area == ComplianceArea::Employees)
            .unwrap();
        assert_eq!(employees.tasks_created, 0);
        assert_eq!(employees.error.as_deref(), Some("database is locked"));
    }
}
