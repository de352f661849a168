mod helpers;

use chrono::{Datelike, Duration};
use enterprise_planner_sdk::{
    APIErrorVariant, CompleteVehicleInspectionInput, ComplianceStatus, CreateContractInput,
    CreateEmployeeInput, CreateMaintenanceRecordInput, CreateTaskInput, CreateVehicleInput,
    DrivingLicenseDTO, InspectionKind, RecurringInterval, TaskCategory, TaskPriority, TaskStatus,
    TaskUpdate, UpdateContractInput, UpdateMaintenanceRecordInput, UpdateTaskInput,
    UpdateVehicleInput,
};
use helpers::setup::spawn_app;

#[actix_web::test]
async fn test_status_ok() {
    let (_, sdk) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
}

#[actix_web::test]
async fn test_compliance_check_creates_reminders_once() {
    let (app, sdk) = spawn_app().await;
    sdk.vehicle
        .create(CreateVehicleInput {
            plate: "HH-AB 123".into(),
            vehicle_type: "PKW".into(),
            tuv_date: Some(app.today - Duration::days(10)),
            ..Default::default()
        })
        .await
        .unwrap();

    let res = sdk.compliance.run_check().await.unwrap();
    assert_eq!(res.tasks_created, 1);
    assert_eq!(res.today, app.today);
    assert_eq!(res.outcomes.len(), 5);
    assert!(res.outcomes.iter().all(|o| o.error.is_none()));

    let tasks = sdk.task.get_all().await.unwrap().tasks;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "TÜV HH-AB 123: abgelaufen");
    assert_eq!(tasks[0].priority, TaskPriority::Critical);
    assert_eq!(tasks[0].due_date, Some(app.today));
    assert_eq!(tasks[0].created_by, "System (Compliance)");

    let res = sdk.compliance.run_check().await.unwrap();
    assert_eq!(res.tasks_created, 0);
    assert_eq!(sdk.task.get_all().await.unwrap().tasks.len(), 1);
}

#[actix_web::test]
async fn test_scheduled_sweep() {
    let (app, sdk) = spawn_app().await;
    sdk.employee
        .create(CreateEmployeeInput {
            name: "Max Muster".into(),
            driving_licenses: vec![DrivingLicenseDTO {
                class: "CE".into(),
                expiry: Some(app.today + Duration::days(45)),
            }],
            ..Default::default()
        })
        .await
        .unwrap();

    app.sweep_ticks.unbounded_send(()).unwrap();

    let mut tasks = Vec::new();
    for _ in 0..50 {
        tasks = sdk.task.get_all().await.unwrap().tasks;
        if !tasks.is_empty() {
            break;
        }
        actix_web::rt::time::sleep(std::time::Duration::from_millis(20)).await;
    }
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Max Muster: Führerschein CE läuft bald ab");
    assert_eq!(tasks[0].priority, TaskPriority::High);
    assert_eq!(tasks[0].due_date, Some(app.today + Duration::days(7)));
}

#[actix_web::test]
async fn test_employees_compliance_report() {
    let (app, sdk) = spawn_app().await;
    sdk.employee
        .create(CreateEmployeeInput {
            name: "Erika Fahrer".into(),
            position: Some("Berufskraftfahrerin".into()),
            driver_card_read: Some(app.today - Duration::days(30)),
            ..Default::default()
        })
        .await
        .unwrap();

    let employees = sdk
        .compliance
        .get_employees_compliance()
        .await
        .unwrap()
        .employees;
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].status, ComplianceStatus::Critical);
    assert_eq!(employees[0].critical_count, 1);
}

#[actix_web::test]
async fn test_duplicate_plate_conflicts() {
    let (_, sdk) = spawn_app().await;
    let input = || CreateVehicleInput {
        plate: "HH-LK 1".into(),
        vehicle_type: "LKW".into(),
        ..Default::default()
    };
    let vehicle = sdk.vehicle.create(input()).await.unwrap().vehicle;
    let err = sdk.vehicle.create(input()).await.unwrap_err();
    assert!(matches!(err.variant, APIErrorVariant::Conflict));

    let other = sdk
        .vehicle
        .create(CreateVehicleInput {
            plate: "HH-LK 2".into(),
            ..input()
        })
        .await
        .unwrap()
        .vehicle;
    let err = sdk
        .vehicle
        .update(UpdateVehicleInput {
            vehicle_id: other.id.clone(),
            update: input(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err.variant, APIErrorVariant::Conflict));
    sdk.vehicle.delete(&other.id).await.unwrap();

    assert_eq!(sdk.vehicle.get_all().await.unwrap().vehicles.len(), 1);
    sdk.vehicle.delete(&vehicle.id).await.unwrap();
    assert!(sdk.vehicle.get_all().await.unwrap().vehicles.is_empty());
    let err = sdk.vehicle.delete(&vehicle.id).await.unwrap_err();
    assert!(matches!(err.variant, APIErrorVariant::NotFound));
}

#[actix_web::test]
async fn test_complete_vehicle_inspection() {
    let (app, sdk) = spawn_app().await;
    let vehicle = sdk
        .vehicle
        .create(CreateVehicleInput {
            plate: "HH-AB 9".into(),
            vehicle_type: "PKW".into(),
            au_date: Some(app.today - Duration::days(2)),
            ..Default::default()
        })
        .await
        .unwrap()
        .vehicle;
    sdk.compliance.run_check().await.unwrap();
    let task = sdk.task.get_all().await.unwrap().tasks.remove(0);

    let res = sdk
        .vehicle
        .complete_inspection(CompleteVehicleInspectionInput {
            task_id: Some(task.id.clone()),
            vehicle_id: vehicle.id.clone(),
            inspection_type: InspectionKind::Au,
            completed_date: app.today,
            validity_months: 24,
        })
        .await
        .unwrap();
    assert_eq!(res.next_due_date, app.today.with_year(2026).unwrap());
    assert_eq!(res.vehicle.au_date, Some(res.next_due_date));

    let task = sdk.task.get(&task.id).await.unwrap().task;
    assert_eq!(task.status, TaskStatus::Completed);
    assert_eq!(sdk.compliance.run_check().await.unwrap().tasks_created, 0);
}

#[actix_web::test]
async fn test_task_lifecycle() {
    let (app, sdk) = spawn_app().await;
    let task = sdk
        .task
        .create(CreateTaskInput {
            title: "Wartung: Gabelstapler".into(),
            category: TaskCategory::Maintenance,
            description: Some("Gabelstapler 1".into()),
            priority: Some(TaskPriority::High),
            assignee: Some("Werkstatt".into()),
            due_date: Some(app.today + Duration::days(3)),
            recurring: Some(true),
            recurring_interval: Some(RecurringInterval::Weekly),
            vehicle_id: None,
            created_by: None,
        })
        .await
        .unwrap()
        .task;
    assert_eq!(task.status, TaskStatus::Open);

    let upcoming = sdk.task.get_upcoming(None).await.unwrap();
    assert_eq!(upcoming.days, 7);
    assert_eq!(upcoming.tasks.len(), 1);

    let res = sdk
        .task
        .update(UpdateTaskInput {
            task_id: task.id.clone(),
            update: TaskUpdate {
                status: Some(TaskStatus::Completed),
                ..Default::default()
            },
        })
        .await
        .unwrap();
    assert_eq!(res.task.status, TaskStatus::Completed);
    assert_eq!(res.task.completed_at, Some(app.today));
    let follow_up = res.follow_up_task.unwrap();
    assert_eq!(follow_up.title, "Wartung: Gabelstapler");
    assert_eq!(follow_up.due_date, Some(app.today + Duration::days(7)));
    assert_eq!(follow_up.created_by, "System (Auto)");

    let upcoming = sdk.task.get_upcoming(Some(7)).await.unwrap();
    assert_eq!(upcoming.tasks.len(), 1);
    assert_eq!(upcoming.tasks[0].id, follow_up.id);

    sdk.task.delete(&task.id).await.unwrap();
    let err = sdk.task.get(&task.id).await.unwrap_err();
    assert!(matches!(err.variant, APIErrorVariant::NotFound));
}

#[actix_web::test]
async fn test_invalid_requests_are_rejected() {
    let (app, sdk) = spawn_app().await;

    let err = sdk.task.get_upcoming(Some(31)).await.unwrap_err();
    assert!(matches!(err.variant, APIErrorVariant::BadClientData));
    let err = sdk.task.get_upcoming(Some(0)).await.unwrap_err();
    assert!(matches!(err.variant, APIErrorVariant::BadClientData));

    let err = sdk
        .contract
        .create(CreateContractInput {
            name: "Miete Halle 2".into(),
            partner: "Immobilien AG".into(),
            contract_type: "Miete".into(),
            start_date: Some(app.today),
            end_date: Some(app.today - Duration::days(1)),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err.variant, APIErrorVariant::BadClientData));

    let err = sdk
        .maintenance
        .create(CreateMaintenanceRecordInput {
            object: "Kompressor".into(),
            interval: Some("2 Wochen".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err.variant, APIErrorVariant::BadClientData));
}

#[actix_web::test]
async fn test_contract_reminder_after_edit() {
    let (app, sdk) = spawn_app().await;
    let contract = sdk
        .contract
        .create(CreateContractInput {
            name: "Leasing LKW".into(),
            partner: "Autohaus Nord".into(),
            contract_type: "Leasing".into(),
            end_date: Some(app.today + Duration::days(200)),
            ..Default::default()
        })
        .await
        .unwrap()
        .contract;
    assert_eq!(sdk.compliance.run_check().await.unwrap().tasks_created, 0);

    let updated = sdk
        .contract
        .update(UpdateContractInput {
            contract_id: contract.id.clone(),
            update: CreateContractInput {
                name: "Leasing LKW".into(),
                partner: "Autohaus Nord".into(),
                contract_type: "Leasing".into(),
                end_date: Some(app.today + Duration::days(50)),
                cancelation_period: Some("1 Monat".into()),
                ..Default::default()
            },
        })
        .await
        .unwrap()
        .contract;
    assert_eq!(updated.id, contract.id);
    assert_eq!(sdk.contract.get_all().await.unwrap().contracts.len(), 1);

    assert_eq!(sdk.compliance.run_check().await.unwrap().tasks_created, 1);
    let tasks = sdk.task.get_all().await.unwrap().tasks;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Vertrag Leasing LKW: läuft bald ab");
    assert_eq!(tasks[0].priority, TaskPriority::High);
    assert_eq!(tasks[0].due_date, Some(app.today + Duration::days(30)));

    let err = sdk
        .contract
        .update(UpdateContractInput {
            contract_id: contract.id.clone(),
            update: CreateContractInput {
                name: "Leasing LKW".into(),
                partner: "".into(),
                contract_type: "Leasing".into(),
                ..Default::default()
            },
        })
        .await
        .unwrap_err();
    assert!(matches!(err.variant, APIErrorVariant::BadClientData));
}

#[actix_web::test]
async fn test_maintenance_reminder() {
    let (app, sdk) = spawn_app().await;
    let record = sdk
        .maintenance
        .create(CreateMaintenanceRecordInput {
            object: "Rolltor".into(),
            last_maintenance: Some(app.today - Duration::days(20)),
            interval: Some("1 Jahr".into()),
            ..Default::default()
        })
        .await
        .unwrap()
        .maintenance;
    assert_eq!(sdk.compliance.run_check().await.unwrap().tasks_created, 0);

    let record = sdk
        .maintenance
        .update(UpdateMaintenanceRecordInput {
            maintenance_id: record.id.clone(),
            update: CreateMaintenanceRecordInput {
                object: "Rolltor".into(),
                last_maintenance: Some(app.today - Duration::days(6)),
                interval: Some("1 Woche".into()),
                ..Default::default()
            },
        })
        .await
        .unwrap()
        .maintenance;
    assert_eq!(record.next_maintenance, Some(app.today + Duration::days(1)));

    assert_eq!(sdk.compliance.run_check().await.unwrap().tasks_created, 1);
    let tasks = sdk.task.get_all().await.unwrap().tasks;
    assert_eq!(tasks[0].title, "Wartung Rolltor: bald fällig");
}
