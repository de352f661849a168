mod inmemory;
mod sqlite;

use enterprise_planner_domain::{Employee, ID};
pub use inmemory::InMemoryEmployeeRepo;
pub use sqlite::SqliteEmployeeRepo;

#[async_trait::async_trait]
pub trait IEmployeeRepo: Send + Sync {
    async fn insert(&self, employee: &Employee) -> anyhow::Result<()>;
    async fn save(&self, employee: &Employee) -> anyhow::Result<()>;
    async fn find(&self, employee_id: &ID) -> anyhow::Result<Option<Employee>>;
    /// All employees ordered by name
    async fn find_all(&self) -> anyhow::Result<Vec<Employee>>;
    async fn delete(&self, employee_id: &ID) -> anyhow::Result<Option<Employee>>;
}

#[cfg(test)]
mod tests {
    use crate::repos::tests::create_contexts;
    use chrono::{NaiveDate, Utc};
    use enterprise_planner_domain::{DrivingLicense, Employee};

    #[tokio::test]
    async fn create_list_and_delete() {
        for ctx in create_contexts().await {
            let mut driver = Employee::new("Zora Kühn".into(), Utc::now());
            driver.position = Some("Berufskraftfahrer".into());
            driver.driver_card_read = NaiveDate::from_ymd_opt(2024, 2, 1);
            driver.set_driving_licenses(&[DrivingLicense {
                class: "CE".into(),
                expiry: NaiveDate::from_ymd_opt(2027, 1, 31),
            }]);
            let clerk = Employee::new("Anton Albers".into(), Utc::now());

            ctx.repos.employees.insert(&driver).await.unwrap();
            ctx.repos.employees.insert(&clerk).await.unwrap();

            let employees = ctx.repos.employees.find_all().await.unwrap();
            assert_eq!(employees.len(), 2);
            assert_eq!(employees[0].name, "Anton Albers");
            assert_eq!(employees[1].driver_card_read, driver.driver_card_read);
            assert_eq!(
                employees[1].driving_licenses().unwrap(),
                driver.driving_licenses().unwrap()
            );

            let res = ctx.repos.employees.delete(&driver.id).await.unwrap();
            assert_eq!(res.map(|e| e.id), Some(driver.id.clone()));
            assert_eq!(ctx.repos.employees.find_all().await.unwrap().len(), 1);
        }
    }

    #[tokio::test]
    async fn find_and_save() {
        for ctx in create_contexts().await {
            let mut employee = Employee::new("Zora Kühn".into(), Utc::now());
            ctx.repos.employees.insert(&employee).await.unwrap();

            employee.department = Some("Transport".into());
            employee.first_aid = NaiveDate::from_ymd_opt(2025, 5, 1);
            employee.set_driving_licenses(&[DrivingLicense {
                class: "C".into(),
                expiry: None,
            }]);
            ctx.repos.employees.save(&employee).await.unwrap();

            let stored = ctx.repos.employees.find(&employee.id).await.unwrap().unwrap();
            assert_eq!(stored.department.as_deref(), Some("Transport"));
            assert_eq!(stored.first_aid, employee.first_aid);
            assert_eq!(stored.driving_licenses_json, employee.driving_licenses_json);

            ctx.repos.employees.delete(&employee.id).await.unwrap();
            assert!(ctx.repos.employees.find(&employee.id).await.unwrap().is_none());
        }
    }
}
