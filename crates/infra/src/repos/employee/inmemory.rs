use super::IEmployeeRepo;
use crate::repos::shared::inmemory_repo::*;
use enterprise_planner_domain::{Employee, ID};

pub struct InMemoryEmployeeRepo {
    employees: std::sync::Mutex<Vec<Employee>>,
}

impl InMemoryEmployeeRepo {
    pub fn new() -> Self {
        Self {
            employees: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IEmployeeRepo for InMemoryEmployeeRepo {
    async fn insert(&self, employee: &Employee) -> anyhow::Result<()> {
        insert(employee, &self.employees);
        Ok(())
    }

    async fn save(&self, employee: &Employee) -> anyhow::Result<()> {
        save(employee, &self.employees);
        Ok(())
    }

    async fn find(&self, employee_id: &ID) -> anyhow::Result<Option<Employee>> {
        Ok(find(employee_id, &self.employees))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Employee>> {
        let mut employees = find_all(&self.employees);
        employees.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(employees)
    }

    async fn delete(&self, employee_id: &ID) -> anyhow::Result<Option<Employee>> {
        Ok(delete(employee_id, &self.employees))
    }
}
