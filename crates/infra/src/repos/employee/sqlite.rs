use super::IEmployeeRepo;
use crate::repos::shared::sqlite_repo::{date_column, date_value, id_column};
use chrono::{DateTime, Utc};
use enterprise_planner_domain::{Employee, ID};
use sqlx::{FromRow, SqlitePool};

pub struct SqliteEmployeeRepo {
    pool: SqlitePool,
}

impl SqliteEmployeeRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EmployeeRaw {
    employee_uid: String,
    name: String,
    position: Option<String>,
    department: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    hire_date: Option<String>,
    driving_licenses: Option<String>,
    driver_card_read: Option<String>,
    first_aid: Option<String>,
    safety: Option<String>,
    forklift: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<EmployeeRaw> for Employee {
    type Error = anyhow::Error;

    fn try_from(raw: EmployeeRaw) -> anyhow::Result<Self> {
        let date = |column: &str, value: Option<String>| date_column("employees", column, value);
        Ok(Employee {
            id: id_column("employees", &raw.employee_uid)?,
            name: raw.name,
            position: raw.position,
            department: raw.department,
            email: raw.email,
            phone: raw.phone,
            hire_date: date("hire_date", raw.hire_date),
            // Decoded lazily so a malformed list only affects the license checks
            driving_licenses_json: raw.driving_licenses,
            driver_card_read: date("driver_card_read", raw.driver_card_read),
            first_aid: date("first_aid", raw.first_aid),
            safety: date("safety", raw.safety),
            forklift: date("forklift", raw.forklift),
            created_at: raw.created_at,
        })
    }
}

#[async_trait::async_trait]
impl IEmployeeRepo for SqliteEmployeeRepo {
    async fn insert(&self, employee: &Employee) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO employees(employee_uid, name, position, department, email, phone,
                hire_date, driving_licenses, driver_card_read, first_aid, safety, forklift,
                created_at)
            VALUES(?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(employee.id.as_string())
        .bind(&employee.name)
        .bind(&employee.position)
        .bind(&employee.department)
        .bind(&employee.email)
        .bind(&employee.phone)
        .bind(date_value(&employee.hire_date))
        .bind(&employee.driving_licenses_json)
        .bind(date_value(&employee.driver_card_read))
        .bind(date_value(&employee.first_aid))
        .bind(date_value(&employee.safety))
        .bind(date_value(&employee.forklift))
        .bind(employee.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, employee: &Employee) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE employees
            SET name = ?,
            position = ?,
            department = ?,
            email = ?,
            phone = ?,
            hire_date = ?,
            driving_licenses = ?,
            driver_card_read = ?,
            first_aid = ?,
            safety = ?,
            forklift = ?
            WHERE employee_uid = ?
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.position)
        .bind(&employee.department)
        .bind(&employee.email)
        .bind(&employee.phone)
        .bind(date_value(&employee.hire_date))
        .bind(&employee.driving_licenses_json)
        .bind(date_value(&employee.driver_card_read))
        .bind(date_value(&employee.first_aid))
        .bind(date_value(&employee.safety))
        .bind(date_value(&employee.forklift))
        .bind(employee.id.as_string())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, employee_id: &ID) -> anyhow::Result<Option<Employee>> {
        let employee: Option<EmployeeRaw> = sqlx::query_as("SELECT * FROM employees WHERE employee_uid = ?")
            .bind(employee_id.as_string())
            .fetch_optional(&self.pool)
            .await?;
        employee.map(Employee::try_from).transpose()
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Employee>> {
        let employees: Vec<EmployeeRaw> = sqlx::query_as("SELECT * FROM employees ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        employees.into_iter().map(Employee::try_from).collect()
    }

    async fn delete(&self, employee_id: &ID) -> anyhow::Result<Option<Employee>> {
        let employee: Option<EmployeeRaw> =
            sqlx::query_as("DELETE FROM employees WHERE employee_uid = ? RETURNING *")
                .bind(employee_id.as_string())
                .fetch_optional(&self.pool)
                .await?;
        employee.map(Employee::try_from).transpose()
    }
}
