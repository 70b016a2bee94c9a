//! Fixture builders shared by the service integration tests.

use staffhub_domain::timestamp::{date_time_to_timestamp, date_to_timestamp};
use staffhub_domain::{AccessRole, Employee, HolidayRequest, HolidayStatus, Shift};
use uuid::Uuid;

pub fn employee(name: &str) -> Employee {
    Employee {
        id: Uuid::new_v4(),
        full_name: name.to_string(),
        job_title: "Team Member".to_string(),
        department: "Bar".to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: None,
        start_date: date_to_timestamp("2022-01-10").unwrap(),
        is_active: true,
        role: AccessRole::Staff,
        account_level: 1,
    }
}

pub fn shift(date: &str, start: &str, end: &str, dept: &str, assigned: &[Uuid]) -> Shift {
    Shift {
        id: Uuid::new_v4(),
        date: date_to_timestamp(date).unwrap(),
        start_time: date_time_to_timestamp(date, start).unwrap(),
        end_time: date_time_to_timestamp(date, end).unwrap(),
        department: dept.to_string(),
        category: None,
        assigned_employees: assigned.to_vec(),
    }
}

pub fn holiday_request(
    employee_id: Uuid,
    start: &str,
    end: &str,
    status: HolidayStatus,
) -> HolidayRequest {
    HolidayRequest {
        id: Uuid::new_v4(),
        employee_id,
        start_date: date_to_timestamp(start).unwrap(),
        end_date: date_to_timestamp(end).unwrap(),
        status,
        reason: None,
        created_at: date_to_timestamp("2024-01-01").unwrap(),
    }
}
