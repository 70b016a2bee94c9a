//! Mock repository implementations for testing
//!
//! Provides in-memory mocks for all core repository ports, enabling
//! deterministic service tests without a data service.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use staffhub_core::appraisals::ports::AppraisalRepository;
use staffhub_core::inventory::ports::StockRequestRepository;
use staffhub_core::leave::ports::HolidayRequestRepository;
use staffhub_core::payroll::ports::EmployeeRepository;
use staffhub_core::scheduling::ports::ShiftRepository;
use staffhub_core::tasks::ports::TaskRepository;
use staffhub_domain::{
    AppraisalRecord, Employee, HolidayRequest, HolidayStatus, Result as DomainResult, Shift,
    StaffHubError, StockRequest, StockStatus, ToDoTask,
};
use uuid::Uuid;

/// In-memory mock for `ShiftRepository`.
#[derive(Default, Clone)]
pub struct MockShiftRepository {
    shifts: Arc<Mutex<Vec<Shift>>>,
}

impl MockShiftRepository {
    pub fn new(shifts: Vec<Shift>) -> Self {
        Self { shifts: Arc::new(Mutex::new(shifts)) }
    }

    pub fn with_shift(self, shift: Shift) -> Self {
        self.shifts.lock().unwrap().push(shift);
        self
    }
}

#[async_trait]
impl ShiftRepository for MockShiftRepository {
    async fn list_shifts(&self) -> DomainResult<Vec<Shift>> {
        Ok(self.shifts.lock().unwrap().clone())
    }

    async fn shifts_in_range(&self, start_ns: i64, end_ns: i64) -> DomainResult<Vec<Shift>> {
        Ok(self
            .shifts
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.date >= start_ns && s.date <= end_ns)
            .cloned()
            .collect())
    }

    async fn add_shift(&self, shift: Shift) -> DomainResult<()> {
        self.shifts.lock().unwrap().push(shift);
        Ok(())
    }

    async fn update_shift(&self, shift: Shift) -> DomainResult<()> {
        let mut shifts = self.shifts.lock().unwrap();
        let existing = shifts
            .iter_mut()
            .find(|s| s.id == shift.id)
            .ok_or_else(|| StaffHubError::NotFound(format!("shift {}", shift.id)))?;
        *existing = shift;
        Ok(())
    }

    async fn delete_shift(&self, id: Uuid) -> DomainResult<()> {
        self.shifts.lock().unwrap().retain(|s| s.id != id);
        Ok(())
    }
}

/// In-memory mock for `HolidayRequestRepository`.
#[derive(Default, Clone)]
pub struct MockHolidayRequestRepository {
    requests: Arc<Mutex<Vec<HolidayRequest>>>,
}

impl MockHolidayRequestRepository {
    pub fn new(requests: Vec<HolidayRequest>) -> Self {
        Self { requests: Arc::new(Mutex::new(requests)) }
    }
}

#[async_trait]
impl HolidayRequestRepository for MockHolidayRequestRepository {
    async fn list_holiday_requests(&self) -> DomainResult<Vec<HolidayRequest>> {
        Ok(self.requests.lock().unwrap().clone())
    }

    async fn get_holiday_request(&self, id: Uuid) -> DomainResult<HolidayRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| StaffHubError::NotFound(format!("holiday request {id}")))
    }

    async fn holiday_requests_for(&self, employee_id: Uuid) -> DomainResult<Vec<HolidayRequest>> {
        Ok(self
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn holiday_requests_with_status(
        &self,
        status: HolidayStatus,
    ) -> DomainResult<Vec<HolidayRequest>> {
        Ok(self
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.status == status)
            .cloned()
            .collect())
    }

    async fn add_holiday_request(&self, request: HolidayRequest) -> DomainResult<()> {
        self.requests.lock().unwrap().push(request);
        Ok(())
    }

    async fn update_holiday_request(&self, request: HolidayRequest) -> DomainResult<()> {
        let mut requests = self.requests.lock().unwrap();
        let existing = requests
            .iter_mut()
            .find(|r| r.id == request.id)
            .ok_or_else(|| StaffHubError::NotFound(format!("holiday request {}", request.id)))?;
        *existing = request;
        Ok(())
    }
}

/// In-memory mock for `EmployeeRepository`.
#[derive(Default, Clone)]
pub struct MockEmployeeRepository {
    employees: Arc<Mutex<Vec<Employee>>>,
}

impl MockEmployeeRepository {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees: Arc::new(Mutex::new(employees)) }
    }
}

#[async_trait]
impl EmployeeRepository for MockEmployeeRepository {
    async fn list_employees(&self) -> DomainResult<Vec<Employee>> {
        Ok(self.employees.lock().unwrap().clone())
    }

    async fn get_employee(&self, id: Uuid) -> DomainResult<Employee> {
        self.employees
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| StaffHubError::NotFound(format!("employee {id}")))
    }

    async fn add_employee(&self, employee: Employee) -> DomainResult<()> {
        self.employees.lock().unwrap().push(employee);
        Ok(())
    }

    async fn update_employee(&self, employee: Employee) -> DomainResult<()> {
        let mut employees = self.employees.lock().unwrap();
        let existing = employees
            .iter_mut()
            .find(|e| e.id == employee.id)
            .ok_or_else(|| StaffHubError::NotFound(format!("employee {}", employee.id)))?;
        *existing = employee;
        Ok(())
    }
}

/// In-memory mock for `AppraisalRepository`.
#[derive(Default, Clone)]
pub struct MockAppraisalRepository {
    records: Arc<Mutex<Vec<AppraisalRecord>>>,
}

impl MockAppraisalRepository {
    pub fn new(records: Vec<AppraisalRecord>) -> Self {
        Self { records: Arc::new(Mutex::new(records)) }
    }

    /// Number of stored records, for asserting that updates do not insert.
    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl AppraisalRepository for MockAppraisalRepository {
    async fn appraisals_for(&self, employee_id: Uuid) -> DomainResult<Vec<AppraisalRecord>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn get_appraisal(&self, id: Uuid) -> DomainResult<AppraisalRecord> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| StaffHubError::NotFound(format!("appraisal {id}")))
    }

    async fn add_appraisal(&self, record: AppraisalRecord) -> DomainResult<()> {
        self.records.lock().unwrap().push(record);
        Ok(())
    }

    async fn update_appraisal(&self, record: AppraisalRecord) -> DomainResult<()> {
        let mut records = self.records.lock().unwrap();
        let existing = records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or_else(|| StaffHubError::NotFound(format!("appraisal {}", record.id)))?;
        *existing = record;
        Ok(())
    }
}

/// In-memory mock for `TaskRepository`.
#[derive(Default, Clone)]
pub struct MockTaskRepository {
    tasks: Arc<Mutex<Vec<ToDoTask>>>,
}

impl MockTaskRepository {
    pub fn new(tasks: Vec<ToDoTask>) -> Self {
        Self { tasks: Arc::new(Mutex::new(tasks)) }
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn list_tasks(&self) -> DomainResult<Vec<ToDoTask>> {
        Ok(self.tasks.lock().unwrap().clone())
    }

    async fn get_task(&self, id: Uuid) -> DomainResult<ToDoTask> {
        self.tasks
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| StaffHubError::NotFound(format!("task {id}")))
    }

    async fn add_task(&self, task: ToDoTask) -> DomainResult<()> {
        self.tasks.lock().unwrap().push(task);
        Ok(())
    }

    async fn update_task(&self, task: ToDoTask) -> DomainResult<()> {
        let mut tasks = self.tasks.lock().unwrap();
        let existing = tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or_else(|| StaffHubError::NotFound(format!("task {}", task.id)))?;
        *existing = task;
        Ok(())
    }

    async fn delete_task(&self, id: Uuid) -> DomainResult<()> {
        self.tasks.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }
}

/// In-memory mock for `StockRequestRepository`.
#[derive(Default, Clone)]
pub struct MockStockRequestRepository {
    requests: Arc<Mutex<Vec<StockRequest>>>,
}

impl MockStockRequestRepository {
    pub fn new(requests: Vec<StockRequest>) -> Self {
        Self { requests: Arc::new(Mutex::new(requests)) }
    }
}

#[async_trait]
impl StockRequestRepository for MockStockRequestRepository {
    async fn list_stock_requests(&self) -> DomainResult<Vec<StockRequest>> {
        Ok(self.requests.lock().unwrap().clone())
    }

    async fn stock_requests_with_status(
        &self,
        status: StockStatus,
    ) -> DomainResult<Vec<StockRequest>> {
        Ok(self
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.status == status)
            .cloned()
            .collect())
    }

    async fn get_stock_request(&self, id: Uuid) -> DomainResult<StockRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| StaffHubError::NotFound(format!("stock request {id}")))
    }

    async fn add_stock_request(&self, request: StockRequest) -> DomainResult<()> {
        self.requests.lock().unwrap().push(request);
        Ok(())
    }

    async fn update_stock_request(&self, request: StockRequest) -> DomainResult<()> {
        let mut requests = self.requests.lock().unwrap();
        let existing = requests
            .iter_mut()
            .find(|r| r.id == request.id)
            .ok_or_else(|| StaffHubError::NotFound(format!("stock request {}", request.id)))?;
        *existing = request;
        Ok(())
    }
}
