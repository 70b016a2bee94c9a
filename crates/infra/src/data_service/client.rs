//! REST endpoint mapping implementing the repository ports.

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use staffhub_core::{
    AppraisalRepository, EmployeeRepository, HolidayRequestRepository, ShiftRepository,
    StockRequestRepository, TaskRepository,
};
use staffhub_domain::{
    AppraisalRecord, DataServiceConfig, Employee, HolidayRequest, HolidayStatus, Result, Shift,
    StockRequest, StockStatus, ToDoTask,
};
use uuid::Uuid;

use crate::http::HttpClient;

/// REST client for the HR data service.
///
/// Maps each repository port onto its resource path; retries and the
/// status-to-error mapping live in [`HttpClient`]. One instance per base
/// URL; cheap to clone, so a single client can be shared by every service
/// through `Arc`.
#[derive(Clone)]
pub struct DataServiceClient {
    http: HttpClient,
    base_url: String,
}

impl DataServiceClient {
    /// Create a client from connection settings.
    ///
    /// # Errors
    /// Returns `StaffHubError::Config` when the underlying HTTP transport
    /// cannot be constructed.
    pub fn new(config: &DataServiceConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::from_config(config)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.http.get_json(&self.url(path)).await
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        self.http.send_json(Method::POST, &self.url(path), body).await
    }

    async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        self.http.send_json(Method::PUT, &self.url(path), body).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.http.delete(&self.url(path)).await
    }
}

#[async_trait]
impl ShiftRepository for DataServiceClient {
    async fn list_shifts(&self) -> Result<Vec<Shift>> {
        self.get_json("/shifts").await
    }

    async fn shifts_in_range(&self, start_ns: i64, end_ns: i64) -> Result<Vec<Shift>> {
        self.get_json(&format!("/shifts?start={start_ns}&end={end_ns}")).await
    }

    async fn add_shift(&self, shift: Shift) -> Result<()> {
        self.post("/shifts", &shift).await
    }

    async fn update_shift(&self, shift: Shift) -> Result<()> {
        self.put(&format!("/shifts/{}", shift.id), &shift).await
    }

    async fn delete_shift(&self, id: Uuid) -> Result<()> {
        self.delete(&format!("/shifts/{id}")).await
    }
}

#[async_trait]
impl HolidayRequestRepository for DataServiceClient {
    async fn list_holiday_requests(&self) -> Result<Vec<HolidayRequest>> {
        self.get_json("/holiday-requests").await
    }

    async fn get_holiday_request(&self, id: Uuid) -> Result<HolidayRequest> {
        self.get_json(&format!("/holiday-requests/{id}")).await
    }

    async fn holiday_requests_for(&self, employee_id: Uuid) -> Result<Vec<HolidayRequest>> {
        self.get_json(&format!("/holiday-requests?employee_id={employee_id}")).await
    }

    async fn holiday_requests_with_status(
        &self,
        status: HolidayStatus,
    ) -> Result<Vec<HolidayRequest>> {
        self.get_json(&format!("/holiday-requests?status={status}")).await
    }

    async fn add_holiday_request(&self, request: HolidayRequest) -> Result<()> {
        self.post("/holiday-requests", &request).await
    }

    async fn update_holiday_request(&self, request: HolidayRequest) -> Result<()> {
        self.put(&format!("/holiday-requests/{}", request.id), &request).await
    }
}

#[async_trait]
impl EmployeeRepository for DataServiceClient {
    async fn list_employees(&self) -> Result<Vec<Employee>> {
        self.get_json("/employees").await
    }

    async fn get_employee(&self, id: Uuid) -> Result<Employee> {
        self.get_json(&format!("/employees/{id}")).await
    }

    async fn add_employee(&self, employee: Employee) -> Result<()> {
        self.post("/employees", &employee).await
    }

    async fn update_employee(&self, employee: Employee) -> Result<()> {
        self.put(&format!("/employees/{}", employee.id), &employee).await
    }
}

#[async_trait]
impl AppraisalRepository for DataServiceClient {
    async fn appraisals_for(&self, employee_id: Uuid) -> Result<Vec<AppraisalRecord>> {
        self.get_json(&format!("/appraisals?employee_id={employee_id}")).await
    }

    async fn get_appraisal(&self, id: Uuid) -> Result<AppraisalRecord> {
        self.get_json(&format!("/appraisals/{id}")).await
    }

    async fn add_appraisal(&self, record: AppraisalRecord) -> Result<()> {
        self.post("/appraisals", &record).await
    }

    async fn update_appraisal(&self, record: AppraisalRecord) -> Result<()> {
        self.put(&format!("/appraisals/{}", record.id), &record).await
    }
}

#[async_trait]
impl TaskRepository for DataServiceClient {
    async fn list_tasks(&self) -> Result<Vec<ToDoTask>> {
        self.get_json("/tasks").await
    }

    async fn get_task(&self, id: Uuid) -> Result<ToDoTask> {
        self.get_json(&format!("/tasks/{id}")).await
    }

    async fn add_task(&self, task: ToDoTask) -> Result<()> {
        self.post("/tasks", &task).await
    }

    async fn update_task(&self, task: ToDoTask) -> Result<()> {
        self.put(&format!("/tasks/{}", task.id), &task).await
    }

    async fn delete_task(&self, id: Uuid) -> Result<()> {
        self.delete(&format!("/tasks/{id}")).await
    }
}

#[async_trait]
impl StockRequestRepository for DataServiceClient {
    async fn list_stock_requests(&self) -> Result<Vec<StockRequest>> {
        self.get_json("/stock-requests").await
    }

    async fn stock_requests_with_status(&self, status: StockStatus) -> Result<Vec<StockRequest>> {
        self.get_json(&format!("/stock-requests?status={status}")).await
    }

    async fn get_stock_request(&self, id: Uuid) -> Result<StockRequest> {
        self.get_json(&format!("/stock-requests/{id}")).await
    }

    async fn add_stock_request(&self, request: StockRequest) -> Result<()> {
        self.post("/stock-requests", &request).await
    }

    async fn update_stock_request(&self, request: StockRequest) -> Result<()> {
        self.put(&format!("/stock-requests/{}", request.id), &request).await
    }
}
