//! # StaffHub Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Week partitioning, rota and payroll aggregation, appraisal projection
//! - Port/adapter interfaces (traits) over the remote data service
//! - Thin services wiring ports to the pure functions
//!
//! ## Architecture Principles
//! - Only depends on `staffhub-common` and `staffhub-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - Aggregation functions are pure and synchronous; suspension happens
//!   only at the data-fetch boundary that feeds them

pub mod appraisals;
pub mod inventory;
pub mod leave;
pub mod payroll;
pub mod scheduling;
pub mod tasks;

// Re-export specific items to avoid ambiguity
pub use appraisals::ports::AppraisalRepository;
pub use appraisals::projector::{project, AppraisalProjection, AppraisalStatus};
pub use appraisals::AppraisalService;
pub use inventory::ports::StockRequestRepository;
pub use inventory::InventoryService;
pub use leave::ports::HolidayRequestRepository;
pub use leave::LeaveService;
pub use payroll::aggregator::{aggregate, DateRange};
pub use payroll::ports::EmployeeRepository;
pub use payroll::PayrollService;
pub use scheduling::ports::ShiftRepository;
pub use scheduling::rota::{build_week_rota, DayRoster};
pub use scheduling::week::week_dates;
pub use scheduling::RotaService;
pub use tasks::ports::TaskRepository;
pub use tasks::TaskService;
