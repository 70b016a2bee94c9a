//! Domain types and models
//!
//! Every entity is an immutable-by-replacement record: updates replace the
//! whole record at the data service, there is no partial in-place mutation.

pub mod appraisal;
pub mod employee;
pub mod inventory;
pub mod leave;
pub mod payroll;
pub mod scheduling;
pub mod tasks;

pub use appraisal::AppraisalRecord;
pub use employee::{AccessRole, Employee};
pub use inventory::{StockRequest, StockStatus};
pub use leave::{HolidayRequest, HolidayStatus};
pub use payroll::{PayrollReport, PayrollTotals};
pub use scheduling::{Shift, ShiftCategory};
pub use tasks::{TaskAssignee, TaskRecurrence, ToDoTask};
