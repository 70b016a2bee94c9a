//! Rota service - weekly scheduling business logic

use std::sync::Arc;

use chrono::NaiveDate;
use staffhub_domain::{Result, Shift};
use tracing::debug;

use super::ports::ShiftRepository;
use super::rota::{build_week_rota, DayRoster};
use super::week::{week_bounds, week_dates};

/// Weekly rota service.
pub struct RotaService {
    shifts: Arc<dyn ShiftRepository>,
}

impl RotaService {
    pub fn new(shifts: Arc<dyn ShiftRepository>) -> Self {
        Self { shifts }
    }

    /// The weekly rota grid for the business week containing `reference`.
    pub async fn week_rota(&self, reference: NaiveDate) -> Result<Vec<DayRoster>> {
        let week = week_dates(reference);
        let (start, end) = week_bounds(reference)?;
        let shifts = self.shifts.shifts_in_range(start, end).await?;
        debug!(reference = %reference, shift_count = shifts.len(), "building week rota");
        Ok(build_week_rota(&week, &shifts))
    }

    /// Create a shift after checking its invariants.
    pub async fn schedule_shift(&self, shift: Shift) -> Result<()> {
        shift.validate()?;
        self.shifts.add_shift(shift).await
    }

    /// Replace a shift wholesale after checking its invariants.
    pub async fn reschedule_shift(&self, shift: Shift) -> Result<()> {
        shift.validate()?;
        self.shifts.update_shift(shift).await
    }
}
