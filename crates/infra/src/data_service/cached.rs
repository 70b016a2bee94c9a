//! Read-through caching decorator for the data service.
//!
//! Wraps any implementation of the repository ports with:
//! - a TTL + LRU cache per entity family, so repeated reads within the
//!   TTL window cost nothing
//! - single-flight coalescing, so a burst of identical reads costs one
//!   upstream call
//! - write invalidation with a generation counter, so a fetch that was
//!   already in flight when a write landed is returned to its callers but
//!   never cached

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use staffhub_common::cache::{AsyncCache, CacheConfig, CacheStats};
use staffhub_common::singleflight::SingleFlight;
use staffhub_core::{
    AppraisalRepository, EmployeeRepository, HolidayRequestRepository, ShiftRepository,
    StockRequestRepository, TaskRepository,
};
use staffhub_domain::{
    AppraisalRecord, CacheSettings, Employee, HolidayRequest, HolidayStatus, Result, Shift,
    StockRequest, StockStatus, ToDoTask,
};
use tracing::debug;
use uuid::Uuid;

/// One cached entity family: a keyed value cache, a coalescer, and a
/// generation counter bumped on every write.
struct ReadCache<T>
where
    T: Clone,
{
    prefix: &'static str,
    cache: AsyncCache<String, T>,
    flights: SingleFlight<String, Result<T>>,
    generation: AtomicU64,
}

impl<T> ReadCache<T>
where
    T: Clone + Send + Sync,
{
    fn new(prefix: &'static str, settings: &CacheSettings) -> Self {
        let config =
            CacheConfig::ttl_lru(Duration::from_millis(settings.ttl_ms), settings.max_entries);
        Self {
            prefix,
            cache: AsyncCache::new(config),
            flights: SingleFlight::new(),
            generation: AtomicU64::new(0),
        }
    }

    /// Serve `key` from the cache, or run `load` once for all concurrent
    /// callers and cache the result.
    ///
    /// The generation is sampled before the load starts. If a write bumps
    /// it while the load is in flight, the fetched value is still returned
    /// to callers but is not cached, since it may predate the write.
    async fn fetch<F, Fut>(&self, key: String, load: F) -> Result<T>
    where
        F: Fn() -> Fut + Send + Sync,
        Fut: Future<Output = Result<T>> + Send,
    {
        if let Some(hit) = self.cache.get(&key).await {
            return Ok(hit);
        }

        let generation = self.generation.load(Ordering::Acquire);
        let result = self.flights.run(key.clone(), load).await;

        if let Ok(value) = &result {
            if self.generation.load(Ordering::Acquire) == generation {
                self.cache.insert(key, value.clone()).await;
            } else {
                debug!(key = %self.prefix, "discarding stale fetch after write");
            }
        }

        result
    }

    /// Drop every cached entry for this family and advance the generation.
    async fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        let removed = self.cache.invalidate_prefix(self.prefix).await;
        debug!(prefix = self.prefix, removed, "cache invalidated after write");
    }

    fn key(&self, suffix: &str) -> String {
        format!("{}:{}", self.prefix, suffix)
    }
}

/// Caching decorator over a data service implementation.
///
/// Reads that return collections are cached and coalesced; reads by id and
/// all writes go straight through, with writes invalidating the entity
/// family they touch.
pub struct CachedDataService<S> {
    inner: Arc<S>,
    shifts: ReadCache<Vec<Shift>>,
    holidays: ReadCache<Vec<HolidayRequest>>,
    employees: ReadCache<Vec<Employee>>,
    appraisals: ReadCache<Vec<AppraisalRecord>>,
    tasks: ReadCache<Vec<ToDoTask>>,
    stock: ReadCache<Vec<StockRequest>>,
}

impl<S> CachedDataService<S> {
    pub fn new(inner: Arc<S>, settings: &CacheSettings) -> Self {
        Self {
            inner,
            shifts: ReadCache::new("shifts", settings),
            holidays: ReadCache::new("holidays", settings),
            employees: ReadCache::new("employees", settings),
            appraisals: ReadCache::new("appraisals", settings),
            tasks: ReadCache::new("tasks", settings),
            stock: ReadCache::new("stock", settings),
        }
    }

    /// Snapshot of hit/miss counters per entity family.
    pub fn cache_stats(&self) -> Vec<(&'static str, CacheStats)> {
        vec![
            ("shifts", self.shifts.cache.stats()),
            ("holidays", self.holidays.cache.stats()),
            ("employees", self.employees.cache.stats()),
            ("appraisals", self.appraisals.cache.stats()),
            ("tasks", self.tasks.cache.stats()),
            ("stock", self.stock.cache.stats()),
        ]
    }
}

#[async_trait]
impl<S> ShiftRepository for CachedDataService<S>
where
    S: ShiftRepository + 'static,
{
    async fn list_shifts(&self) -> Result<Vec<Shift>> {
        let inner = Arc::clone(&self.inner);
        self.shifts
            .fetch(self.shifts.key("all"), move || {
                let inner = Arc::clone(&inner);
                async move { inner.list_shifts().await }
            })
            .await
    }

    async fn shifts_in_range(&self, start_ns: i64, end_ns: i64) -> Result<Vec<Shift>> {
        let inner = Arc::clone(&self.inner);
        self.shifts
            .fetch(self.shifts.key(&format!("range:{start_ns}:{end_ns}")), move || {
                let inner = Arc::clone(&inner);
                async move { inner.shifts_in_range(start_ns, end_ns).await }
            })
            .await
    }

    async fn add_shift(&self, shift: Shift) -> Result<()> {
        self.inner.add_shift(shift).await?;
        self.shifts.invalidate().await;
        Ok(())
    }

    async fn update_shift(&self, shift: Shift) -> Result<()> {
        self.inner.update_shift(shift).await?;
        self.shifts.invalidate().await;
        Ok(())
    }

    async fn delete_shift(&self, id: Uuid) -> Result<()> {
        self.inner.delete_shift(id).await?;
        self.shifts.invalidate().await;
        Ok(())
    }
}

#[async_trait]
impl<S> HolidayRequestRepository for CachedDataService<S>
where
    S: HolidayRequestRepository + 'static,
{
    async fn list_holiday_requests(&self) -> Result<Vec<HolidayRequest>> {
        let inner = Arc::clone(&self.inner);
        self.holidays
            .fetch(self.holidays.key("all"), move || {
                let inner = Arc::clone(&inner);
                async move { inner.list_holiday_requests().await }
            })
            .await
    }

    async fn get_holiday_request(&self, id: Uuid) -> Result<HolidayRequest> {
        self.inner.get_holiday_request(id).await
    }

    async fn holiday_requests_for(&self, employee_id: Uuid) -> Result<Vec<HolidayRequest>> {
        let inner = Arc::clone(&self.inner);
        self.holidays
            .fetch(self.holidays.key(&format!("for:{employee_id}")), move || {
                let inner = Arc::clone(&inner);
                async move { inner.holiday_requests_for(employee_id).await }
            })
            .await
    }

    async fn holiday_requests_with_status(
        &self,
        status: HolidayStatus,
    ) -> Result<Vec<HolidayRequest>> {
        let inner = Arc::clone(&self.inner);
        self.holidays
            .fetch(self.holidays.key(&format!("status:{status}")), move || {
                let inner = Arc::clone(&inner);
                async move { inner.holiday_requests_with_status(status).await }
            })
            .await
    }

    async fn add_holiday_request(&self, request: HolidayRequest) -> Result<()> {
        self.inner.add_holiday_request(request).await?;
        self.holidays.invalidate().await;
        Ok(())
    }

    async fn update_holiday_request(&self, request: HolidayRequest) -> Result<()> {
        self.inner.update_holiday_request(request).await?;
        self.holidays.invalidate().await;
        Ok(())
    }
}

#[async_trait]
impl<S> EmployeeRepository for CachedDataService<S>
where
    S: EmployeeRepository + 'static,
{
    async fn list_employees(&self) -> Result<Vec<Employee>> {
        let inner = Arc::clone(&self.inner);
        self.employees
            .fetch(self.employees.key("all"), move || {
                let inner = Arc::clone(&inner);
                async move { inner.list_employees().await }
            })
            .await
    }

    async fn get_employee(&self, id: Uuid) -> Result<Employee> {
        self.inner.get_employee(id).await
    }

    async fn add_employee(&self, employee: Employee) -> Result<()> {
        self.inner.add_employee(employee).await?;
        self.employees.invalidate().await;
        Ok(())
    }

    async fn update_employee(&self, employee: Employee) -> Result<()> {
        self.inner.update_employee(employee).await?;
        self.employees.invalidate().await;
        Ok(())
    }
}

#[async_trait]
impl<S> AppraisalRepository for CachedDataService<S>
where
    S: AppraisalRepository + 'static,
{
    async fn appraisals_for(&self, employee_id: Uuid) -> Result<Vec<AppraisalRecord>> {
        let inner = Arc::clone(&self.inner);
        self.appraisals
            .fetch(self.appraisals.key(&format!("for:{employee_id}")), move || {
                let inner = Arc::clone(&inner);
                async move { inner.appraisals_for(employee_id).await }
            })
            .await
    }

    async fn get_appraisal(&self, id: Uuid) -> Result<AppraisalRecord> {
        self.inner.get_appraisal(id).await
    }

    async fn add_appraisal(&self, record: AppraisalRecord) -> Result<()> {
        self.inner.add_appraisal(record).await?;
        self.appraisals.invalidate().await;
        Ok(())
    }

    async fn update_appraisal(&self, record: AppraisalRecord) -> Result<()> {
        self.inner.update_appraisal(record).await?;
        self.appraisals.invalidate().await;
        Ok(())
    }
}

#[async_trait]
impl<S> TaskRepository for CachedDataService<S>
where
    S: TaskRepository + 'static,
{
    async fn list_tasks(&self) -> Result<Vec<ToDoTask>> {
        let inner = Arc::clone(&self.inner);
        self.tasks
            .fetch(self.tasks.key("all"), move || {
                let inner = Arc::clone(&inner);
                async move { inner.list_tasks().await }
            })
            .await
    }

    async fn get_task(&self, id: Uuid) -> Result<ToDoTask> {
        self.inner.get_task(id).await
    }

    async fn add_task(&self, task: ToDoTask) -> Result<()> {
        self.inner.add_task(task).await?;
        self.tasks.invalidate().await;
        Ok(())
    }

    async fn update_task(&self, task: ToDoTask) -> Result<()> {
        self.inner.update_task(task).await?;
        self.tasks.invalidate().await;
        Ok(())
    }

    async fn delete_task(&self, id: Uuid) -> Result<()> {
        self.inner.delete_task(id).await?;
        self.tasks.invalidate().await;
        Ok(())
    }
}

#[async_trait]
impl<S> StockRequestRepository for CachedDataService<S>
where
    S: StockRequestRepository + 'static,
{
    async fn list_stock_requests(&self) -> Result<Vec<StockRequest>> {
        let inner = Arc::clone(&self.inner);
        self.stock
            .fetch(self.stock.key("all"), move || {
                let inner = Arc::clone(&inner);
                async move { inner.list_stock_requests().await }
            })
            .await
    }

    async fn stock_requests_with_status(&self, status: StockStatus) -> Result<Vec<StockRequest>> {
        let inner = Arc::clone(&self.inner);
        self.stock
            .fetch(self.stock.key(&format!("status:{status}")), move || {
                let inner = Arc::clone(&inner);
                async move { inner.stock_requests_with_status(status).await }
            })
            .await
    }

    async fn get_stock_request(&self, id: Uuid) -> Result<StockRequest> {
        self.inner.get_stock_request(id).await
    }

    async fn add_stock_request(&self, request: StockRequest) -> Result<()> {
        self.inner.add_stock_request(request).await?;
        self.stock.invalidate().await;
        Ok(())
    }

    async fn update_stock_request(&self, request: StockRequest) -> Result<()> {
        self.inner.update_stock_request(request).await?;
        self.stock.invalidate().await;
        Ok(())
    }
}
