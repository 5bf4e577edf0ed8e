use crate::shifts_api::{Address, ResponseType, ShiftsApi, ShiftsQuery};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use entities::errors::ShiftsError;
use entities::shifts::Shift;
#[cfg(test)]
use mockall::automock;
use shared_kernel::date_time::time_frame::TimeFrame;
use shared_kernel::date_time::time_source::TimeSource;
use shared_kernel::observable::{Observable, Subscription};
use std::sync::Arc;
use tokio::sync::Mutex;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ShiftsDataSource: Send + Sync {
    /// Everything fetched so far, newest batch first.
    fn current_accumulated(&self) -> Vec<Shift>;

    /// Holds the accumulated list and is republished after every successful fetch.
    fn change_feed(&self) -> Subscription<Vec<Shift>>;

    /// Moves the cursor back to now and fetches the rest of the current week.
    async fn fetch_initial(&self) -> Result<(), ShiftsError>;

    /// Moves the cursor one week forward and fetches that week.
    async fn fetch_next(&self) -> Result<(), ShiftsError>;
}

#[derive(Clone, Debug)]
pub struct ShiftsDataSourceConfig {
    pub address: Address,
    pub radius: Option<f32>,
}

/// Walks forward through the calendar one week per page.
///
/// The cursor lock doubles as the in-flight guard: a fetch requested while
/// another one holds it fails with [`ShiftsError::FetchInProgress`] and
/// changes nothing.
pub struct ShiftsDataSourceImpl {
    api: Arc<dyn ShiftsApi>,
    time_source: Arc<dyn TimeSource>,
    config: ShiftsDataSourceConfig,
    selected_date: Mutex<DateTime<Utc>>,
    accumulated: Observable<Vec<Shift>>,
}

impl ShiftsDataSourceImpl {
    pub fn new(
        api: Arc<dyn ShiftsApi>,
        time_source: Arc<dyn TimeSource>,
        config: ShiftsDataSourceConfig,
    ) -> Self {
        let now = time_source.now();
        Self {
            api,
            time_source,
            config,
            selected_date: Mutex::new(now),
            accumulated: Observable::new(vec![]),
        }
    }

    pub async fn selected_date(&self) -> DateTime<Utc> {
        *self.selected_date.lock().await
    }

    /// Starts at the beginning of the selected week, or now if that is later,
    /// and runs to the last second of that week.
    pub fn window(
        &self,
        selected_date: DateTime<Utc>,
    ) -> Result<TimeFrame<DateTime<Utc>>, ShiftsError> {
        let calendar = self.time_source.calendar();
        let week_start = calendar
            .start_of_week(selected_date)
            .and_then(|start| calendar.start_of_day(start))
            .ok_or(ShiftsError::CannotComputeWindow)?;
        let from = self.time_source.now().max(week_start);
        let to = calendar
            .end_of_week(from)
            .and_then(|end| calendar.end_of_day(end))
            .ok_or(ShiftsError::CannotComputeWindow)?;
        Ok(TimeFrame { from, to })
    }

    #[tracing::instrument(err, skip(self), level = "info")]
    async fn fetch_window(&self, selected_date: DateTime<Utc>) -> Result<(), ShiftsError> {
        let window = self.window(selected_date)?;
        let query = ShiftsQuery {
            response_type: ResponseType::Week,
            window,
            address: self.config.address.clone(),
            radius: self.config.radius,
        };
        let batch = self.api.fetch_shifts(query).await?;
        tracing::debug!(fetched = batch.len(), "prepending fetched shifts");

        let accumulated = batch
            .into_iter()
            .chain(self.accumulated.current())
            .collect();
        self.accumulated.publish(accumulated);
        Ok(())
    }
}

#[async_trait]
impl ShiftsDataSource for ShiftsDataSourceImpl {
    fn current_accumulated(&self) -> Vec<Shift> {
        self.accumulated.current()
    }

    fn change_feed(&self) -> Subscription<Vec<Shift>> {
        self.accumulated.subscribe()
    }

    async fn fetch_initial(&self) -> Result<(), ShiftsError> {
        let mut selected_date = self
            .selected_date
            .try_lock()
            .map_err(|_| ShiftsError::FetchInProgress)?;
        *selected_date = self.time_source.now();
        self.fetch_window(*selected_date).await
    }

    async fn fetch_next(&self) -> Result<(), ShiftsError> {
        let mut selected_date = self
            .selected_date
            .try_lock()
            .map_err(|_| ShiftsError::FetchInProgress)?;
        *selected_date = self
            .time_source
            .calendar()
            .add_weeks(*selected_date, 1)
            .ok_or(ShiftsError::CannotComputeWindow)?;
        self.fetch_window(*selected_date).await
    }
}
