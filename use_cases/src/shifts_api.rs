use async_trait::async_trait;
use chrono::{DateTime, Utc};
use entities::errors::ShiftsError;
use entities::shifts::Shift;
#[cfg(test)]
use mockall::automock;
use shared_kernel::date_time::time_frame::TimeFrame;
use shared_kernel::non_empty_string;

non_empty_string!(Address);

/// The layouts the available shifts endpoint can group its days by.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResponseType {
    Week,
    FourDay,
    List,
}

impl ResponseType {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            ResponseType::Week => "week",
            ResponseType::FourDay => "4Day",
            ResponseType::List => "list",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShiftsQuery {
    pub response_type: ResponseType,
    pub window: TimeFrame<DateTime<Utc>>,
    pub address: Address,
    /// Miles around `address`. The server falls back to 150 when absent.
    pub radius: Option<f32>,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ShiftsApi: Send + Sync {
    async fn fetch_shifts(&self, query: ShiftsQuery) -> Result<Vec<Shift>, ShiftsError>;
}
