pub mod data_source;
pub mod details;
pub mod list;

use entities::errors::ShiftsError;
use shared_kernel::observable::Subscription;

/// Waits for the next value on `subscription`. A feed whose publisher went
/// away without publishing surfaces as [`ShiftsError::NoData`].
pub async fn next_published<T: Clone>(
    subscription: &mut Subscription<T>,
) -> Result<T, ShiftsError> {
    subscription
        .changed()
        .await
        .map_err(|_| ShiftsError::NoData)
}
