use crate::shifts::data_source::ShiftsDataSource;
use crate::shifts::details::normalized_time_text;
use entities::shifts::{Shift, ShiftId};
use shared_kernel::observable::{Observable, Subscription};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

/// One row of the shifts list.
///
/// `id` is regenerated on every mapping pass and is only good for telling rows
/// apart in a single render. `model_id` is the stable identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShiftDisplayable {
    pub id: Uuid,
    pub model_id: ShiftId,
    pub time_text: String,
    pub timezone_text: String,
    pub is_premium_rate: bool,
    pub is_covid: bool,
    pub shift_kind: String,
}

impl From<&Shift> for ShiftDisplayable {
    fn from(shift: &Shift) -> Self {
        Self {
            id: Uuid::new_v4(),
            model_id: shift.shift_id,
            time_text: normalized_time_text(
                &shift.normalized_start_date_time,
                &shift.normalized_end_date_time,
            ),
            timezone_text: shift.timezone.clone(),
            is_premium_rate: shift.premium_rate,
            is_covid: shift.covid,
            shift_kind: shift.shift_kind.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ready {
    pub is_loading_more: bool,
    pub shifts: Vec<ShiftDisplayable>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Error(String),
    Ready(Ready),
}

impl ViewState {
    pub fn current_ready(&self) -> Option<&Ready> {
        match self {
            ViewState::Ready(ready) => Some(ready),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    ViewAppeared,
    /// Same as `ViewAppeared`.
    PullToRefresh,
    ScrolledToBottom,
    ItemSelected(ShiftDisplayable),
    NoOp,
}

/// Events for whoever coordinates the screens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RootEvent {
    ItemSelected(Shift),
}

pub struct ShiftsListViewModel {
    data_source: Arc<dyn ShiftsDataSource>,
    view_state: Observable<ViewState>,
    events: UnboundedSender<RootEvent>,
}

impl ShiftsListViewModel {
    pub fn new(data_source: Arc<dyn ShiftsDataSource>, events: UnboundedSender<RootEvent>) -> Self {
        Self {
            data_source,
            view_state: Observable::new(ViewState::Loading),
            events,
        }
    }

    pub fn view_state(&self) -> ViewState {
        self.view_state.current()
    }

    /// Every state the list goes through, for the renderer.
    pub fn state(&self) -> Subscription<ViewState> {
        self.view_state.subscribe()
    }

    /// Handles one action to completion. Taking `&mut self` keeps a second
    /// action from starting while this one is still fetching.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn send(&mut self, action: Action) {
        match action {
            Action::ViewAppeared | Action::PullToRefresh => self.load_initial().await,
            Action::ScrolledToBottom => self.load_next().await,
            Action::ItemSelected(item) => self.select(&item),
            Action::NoOp => {}
        }
    }

    async fn load_initial(&mut self) {
        self.view_state.publish(ViewState::Loading);
        let state = match self.data_source.fetch_initial().await {
            Ok(()) => self.ready(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch the first page of shifts");
                ViewState::Error(err.to_string())
            }
        };
        self.view_state.publish(state);
    }

    async fn load_next(&mut self) {
        let mut ready = match self.view_state.current() {
            ViewState::Ready(ready) => ready,
            state => {
                tracing::debug!(?state, "ignoring scroll to bottom, the list is not ready");
                return;
            }
        };
        ready.is_loading_more = true;
        self.view_state.publish(ViewState::Ready(ready));

        let state = match self.data_source.fetch_next().await {
            Ok(()) => self.ready(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch the next page of shifts");
                ViewState::Error(err.to_string())
            }
        };
        self.view_state.publish(state);
    }

    fn select(&self, item: &ShiftDisplayable) {
        let selected = self
            .data_source
            .current_accumulated()
            .into_iter()
            .find(|shift| shift.shift_id == item.model_id);

        match selected {
            Some(shift) => {
                if self.events.send(RootEvent::ItemSelected(shift)).is_err() {
                    tracing::warn!(model_id = %item.model_id, "nobody is listening for selections");
                }
            }
            None => tracing::debug!(model_id = %item.model_id, "selected shift is no longer listed"),
        }
    }

    fn ready(&self) -> ViewState {
        let shifts = self
            .data_source
            .change_feed()
            .latest()
            .iter()
            .map(ShiftDisplayable::from)
            .collect();
        ViewState::Ready(Ready {
            is_loading_more: false,
            shifts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, Ready, RootEvent, ShiftDisplayable, ShiftsListViewModel, ViewState};
    use crate::fixtures::{preview_now, shift, shifts};
    use crate::shifts::data_source::{
        MockShiftsDataSource, ShiftsDataSourceConfig, ShiftsDataSourceImpl,
    };
    use crate::shifts_api::MockShiftsApi;
    use entities::errors::{NetworkError, ShiftsError};
    use entities::shifts::Shift;
    use shared_kernel::date_time::time_source::FixedTimeSource;
    use shared_kernel::observable::{Observable, Subscription};
    use std::sync::Arc;
    use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver};

    fn view_model(
        data_source: MockShiftsDataSource,
    ) -> (ShiftsListViewModel, UnboundedReceiver<RootEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (ShiftsListViewModel::new(Arc::new(data_source), sender), receiver)
    }

    fn model_ids(state: &ViewState) -> Vec<i64> {
        state
            .current_ready()
            .map(|ready| ready.shifts.iter().map(|item| item.model_id.inner()).collect())
            .unwrap_or_default()
    }

    /// A data source whose feed already holds `listed`.
    fn listing(listed: Vec<Shift>) -> MockShiftsDataSource {
        let feed = Observable::new(listed.clone());
        let mut data_source = MockShiftsDataSource::new();
        data_source
            .expect_change_feed()
            .returning(move || feed.subscribe());
        data_source
            .expect_current_accumulated()
            .returning(move || listed.clone());
        data_source
    }

    #[tokio::test]
    async fn test_view_appeared_shows_the_fetched_shifts() {
        let mut data_source = listing(shifts(&[1, 2]));
        data_source.expect_fetch_initial().times(1).returning(|| Ok(()));
        let (mut view_model, _events) = view_model(data_source);
        assert_eq!(view_model.view_state(), ViewState::Loading);

        view_model.send(Action::ViewAppeared).await;

        let state = view_model.view_state();
        assert_eq!(model_ids(&state), vec![1, 2]);
        assert_eq!(state.current_ready().map(|ready| ready.is_loading_more), Some(false));
    }

    #[tokio::test]
    async fn test_refresh_shows_loading_while_fetching() {
        let mut data_source = listing(shifts(&[1]));
        let states = Arc::new(std::sync::Mutex::new(None::<Subscription<ViewState>>));
        let during_fetch = states.clone();
        data_source.expect_fetch_initial().times(2).returning(move || {
            if let Some(states) = during_fetch.lock().unwrap().as_mut() {
                assert_eq!(states.latest(), ViewState::Loading);
            }
            Ok(())
        });
        let (mut view_model, _events) = view_model(data_source);
        view_model.send(Action::ViewAppeared).await;
        assert!(view_model.view_state().current_ready().is_some());
        *states.lock().unwrap() = Some(view_model.state());

        view_model.send(Action::PullToRefresh).await;

        assert_eq!(model_ids(&view_model.view_state()), vec![1]);
    }

    #[tokio::test]
    async fn test_failed_fetch_shows_the_error() {
        let mut data_source = MockShiftsDataSource::new();
        data_source
            .expect_fetch_initial()
            .returning(|| Err(NetworkError::BadResponse(503).into()));
        let (mut view_model, _events) = view_model(data_source);

        view_model.send(Action::ViewAppeared).await;

        match view_model.view_state() {
            ViewState::Error(message) => assert!(message.contains("503"), "{message}"),
            state => panic!("expected an error, got {state:?}"),
        }
    }

    #[tokio::test]
    async fn test_scrolling_while_loading_is_ignored() {
        // no expectations: any call on the data source would panic
        let (mut view_model, _events) = view_model(MockShiftsDataSource::new());

        view_model.send(Action::ScrolledToBottom).await;

        assert_eq!(view_model.view_state(), ViewState::Loading);
    }

    #[tokio::test]
    async fn test_scrolling_after_an_error_is_ignored() {
        let mut data_source = MockShiftsDataSource::new();
        data_source
            .expect_fetch_initial()
            .times(1)
            .returning(|| Err(ShiftsError::CannotComputeWindow));
        let (mut view_model, _events) = view_model(data_source);
        view_model.send(Action::ViewAppeared).await;
        let failed = view_model.view_state();

        view_model.send(Action::ScrolledToBottom).await;

        assert_eq!(view_model.view_state(), failed);
    }

    #[tokio::test]
    async fn test_scrolling_marks_the_list_as_loading_more_until_the_page_arrives() {
        let feed = Arc::new(Observable::new(shifts(&[1])));
        let mut data_source = MockShiftsDataSource::new();
        let subscribed = feed.clone();
        data_source
            .expect_change_feed()
            .returning(move || subscribed.subscribe());
        data_source.expect_fetch_initial().returning(|| Ok(()));

        let (sender, _events) = mpsc::unbounded_channel();
        let states = Arc::new(std::sync::Mutex::new(None::<Subscription<ViewState>>));
        let during_fetch = states.clone();
        let publisher = feed.clone();
        data_source.expect_fetch_next().times(1).returning(move || {
            let mut guard = during_fetch.lock().unwrap();
            let states = guard.as_mut().expect("state subscription");
            let state = states.latest();
            let ready = state.current_ready().expect("ready while loading more");
            assert!(ready.is_loading_more);
            assert_eq!(ready.shifts.len(), 1);
            publisher.publish(shifts(&[2, 1]));
            Ok(())
        });

        let mut view_model = ShiftsListViewModel::new(Arc::new(data_source), sender);
        view_model.send(Action::ViewAppeared).await;
        *states.lock().unwrap() = Some(view_model.state());

        view_model.send(Action::ScrolledToBottom).await;

        let state = view_model.view_state();
        assert_eq!(model_ids(&state), vec![2, 1]);
        assert_eq!(state.current_ready().map(|ready| ready.is_loading_more), Some(false));
    }

    #[tokio::test]
    async fn test_failed_next_page_shows_the_error() {
        let mut data_source = listing(shifts(&[1]));
        data_source.expect_fetch_initial().returning(|| Ok(()));
        data_source
            .expect_fetch_next()
            .returning(|| Err(ShiftsError::FetchInProgress));
        let (mut view_model, _events) = view_model(data_source);
        view_model.send(Action::ViewAppeared).await;

        view_model.send(Action::ScrolledToBottom).await;

        assert_eq!(
            view_model.view_state(),
            ViewState::Error(ShiftsError::FetchInProgress.to_string())
        );
    }

    #[tokio::test]
    async fn test_selecting_a_listed_shift_emits_it_to_the_coordinator() {
        let mut data_source = listing(shifts(&[1, 2]));
        data_source.expect_fetch_initial().returning(|| Ok(()));
        let (mut view_model, mut events) = view_model(data_source);
        view_model.send(Action::ViewAppeared).await;
        let before = view_model.view_state();
        let item = before.current_ready().unwrap().shifts[1].clone();

        view_model.send(Action::ItemSelected(item)).await;

        assert_eq!(events.try_recv(), Ok(RootEvent::ItemSelected(shift(2))));
        assert_eq!(view_model.view_state(), before);
    }

    #[tokio::test]
    async fn test_selecting_an_unknown_shift_does_nothing() {
        let mut data_source = listing(shifts(&[1, 2]));
        data_source.expect_fetch_initial().returning(|| Ok(()));
        let (mut view_model, mut events) = view_model(data_source);
        view_model.send(Action::ViewAppeared).await;
        let before = view_model.view_state();
        let stale = ShiftDisplayable::from(&shift(99));

        view_model.send(Action::ItemSelected(stale)).await;
        view_model.send(Action::NoOp).await;

        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
        assert_eq!(view_model.view_state(), before);
    }

    #[test]
    fn test_display_ids_are_fresh_for_every_mapping() {
        let shift = shift(5);
        let first = ShiftDisplayable::from(&shift);
        let second = ShiftDisplayable::from(&shift);
        assert_ne!(first.id, second.id);
        assert_eq!(first.model_id, second.model_id);
        assert_eq!(first.time_text, "2022-04-02 08:00-2022-04-02 16:00");
        assert_eq!(first.timezone_text, "Central");
    }

    #[tokio::test]
    async fn test_view_appeared_with_a_fixed_clock_lists_the_first_page() {
        let mut api = MockShiftsApi::new();
        api.expect_fetch_shifts()
            .returning(|_| Ok(shifts(&[1, 2])));
        let data_source = ShiftsDataSourceImpl::new(
            Arc::new(api),
            Arc::new(FixedTimeSource::at(preview_now())),
            ShiftsDataSourceConfig {
                address: "Dallas, TX".try_into().unwrap(),
                radius: None,
            },
        );
        let (sender, _events) = mpsc::unbounded_channel();
        let mut view_model = ShiftsListViewModel::new(Arc::new(data_source), sender);

        view_model.send(Action::ViewAppeared).await;

        let state = view_model.view_state();
        assert_eq!(model_ids(&state), vec![1, 2]);
        assert!(matches!(
            state,
            ViewState::Ready(Ready {
                is_loading_more: false,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_pages_are_listed_newest_batch_first() {
        let mut api = MockShiftsApi::new();
        api.expect_fetch_shifts()
            .withf(|query| query.window.from == preview_now())
            .returning(|_| Ok(shifts(&[1, 2])));
        api.expect_fetch_shifts()
            .withf(|query| query.window.from != preview_now())
            .returning(|_| Ok(shifts(&[3])));
        let data_source = ShiftsDataSourceImpl::new(
            Arc::new(api),
            Arc::new(FixedTimeSource::at(preview_now())),
            ShiftsDataSourceConfig {
                address: "Dallas, TX".try_into().unwrap(),
                radius: Some(25.0),
            },
        );
        let (sender, _events) = mpsc::unbounded_channel();
        let mut view_model = ShiftsListViewModel::new(Arc::new(data_source), sender);

        view_model.send(Action::ViewAppeared).await;
        view_model.send(Action::ScrolledToBottom).await;

        assert_eq!(model_ids(&view_model.view_state()), vec![3, 1, 2]);
    }
}
