use crate::commands::Command;
use crate::configuration::Settings;
use crate::render;
use anyhow::Context;
use shared_kernel::date_time::calendar::Calendar;
use shared_kernel::date_time::time_source::{RealTimeSource, TimeSource};
use shared_kernel::observable::Subscription;
use shifts_api::{AvailableShiftsClient, AvailableShiftsConfig};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use use_cases::coordinator::{DetailsEvent, ShiftsCoordinator};
use use_cases::shifts::data_source::{ShiftsDataSourceConfig, ShiftsDataSourceImpl};
use use_cases::shifts::list::{Action, RootEvent, ShiftsListViewModel, ViewState};
use use_cases::shifts::next_published;
use use_cases::shifts_api::ShiftsApi;

/// The terminal front end: one list screen with a details screen pushed on top.
pub struct App {
    view_model: ShiftsListViewModel,
    coordinator: ShiftsCoordinator,
    root_events: UnboundedReceiver<RootEvent>,
}

impl App {
    pub fn from_settings(settings: &Settings) -> Self {
        let calendar = Calendar::new(settings.calendar.timezone);
        let api = AvailableShiftsClient::new(AvailableShiftsConfig {
            host: settings.shifts_api.host.clone(),
            legacy_radius_key: settings.shifts_api.legacy_radius_key,
        });
        let config = ShiftsDataSourceConfig {
            address: settings.shifts_api.address.clone(),
            radius: settings.shifts_api.radius,
        };
        App::new(Arc::new(api), Arc::new(RealTimeSource::new(calendar)), config)
    }

    pub fn new(
        api: Arc<dyn ShiftsApi>,
        time_source: Arc<dyn TimeSource>,
        config: ShiftsDataSourceConfig,
    ) -> Self {
        let calendar = time_source.calendar();
        let data_source = ShiftsDataSourceImpl::new(api, time_source, config);
        let (sender, root_events) = mpsc::unbounded_channel();
        Self {
            view_model: ShiftsListViewModel::new(Arc::new(data_source), sender),
            coordinator: ShiftsCoordinator::new(calendar),
            root_events,
        }
    }

    /// Reads one command per line from `input` until it runs dry or the user
    /// quits, rendering the top screen to `output` after each one.
    pub async fn run<R, W>(mut self, input: R, output: &mut W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        tokio::spawn(trace_state_changes(self.view_model.state()));

        self.coordinator.begin();
        self.view_model.send(Action::ViewAppeared).await;
        self.render(output)?;

        let mut lines = input.lines();
        while let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read from input")?
        {
            if line.trim().is_empty() {
                continue;
            }
            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => writeln!(output, "{}", render::HELP)?,
                Ok(command) => {
                    if let Some(message) = self.apply(command).await {
                        writeln!(output, "{message}")?;
                    }
                    self.render(output)?;
                }
                Err(message) => writeln!(output, "{message}")?,
            }
        }
        output.flush().context("Failed to flush output")?;
        Ok(())
    }

    /// Returns a message for the user when the command could not be applied.
    async fn apply(&mut self, command: Command) -> Option<String> {
        match command {
            Command::Refresh => self.view_model.send(Action::PullToRefresh).await,
            Command::More => self.view_model.send(Action::ScrolledToBottom).await,
            Command::Open(row) => {
                if self.coordinator.navigator().depth() > 1 {
                    return Some("go `back` to the list first".to_string());
                }
                let item = match self.view_model.view_state() {
                    ViewState::Ready(ready) => ready.shifts.get(row - 1).cloned(),
                    _ => None,
                };
                match item {
                    Some(item) => self.view_model.send(Action::ItemSelected(item)).await,
                    None => return Some(format!("there is no shift number {row}")),
                }
            }
            Command::Back => self.coordinator.handle_details_event(DetailsEvent::Dismissed),
            Command::Help | Command::Quit => {}
        }

        while let Ok(event) = self.root_events.try_recv() {
            self.coordinator.handle_root_event(event);
        }
        None
    }

    fn render<W: Write>(&self, output: &mut W) -> anyhow::Result<()> {
        let list = self.view_model.view_state();
        let text = match self.coordinator.navigator().top() {
            Some(screen) => render::screen(screen, &list),
            None => render::shift_list(&list),
        };
        write!(output, "{text}> ").context("Failed to write to output")?;
        output.flush().context("Failed to flush output")
    }
}

async fn trace_state_changes(mut states: Subscription<ViewState>) {
    while let Ok(state) = next_published(&mut states).await {
        match state {
            ViewState::Loading => tracing::debug!("shifts list is loading"),
            ViewState::Error(error) => tracing::info!(%error, "shifts list failed"),
            ViewState::Ready(ready) => tracing::debug!(
                shifts = ready.shifts.len(),
                is_loading_more = ready.is_loading_more,
                "shifts list is ready"
            ),
        }
    }
    tracing::debug!("shifts list closed");
}
