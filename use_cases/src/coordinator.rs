use crate::shifts::details::ShiftDetails;
use crate::shifts::list::RootEvent;
use shared_kernel::date_time::calendar::Calendar;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    ShiftList,
    ShiftDetails(ShiftDetails),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailsEvent {
    Dismissed,
}

/// A stack of screens; the bottom one is the root and is never dismissed.
#[derive(Debug, Default)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Navigator {
    pub fn set(&mut self, screens: Vec<Screen>) {
        self.stack = screens;
    }

    pub fn present(&mut self, screen: Screen) {
        self.stack.push(screen);
    }

    pub fn dismiss_presented(&mut self) -> Option<Screen> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    pub fn top(&self) -> Option<&Screen> {
        self.stack.last()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

pub struct ShiftsCoordinator {
    navigator: Navigator,
    calendar: Calendar,
}

impl ShiftsCoordinator {
    pub fn new(calendar: Calendar) -> Self {
        Self {
            navigator: Navigator::default(),
            calendar,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn begin(&mut self) {
        self.navigator.set(vec![Screen::ShiftList]);
    }

    pub fn handle_root_event(&mut self, event: RootEvent) {
        match event {
            RootEvent::ItemSelected(shift) => {
                tracing::debug!(shift_id = %shift.shift_id, "presenting shift details");
                let details = ShiftDetails::new(&shift, &self.calendar);
                self.navigator.present(Screen::ShiftDetails(details));
            }
        }
    }

    pub fn handle_details_event(&mut self, event: DetailsEvent) {
        match event {
            DetailsEvent::Dismissed => {
                self.navigator.dismiss_presented();
            }
        }
    }
}
