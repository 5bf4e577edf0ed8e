use serde::{Deserialize, Serialize};

/// A closed `[from, to]` range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeFrame<T> {
    pub from: T,
    pub to: T,
}

impl<T: PartialOrd> TimeFrame<T> {
    pub fn contains(&self, value: &T) -> bool {
        &self.from <= value && value <= &self.to
    }
}
