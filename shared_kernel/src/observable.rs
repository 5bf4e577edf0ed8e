use thiserror::Error;
use tokio::sync::watch;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("the observed value was dropped before publishing again")]
pub struct ObservableClosed;

/// A value with exactly two primitives: read what it holds now, or subscribe
/// and wait for whatever gets published next.
#[derive(Debug)]
pub struct Observable<T> {
    sender: watch::Sender<T>,
}

impl<T: Clone> Observable<T> {
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    pub fn current(&self) -> T {
        self.sender.borrow().clone()
    }

    /// Replaces the value and wakes every subscriber, even when nobody is
    /// subscribed yet.
    pub fn publish(&self, value: T) {
        self.sender.send_replace(value);
    }

    pub fn subscribe(&self) -> Subscription<T> {
        Subscription {
            receiver: self.sender.subscribe(),
        }
    }
}

impl<T: Clone + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[derive(Debug, Clone)]
pub struct Subscription<T> {
    receiver: watch::Receiver<T>,
}

impl<T: Clone> Subscription<T> {
    /// The value held at this moment.
    pub fn latest(&mut self) -> T {
        self.receiver.borrow_and_update().clone()
    }

    /// Waits for the next publish. Publishes that happen between two calls are
    /// coalesced into the most recent one.
    pub async fn changed(&mut self) -> Result<T, ObservableClosed> {
        self.receiver.changed().await.map_err(|_| ObservableClosed)?;
        Ok(self.receiver.borrow_and_update().clone())
    }
}
