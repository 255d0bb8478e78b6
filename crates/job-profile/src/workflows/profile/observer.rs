use std::sync::{Mutex, PoisonError};

/// Outbound boundary of a profile step.
///
/// Steps notify synchronously, in the same order as the operations that
/// triggered them. Implementations take `&self` so one observer can be shared
/// behind an `Arc` by the step and its owner.
pub trait StepObserver<T>: Send + Sync {
    fn changed(&self, value: &T);
    fn back(&self);
    fn complete(&self) {}
}

/// Notification emitted by a step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepEvent<T> {
    Changed(T),
    Back,
    Completed,
}

/// Observer that records every notification for later inspection.
#[derive(Debug)]
pub struct EventLog<T> {
    events: Mutex<Vec<StepEvent<T>>>,
}

impl<T> Default for EventLog<T> {
    fn default() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }
}

impl<T: Clone> EventLog<T> {
    pub fn events(&self) -> Vec<StepEvent<T>> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain(&self) -> Vec<StepEvent<T>> {
        let mut guard = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *guard)
    }

    pub fn last_changed(&self) -> Option<T> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .rev()
            .find_map(|event| match event {
                StepEvent::Changed(value) => Some(value.clone()),
                _ => None,
            })
    }

    fn push(&self, event: StepEvent<T>) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

impl<T> StepObserver<T> for EventLog<T>
where
    T: Clone + Send,
{
    fn changed(&self, value: &T) {
        self.push(StepEvent::Changed(value.clone()));
    }

    fn back(&self) {
        self.push(StepEvent::Back);
    }

    fn complete(&self) {
        self.push(StepEvent::Completed);
    }
}
