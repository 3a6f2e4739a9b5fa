//! Insertion-ordered task queues
//!
//! Records stay queued while a sweep visits them and leave the queue only
//! after their visit reports them finished, so the queue length seen from
//! inside a callback counts every record still in flight. The lock is not
//! held during a visit; callbacks may push new records, which land at the
//! back and are first visited on the next sweep.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

/// What to do with a record after visiting it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Still in flight, keep it queued
    Pending,
    /// Finished, drop it
    Finished,
}

/// FIFO queue of pending records
#[derive(Debug)]
pub struct TaskQueue<T> {
    items: Mutex<VecDeque<Arc<T>>>,
}

impl<T> TaskQueue<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
        }
    }

    /// Append a record
    pub fn push(&self, item: T) {
        self.items.lock().push_back(Arc::new(item));
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Visit every record queued at the start of the sweep once, in
    /// insertion order
    ///
    /// Returns the number of records that finished.
    pub fn sweep(&self, mut visit: impl FnMut(&T) -> Step) -> usize {
        let visiting: Vec<Arc<T>> = self.items.lock().iter().cloned().collect();
        let mut finished = 0;

        for item in visiting {
            if visit(&item) == Step::Finished {
                self.remove(&item);
                finished += 1;
            }
        }

        finished
    }

    fn remove(&self, item: &Arc<T>) {
        let mut items = self.items.lock();
        if let Some(index) = items.iter().position(|queued| Arc::ptr_eq(queued, item)) {
            items.remove(index);
        }
    }

    /// Map every queued record, in order
    pub fn snapshot<R>(&self, f: impl Fn(&T) -> R) -> Vec<R> {
        self.items.lock().iter().map(|item| f(item)).collect()
    }
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
