use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::foundation::{
    core::Millis,
    error::{PathglowError, PathglowResult},
};

/// Single-threaded virtual-time job queue.
///
/// Jobs are scheduled relative to the current clock and released by [`Timeline::advance_to`].
/// Determinism rule: jobs due at the same instant come out in the order they were scheduled.
#[derive(Debug)]
pub struct Timeline<J> {
    now: Millis,
    next_seq: u64,
    queue: BinaryHeap<Entry<J>>,
}

#[derive(Debug)]
struct Entry<J> {
    at: Millis,
    seq: u64,
    job: J,
}

// Min-heap on (at, seq).
impl<J> Ord for Entry<J> {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.at, other.seq).cmp(&(self.at, self.seq))
    }
}

impl<J> PartialOrd for Entry<J> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<J> PartialEq for Entry<J> {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at && self.seq == other.seq
    }
}

impl<J> Eq for Entry<J> {}

impl<J> Default for Timeline<J> {
    fn default() -> Self {
        Self::new()
    }
}

impl<J> Timeline<J> {
    pub fn new() -> Self {
        Self {
            now: Millis::ZERO,
            next_seq: 0,
            queue: BinaryHeap::new(),
        }
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Queue `job` to fire `delay` after the current clock. Returns the absolute due time.
    pub fn schedule_in(&mut self, delay: Millis, job: J) -> Millis {
        let at = self.now.saturating_add(delay);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Entry { at, seq, job });
        at
    }

    /// Due time of the earliest pending job.
    pub fn next_due(&self) -> Option<Millis> {
        self.queue.peek().map(|e| e.at)
    }

    /// Move the clock to `t` and release every job due at or before it, earliest first.
    pub fn advance_to(&mut self, t: Millis) -> PathglowResult<Vec<(Millis, J)>> {
        if t < self.now {
            return Err(PathglowError::validation(format!(
                "timeline cannot move backwards (now {}, requested {})",
                self.now, t
            )));
        }
        self.now = t;

        let mut due = Vec::new();
        while self.queue.peek().is_some_and(|e| e.at <= t) {
            let Some(entry) = self.queue.pop() else {
                break;
            };
            due.push((entry.at, entry.job));
        }
        Ok(due)
    }

    /// Release everything that is still pending, leaving the clock at the last due time.
    pub fn drain(&mut self) -> Vec<(Millis, J)> {
        let mut out = Vec::with_capacity(self.queue.len());
        while let Some(entry) = self.queue.pop() {
            self.now = self.now.max(entry.at);
            out.push((entry.at, entry.job));
        }
        out
    }

    /// Pending jobs in firing order, without releasing them.
    pub fn pending(&self) -> Vec<(Millis, &J)> {
        let mut entries: Vec<&Entry<J>> = self.queue.iter().collect();
        entries.sort_by_key(|e| (e.at, e.seq));
        entries.into_iter().map(|e| (e.at, &e.job)).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
