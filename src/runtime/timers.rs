use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Virtual-time fire-and-forget timer queue.
///
/// Determinism rule: tasks drain smallest deadline first; equal deadlines
/// fire in insertion order. There is no cancellation path — a task whose
/// target has gone stale still fires, and the stage treats the resulting
/// mutation as a no-op.
#[derive(Debug)]
pub struct TimerQueue<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    seq: u64,
}

#[derive(Debug)]
struct Entry<T> {
    due_ms: u64,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due_ms == other.due_ms && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.due_ms, self.seq).cmp(&(other.due_ms, other.seq))
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Earliest pending deadline, if any.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.heap.peek().map(|Reverse(e)| e.due_ms)
    }

    pub fn schedule(&mut self, due_ms: u64, task: T) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { due_ms, seq, task }));
    }

    /// Pop the next task due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<T> {
        if self.next_due_ms()? > now_ms {
            return None;
        }
        self.heap.pop().map(|Reverse(e)| e.task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(q: &mut TimerQueue<&'static str>, now: u64) -> Vec<&'static str> {
        let mut out = Vec::new();
        while let Some(t) = q.pop_due(now) {
            out.push(t);
        }
        out
    }

    #[test]
    fn drains_by_deadline_then_insertion_order() {
        let mut q = TimerQueue::new();
        q.schedule(200, "late");
        q.schedule(100, "first");
        q.schedule(100, "second");

        assert_eq!(drain(&mut q, 500), vec!["first", "second", "late"]);
    }

    #[test]
    fn nothing_fires_before_its_deadline() {
        let mut q = TimerQueue::new();
        q.schedule(100, "cue");

        assert_eq!(q.pop_due(99), None);
        assert_eq!(q.len(), 1);
        assert_eq!(q.pop_due(100), Some("cue"));
        assert!(q.is_empty());
    }

    #[test]
    fn zero_delay_fires_at_time_zero() {
        let mut q = TimerQueue::new();
        q.schedule(0, "now");
        assert_eq!(q.pop_due(0), Some("now"));
    }
}
