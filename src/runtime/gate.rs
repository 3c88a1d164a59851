use std::sync::atomic::{AtomicBool, Ordering};

/// Single-slot debounce for frame-coalesced work.
///
/// `arm` returns true only when no recomputation is pending; the caller then
/// schedules exactly one. Further `arm` calls are dropped (not queued) until
/// `disarm` clears the slot, so bursts collapse to at most one execution per
/// frame. The flag is atomic so the primitive stays sound under a
/// multi-threaded host; the engine itself runs single-threaded.
#[derive(Debug, Default)]
pub struct FrameGate {
    armed: AtomicBool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a recomputation. True means the caller owns scheduling it.
    pub fn arm(&self) -> bool {
        !self.armed.swap(true, Ordering::SeqCst)
    }

    /// Clear the slot once the recomputation has run.
    pub fn disarm(&self) {
        self.armed.store(false, Ordering::SeqCst);
    }

    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bursts_collapse_to_one_pending_execution() {
        let gate = FrameGate::new();
        assert!(gate.arm());
        assert!(!gate.arm());
        assert!(!gate.arm());
        assert!(gate.is_armed());
    }

    #[test]
    fn disarm_reopens_the_slot() {
        let gate = FrameGate::new();
        assert!(gate.arm());
        gate.disarm();
        assert!(!gate.is_armed());
        assert!(gate.arm());
    }
}
