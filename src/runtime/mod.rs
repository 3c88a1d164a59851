pub mod gate;
pub mod timers;

pub use gate::FrameGate;
pub use timers::TimerQueue;
