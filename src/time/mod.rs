//! Injectable sources of "now".

pub mod clock;
pub mod fixed_clock;
pub mod local;
pub mod offset_clock;
pub mod system_clock;

pub use clock::Clock;
pub use fixed_clock::FixedClock;
pub use offset_clock::OffsetClock;
pub use system_clock::SystemClock;
