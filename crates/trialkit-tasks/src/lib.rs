pub mod expectancy;
pub mod stop_signal;
pub mod switching;
pub mod tower;

pub use expectancy::Condition;
pub use stop_signal::{StopSignalSession, StopTrial};
pub use switching::{CueTrial, SwitchKind, SwitchResolver};
pub use tower::{Board, MoveError, Problem};
