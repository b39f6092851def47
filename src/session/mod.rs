mod controller;
pub mod policy;
mod timer;

pub use controller::{AnswerOutcome, SessionController};
pub use policy::{AdaptationPolicy, DirectMapping, Stepwise};
pub use timer::Countdown;
