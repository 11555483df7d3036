//! Domain core of the trivia quiz: request resolution, the question model,
//! shuffling and the quiz state machine. Nothing in here performs I/O.

#![forbid(unsafe_code)]

pub mod model;
pub mod runner;
pub mod shuffle;
pub mod time;
pub mod view;

pub use runner::{Advance, Progress, QuizRunner, RunnerError, RunnerState};
pub use time::Clock;
pub use view::{Panel, PresentedQuestion, QuizView, RecordingView};
