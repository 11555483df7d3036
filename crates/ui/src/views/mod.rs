mod question;
mod results;
mod setup;
mod state;
mod widget;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use question::QuestionPanel;
pub use results::ResultsPanel;
pub use setup::SetupPanel;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use widget::QuizWidget;
