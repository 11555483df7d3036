mod html;
mod quiz_vm;
mod setup_vm;
mod signal_view;
mod time_fmt;

pub use html::sanitize_html;
pub use quiz_vm::{AnswerOptionVm, CategoryVm, QuestionVm, ScoreVm, score_message};
pub use setup_vm::{DEFAULT_AMOUNT, SetupForm, SetupInput, parse_category_choice, use_setup_form};
pub use signal_view::{SignalView, use_signal_view};
pub use time_fmt::format_elapsed;
