mod category;
mod descriptor;
mod ids;
mod question;
mod session;

pub use category::{Category, sort_for_display};
pub use descriptor::{
    DescriptorError, Difficulty, MAX_AMOUNT, MIN_AMOUNT, RequestDescriptor, resolve,
};
pub use ids::CategoryId;
pub use question::{ANSWER_COUNT, QuestionError, QuizQuestion, RawQuestion};
pub use session::{QuizSession, QuizSummary, QuizSummaryError};
