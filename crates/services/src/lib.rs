#![forbid(unsafe_code)]

pub mod app_services;
pub mod categories;
pub mod error;
pub mod provider;
pub mod quiz_flow;
pub mod source;
pub mod trivia;

pub use trivia_core::Clock;

pub use app_services::QuizServices;
pub use categories::CategoryService;
pub use error::{FetchError, StartError};
pub use provider::QuestionProvider;
pub use quiz_flow::QuizStartService;
pub use source::{CategorySource, InMemorySource, QuestionSource, Sources};
pub use trivia::{OpenTdbClient, TriviaConfig};
