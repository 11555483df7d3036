//! Request URLs and response bodies of the Open Trivia Database API.

use serde::Deserialize;
use url::Url;

use trivia_core::model::{Category, CategoryId, RawQuestion, RequestDescriptor};

use crate::error::FetchError;

const QUESTIONS_PATH: &str = "api.php";
const CATEGORIES_PATH: &str = "api_category.php";
const MULTIPLE_CHOICE: &str = "multiple";

/// `response_code` values documented by the API.
mod code {
    pub const SUCCESS: u8 = 0;
    pub const NO_RESULTS: u8 = 1;
    pub const INVALID_PARAMETER: u8 = 2;
    pub const RATE_LIMIT: u8 = 5;
}

fn endpoint(base_url: &str, path: &str) -> Result<Url, FetchError> {
    let base = format!("{}/", base_url.trim().trim_end_matches('/'));
    Ok(Url::parse(&base)?.join(path)?)
}

/// `GET {base}/api.php?amount=..&category=..&difficulty=..&type=multiple`
///
/// The category parameter is left out when any category is acceptable.
///
/// # Errors
///
/// Returns `FetchError::Url` if `base_url` is not a valid URL.
pub fn questions_url(base_url: &str, descriptor: &RequestDescriptor) -> Result<Url, FetchError> {
    let mut url = endpoint(base_url, QUESTIONS_PATH)?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("amount", &descriptor.amount().to_string());
        if let Some(category) = descriptor.category() {
            query.append_pair("category", &category.to_string());
        }
        query.append_pair("difficulty", descriptor.difficulty().as_str());
        query.append_pair("type", MULTIPLE_CHOICE);
    }
    Ok(url)
}

/// `GET {base}/api_category.php`
///
/// # Errors
///
/// Returns `FetchError::Url` if `base_url` is not a valid URL.
pub fn categories_url(base_url: &str) -> Result<Url, FetchError> {
    endpoint(base_url, CATEGORIES_PATH)
}

#[derive(Debug, Deserialize)]
struct QuestionsResponse {
    response_code: u8,
    #[serde(default)]
    results: Vec<WireQuestion>,
}

#[derive(Debug, Deserialize)]
struct WireQuestion {
    #[serde(default)]
    category: String,
    #[serde(default)]
    difficulty: String,
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

impl From<WireQuestion> for RawQuestion {
    fn from(wire: WireQuestion) -> Self {
        RawQuestion::new(wire.question, wire.correct_answer, wire.incorrect_answers)
            .with_meta(wire.category, wire.difficulty)
    }
}

#[derive(Debug, Deserialize)]
struct CategoriesResponse {
    trivia_categories: Vec<WireCategory>,
}

#[derive(Debug, Deserialize)]
struct WireCategory {
    id: u32,
    name: String,
}

/// Decode a question response body.
///
/// "No results" is not an error: it yields an empty list.
///
/// # Errors
///
/// Returns `FetchError::Decode` for malformed JSON and a dedicated variant
/// for every other non-success `response_code`.
pub fn decode_questions(body: &str) -> Result<Vec<RawQuestion>, FetchError> {
    let response: QuestionsResponse = serde_json::from_str(body)?;
    match response.response_code {
        code::SUCCESS => Ok(response.results.into_iter().map(RawQuestion::from).collect()),
        code::NO_RESULTS => Ok(Vec::new()),
        code::INVALID_PARAMETER => Err(FetchError::InvalidParameter),
        code::RATE_LIMIT => Err(FetchError::RateLimited),
        other => Err(FetchError::ResponseCode(other)),
    }
}

/// Decode a category list body.
///
/// # Errors
///
/// Returns `FetchError::Decode` for malformed JSON.
pub fn decode_categories(body: &str) -> Result<Vec<Category>, FetchError> {
    let response: CategoriesResponse = serde_json::from_str(body)?;
    Ok(response
        .trivia_categories
        .into_iter()
        .map(|wire| Category::new(CategoryId::new(wire.id), wire.name))
        .collect())
}
