//! Category suggestion - Consumer side of the external expense classifier.
//!
//! The classifier (typically an LLM prompt) receives the expense text and the
//! candidate category names and answers with one name and an optional reason.
//! Suggestions are best effort: any failure or unmatched answer yields `None`
//! and expense entry carries on without one.

use crate::{entities::Category, errors::Result};
use serde::{Deserialize, Serialize};
use std::future::Future;
use tracing::{debug, warn};

/// Descriptions shorter than this (in characters, after trimming) are not sent.
pub const MIN_DESCRIPTION_LEN: usize = 3;

/// Request sent to the classifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationRequest {
    /// Expense details, usually the description
    pub text: String,
    /// Names the answer must be chosen from
    pub candidate_categories: Vec<String>,
}

/// Answer returned by the classifier.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ClassificationResponse {
    /// Chosen category name
    pub category: String,
    /// Short justification
    #[serde(default)]
    pub reason: Option<String>,
}

/// A suggested category for an expense being entered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    /// The matched category
    pub category: Category,
    /// Reason given by the classifier, if any
    pub reason: Option<String>,
}

/// External service that picks a category for free text.
pub trait CategoryClassifier {
    /// Classifies `request.text` into one of `request.candidate_categories`.
    fn classify(
        &self,
        request: ClassificationRequest,
    ) -> impl Future<Output = Result<ClassificationResponse>> + Send;
}

/// Asks `classifier` for a category for `text`.
///
/// Returns `None` without calling the classifier when the text is too short or
/// there are no categories. The answer is matched case-insensitively against
/// category names; errors and unmatched answers are logged and give `None`.
pub async fn suggest_category<C>(
    classifier: &C,
    text: &str,
    categories: &[Category],
) -> Option<Suggestion>
where
    C: CategoryClassifier + Sync,
{
    let text = text.trim();
    if text.chars().count() < MIN_DESCRIPTION_LEN || categories.is_empty() {
        debug!(%text, "Skipping category suggestion");
        return None;
    }

    let request = ClassificationRequest {
        text: text.to_string(),
        candidate_categories: categories.iter().map(|c| c.name.clone()).collect(),
    };

    let response = match classifier.classify(request).await {
        Ok(response) => response,
        Err(e) => {
            warn!("Category classification failed: {}", e);
            return None;
        }
    };

    let wanted = response.category.trim().to_lowercase();
    let Some(category) = categories
        .iter()
        .find(|c| c.name.to_lowercase() == wanted)
    else {
        warn!(category = %response.category, "Classifier answered with an unknown category");
        return None;
    };

    debug!(category = %category.name, "Classifier suggested category");
    Some(Suggestion {
        category: category.clone(),
        reason: response.reason.filter(|r| !r.trim().is_empty()),
    })
}
