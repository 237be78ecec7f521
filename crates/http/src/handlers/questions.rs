use axum::Json;

use eduroute_core::{onboarding_questions, Question};

/// `GET /questions`: the static onboarding questionnaire. No auth, the
/// list is public.
pub async fn list_questions() -> Json<&'static [Question]> {
    Json(onboarding_questions())
}
