//! Exercise catalog operations

use super::ApiClient;
use crate::error::ClientResult;
use training_diary_shared::models::{ExerciseDetail, ExerciseList};
use training_diary_shared::types::ExerciseSearchParams;

impl ApiClient {
    /// GET /exercises/{id} - Fetch a single exercise
    pub async fn get_exercise(&self, exercise_id: i64) -> ClientResult<ExerciseDetail> {
        self.get(&format!("/exercises/{exercise_id}")).await
    }

    /// GET /exercises/ - List exercises, optionally filtered
    ///
    /// Absent filters are omitted from the query string; with no filters at
    /// all the request is still issued, with no query string.
    pub async fn list_exercises(
        &self,
        params: &ExerciseSearchParams,
    ) -> ClientResult<Vec<ExerciseList>> {
        self.get_with_query("/exercises/", params).await
    }
}
