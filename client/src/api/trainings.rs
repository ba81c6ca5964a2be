//! Training session operations

use super::ApiClient;
use crate::error::ClientResult;
use training_diary_shared::models::{TrainingCreate, TrainingRead, TrainingUpdate};
use validator::Validate;

impl ApiClient {
    /// POST /trainings/ - Log a new training session
    pub async fn create_training(&self, training: &TrainingCreate) -> ClientResult<TrainingRead> {
        training.validate()?;
        self.post("/trainings/", training).await
    }

    /// GET /trainings/{id} - Fetch a training session
    pub async fn get_training(&self, training_id: i64) -> ClientResult<TrainingRead> {
        self.get(&format!("/trainings/{training_id}")).await
    }

    /// PUT /trainings/{id} - Replace a training session
    pub async fn update_training(
        &self,
        training_id: i64,
        training: &TrainingUpdate,
    ) -> ClientResult<TrainingRead> {
        training.validate()?;
        self.put(&format!("/trainings/{training_id}"), training).await
    }

    /// DELETE /trainings/{id} - Delete a training session
    ///
    /// The response body is discarded; success is signaled by the absence
    /// of an error.
    pub async fn delete_training(&self, training_id: i64) -> ClientResult<()> {
        self.delete(&format!("/trainings/{training_id}")).await
    }

    /// GET /trainings/ - List the current user's training sessions
    pub async fn list_trainings(&self) -> ClientResult<Vec<TrainingRead>> {
        self.get("/trainings/").await
    }
}
