//! Wire data models for the Training Diary API
//!
//! Every "read" shape is the server's canonical state: it fully replaces any
//! prior local copy and carries server-assigned integer ids. Outbound shapes
//! derive `Validate` so payloads are checked before they go on the wire
//! (the server enforces positive-only values on its side as well).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Muscle group referenced (not owned) by exercises
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuscleGroup {
    pub id: i64,
    pub name: String,
}

/// Exercise detail as returned by `GET /exercises/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseDetail {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub aliases: Vec<String>,
    pub muscle_group: MuscleGroup,
}

/// Exercise list item as returned by `GET /exercises/`
///
/// Same fields as [`ExerciseDetail`]; the server exposes these as two
/// separate shapes and they are kept distinct here so either side can
/// diverge without breaking the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseList {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub aliases: Vec<String>,
    pub muscle_group: MuscleGroup,
}

/// Compact exercise reference embedded in training line items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseInfo {
    pub name: String,
    pub muscle_group: String,
}

/// Outbound training line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TrainingExerciseCreate {
    #[validate(range(min = 1))]
    pub exercise_id: i64,
    #[validate(range(min = 1))]
    pub sets: i32,
    #[validate(range(min = 1))]
    pub reps: i32,
    #[validate(range(exclusive_min = 0.0))]
    pub weight: f64,
}

/// Inbound training line item, extends the create shape with
/// server-assigned fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExerciseRead {
    pub exercise_id: i64,
    pub sets: i32,
    pub reps: i32,
    pub weight: f64,
    pub id: i64,
    pub training_id: i64,
    pub exercise: ExerciseInfo,
}

/// Outbound payload for `POST /trainings/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TrainingCreate {
    pub date: NaiveDateTime,
    #[validate(nested)]
    pub exercises: Vec<TrainingExerciseCreate>,
}

/// Outbound payload for `PUT /trainings/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TrainingUpdate {
    pub date: NaiveDateTime,
    #[validate(nested)]
    pub exercises: Vec<TrainingExerciseCreate>,
}

/// Inbound training payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRead {
    pub date: NaiveDateTime,
    pub id: i64,
    pub user_id: i64,
    pub exercises: Vec<TrainingExerciseRead>,
}
