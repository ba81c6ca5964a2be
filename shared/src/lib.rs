//! Training Diary Shared Library
//!
//! This crate contains the wire data models, request types, and input
//! validation shared between the API client and any future frontends.

pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use models::{
    ExerciseDetail, ExerciseInfo, ExerciseList, MuscleGroup, TrainingCreate,
    TrainingExerciseCreate, TrainingExerciseRead, TrainingRead, TrainingUpdate,
};
pub use types::{ExerciseSearchParams, LoginRequest, Token, UserCreate, UserResponse};
