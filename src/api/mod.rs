//! Typed client for TheMealDB JSON API.
//!
//! Two read-only endpoints are used: `search.php?s=<term>` for the meal list
//! and `lookup.php?i=<id>` for a single meal.

mod client;
mod error;
mod types;

pub use client::MealDbClient;
pub use error::ApiError;
pub use types::{Meal, MealsEnvelope};
