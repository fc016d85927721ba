use crate::api::Meal;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum MealListIntent {
    /// The view mounted and a search fetch was spawned.
    FetchStarted,
    FetchSucceeded { meals: Vec<Meal> },
    /// Transport or decode failure. Details are logged by the caller.
    FetchFailed,
    MoveUp,
    MoveDown,
}

impl Intent for MealListIntent {}
