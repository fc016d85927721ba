use crate::api::Meal;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum MealDetailIntent {
    /// The view mounted with the `idMeal` route parameter, if any.
    Open { id: Option<String> },
    /// Lookup finished; `None` when the API returned no element.
    FetchSucceeded { meal: Option<Meal> },
    FetchFailed,
    ScrollUp { lines: u16 },
    /// `max` is the largest useful offset for the current viewport.
    ScrollDown { lines: u16, max: u16 },
    /// The view was popped.
    Close,
}

impl Intent for MealDetailIntent {}
