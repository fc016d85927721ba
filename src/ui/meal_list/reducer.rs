use crate::ui::meal_list::intent::MealListIntent;
use crate::ui::meal_list::state::MealListState;
use crate::ui::mvi::Reducer;
use crate::ui::strings;

pub struct MealListReducer;

impl Reducer for MealListReducer {
    type State = MealListState;
    type Intent = MealListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Entering Loading drops any previous error or result set.
            MealListIntent::FetchStarted => MealListState::Loading,

            MealListIntent::FetchSucceeded { meals } => match state {
                MealListState::Loading => MealListState::Loaded { meals, selected: 0 },
                other => other,
            },

            MealListIntent::FetchFailed => match state {
                MealListState::Loading => MealListState::Failed {
                    message: strings::LIST_ERROR.to_string(),
                },
                other => other,
            },

            MealListIntent::MoveUp => match state {
                MealListState::Loaded { meals, selected } => {
                    let selected = if selected == 0 {
                        meals.len().saturating_sub(1)
                    } else {
                        selected - 1
                    };
                    MealListState::Loaded { meals, selected }
                }
                other => other,
            },

            MealListIntent::MoveDown => match state {
                MealListState::Loaded { meals, selected } => {
                    let selected = if selected + 1 >= meals.len() {
                        0
                    } else {
                        selected + 1
                    };
                    MealListState::Loaded { meals, selected }
                }
                other => other,
            },
        }
    }
}
