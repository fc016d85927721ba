use crate::ui::meal_detail::intent::MealDetailIntent;
use crate::ui::meal_detail::state::MealDetailState;
use crate::ui::mvi::Reducer;

pub struct MealDetailReducer;

impl Reducer for MealDetailReducer {
    type State = MealDetailState;
    type Intent = MealDetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MealDetailIntent::Open { id } => match id.filter(|id| !id.trim().is_empty()) {
                Some(id) => MealDetailState::Loading { id },
                None => MealDetailState::MissingParam,
            },

            MealDetailIntent::FetchSucceeded { meal } => match state {
                MealDetailState::Loading { id } => match meal {
                    Some(meal) => MealDetailState::Loaded { meal, scroll: 0 },
                    None => MealDetailState::NotFound { id },
                },
                other => other,
            },

            MealDetailIntent::FetchFailed => match state {
                MealDetailState::Loading { id } => MealDetailState::Failed { id },
                other => other,
            },

            MealDetailIntent::ScrollUp { lines } => match state {
                MealDetailState::Loaded { meal, scroll } => MealDetailState::Loaded {
                    meal,
                    scroll: scroll.saturating_sub(lines),
                },
                other => other,
            },

            MealDetailIntent::ScrollDown { lines, max } => match state {
                MealDetailState::Loaded { meal, scroll } => MealDetailState::Loaded {
                    meal,
                    scroll: scroll.saturating_add(lines).min(max),
                },
                other => other,
            },

            MealDetailIntent::Close => MealDetailState::Idle,
        }
    }
}
