use crate::api::Meal;
use crate::ui::mvi::UiState;

/// Meal detail state machine.
///
/// `Idle → MissingParam` when opened without an identifier (terminal), or
/// `Idle → Loading → {Loaded | NotFound | Failed}`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MealDetailState {
    #[default]
    Idle,
    MissingParam,
    Loading {
        id: String,
    },
    Loaded {
        meal: Meal,
        scroll: u16,
    },
    /// The lookup succeeded but returned no meal.
    NotFound {
        id: String,
    },
    Failed {
        id: String,
    },
}

impl UiState for MealDetailState {}

impl MealDetailState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn meal(&self) -> Option<&Meal> {
        match self {
            Self::Loaded { meal, .. } => Some(meal),
            _ => None,
        }
    }

    /// Identifier the view was opened with.
    pub fn meal_id(&self) -> Option<&str> {
        match self {
            Self::Loading { id } | Self::NotFound { id } | Self::Failed { id } => Some(id),
            Self::Loaded { meal, .. } => Some(&meal.id),
            Self::Idle | Self::MissingParam => None,
        }
    }
}
