use crate::api::Meal;
use crate::ui::mvi::UiState;
use crate::ui::strings;

/// Meal list state machine: `Idle → Loading → {Failed | Loaded}`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MealListState {
    #[default]
    Idle,
    Loading,
    Failed {
        message: String,
    },
    Loaded {
        meals: Vec<Meal>,
        selected: usize,
    },
}

impl UiState for MealListState {}

impl MealListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn meals(&self) -> &[Meal] {
        match self {
            Self::Loaded { meals, .. } => meals,
            _ => &[],
        }
    }

    pub fn selected(&self) -> Option<usize> {
        match self {
            Self::Loaded { meals, selected } if !meals.is_empty() => Some(*selected),
            _ => None,
        }
    }

    pub fn selected_meal(&self) -> Option<&Meal> {
        match self {
            Self::Loaded { meals, selected } => meals.get(*selected),
            _ => None,
        }
    }
}

/// One rendered row of the list, keyed by the meal identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealListItem {
    pub key: String,
    pub title: String,
    pub subtitle: String,
    pub thumbnail: String,
}

impl From<&Meal> for MealListItem {
    fn from(meal: &Meal) -> Self {
        Self {
            key: meal.id.clone(),
            title: meal.name.clone(),
            subtitle: strings::meal_subtitle(meal.category.as_deref(), meal.area.as_deref()),
            thumbnail: meal.thumbnail.clone(),
        }
    }
}

/// Rows to render, in response order. Empty unless loaded.
pub fn list_items(state: &MealListState) -> Vec<MealListItem> {
    state.meals().iter().map(MealListItem::from).collect()
}
