mod intent;
mod reducer;
mod state;
mod view;

pub use intent::MealListIntent;
pub use reducer::MealListReducer;
pub use state::{list_items, MealListItem, MealListState};
pub use view::render_meal_list;
