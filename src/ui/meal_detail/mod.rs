mod intent;
mod reducer;
mod state;
mod view;

pub use intent::MealDetailIntent;
pub use reducer::MealDetailReducer;
pub use state::MealDetailState;
pub use view::{content_height, detail_lines, render_meal_detail};
