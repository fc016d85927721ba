use serde::{Deserialize, Serialize};

/// A recipe record as returned by TheMealDB.
///
/// Only the fields the views render are kept; the API sends many more
/// (`strIngredient1..20`, `strYoutube`, ...) which serde ignores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: String,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    /// Present on both endpoints, only rendered by the detail view.
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
}

/// Response body shared by `search.php` and `lookup.php`.
///
/// The API answers `{"meals": null}` when nothing matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MealsEnvelope {
    #[serde(default)]
    pub meals: Option<Vec<Meal>>,
}

impl MealsEnvelope {
    /// All meals, empty when the field is null or absent.
    pub fn into_meals(self) -> Vec<Meal> {
        self.meals.unwrap_or_default()
    }

    /// First meal, if any.
    pub fn into_first(self) -> Option<Meal> {
        self.meals.and_then(|meals| meals.into_iter().next())
    }
}
