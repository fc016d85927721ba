mod common;

use common::meal;
use mealbrowse::ui::meal_detail::{MealDetailIntent, MealDetailReducer, MealDetailState};
use mealbrowse::ui::mvi::Reducer;

fn loading(id: &str) -> MealDetailState {
    MealDetailState::Loading { id: id.to_string() }
}

#[test]
fn open_without_id_is_missing_param() {
    let state = MealDetailReducer::reduce(
        MealDetailState::Idle,
        MealDetailIntent::Open { id: None },
    );
    assert_eq!(state, MealDetailState::MissingParam);
}

#[test]
fn open_with_blank_id_is_missing_param() {
    let state = MealDetailReducer::reduce(
        MealDetailState::Idle,
        MealDetailIntent::Open {
            id: Some("  ".to_string()),
        },
    );
    assert_eq!(state, MealDetailState::MissingParam);
}

#[test]
fn missing_param_ignores_fetch_results() {
    let state = MealDetailReducer::reduce(
        MealDetailState::MissingParam,
        MealDetailIntent::FetchSucceeded {
            meal: Some(meal("1", "x")),
        },
    );
    assert_eq!(state, MealDetailState::MissingParam);
}

#[test]
fn open_with_id_enters_loading() {
    let state = MealDetailReducer::reduce(
        MealDetailState::Idle,
        MealDetailIntent::Open {
            id: Some("52977".to_string()),
        },
    );
    assert_eq!(state, loading("52977"));
}

#[test]
fn success_loads_meal_at_top() {
    let state = MealDetailReducer::reduce(
        loading("52977"),
        MealDetailIntent::FetchSucceeded {
            meal: Some(meal("52977", "Corba")),
        },
    );
    assert_eq!(
        state,
        MealDetailState::Loaded {
            meal: meal("52977", "Corba"),
            scroll: 0
        }
    );
}

#[test]
fn empty_lookup_is_not_found() {
    let state = MealDetailReducer::reduce(
        loading("52977"),
        MealDetailIntent::FetchSucceeded { meal: None },
    );
    assert_eq!(
        state,
        MealDetailState::NotFound {
            id: "52977".to_string()
        }
    );
    assert!(!state.is_loading());
}

#[test]
fn failure_is_an_explicit_state() {
    let state = MealDetailReducer::reduce(loading("52977"), MealDetailIntent::FetchFailed);
    assert_eq!(
        state,
        MealDetailState::Failed {
            id: "52977".to_string()
        }
    );
}

#[test]
fn scroll_down_is_capped() {
    let loaded = MealDetailState::Loaded {
        meal: meal("1", "x"),
        scroll: 0,
    };
    let state = MealDetailReducer::reduce(
        loaded,
        MealDetailIntent::ScrollDown { lines: 10, max: 4 },
    );
    assert!(matches!(state, MealDetailState::Loaded { scroll: 4, .. }));
}

#[test]
fn scroll_up_saturates_at_zero() {
    let loaded = MealDetailState::Loaded {
        meal: meal("1", "x"),
        scroll: 2,
    };
    let state = MealDetailReducer::reduce(loaded, MealDetailIntent::ScrollUp { lines: 5 });
    assert!(matches!(state, MealDetailState::Loaded { scroll: 0, .. }));
}

#[test]
fn close_returns_to_idle_from_any_state() {
    for state in [
        MealDetailState::MissingParam,
        loading("1"),
        MealDetailState::Failed { id: "1".into() },
    ] {
        let state = MealDetailReducer::reduce(state, MealDetailIntent::Close);
        assert_eq!(state, MealDetailState::Idle);
    }
}
