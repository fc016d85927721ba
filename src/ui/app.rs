use crate::api::{ApiError, Meal};
use crate::ui::fetch::{FetchSlot, Fetcher};
use crate::ui::layout::{body_rect, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::ui::meal_detail::{content_height, MealDetailIntent, MealDetailReducer, MealDetailState};
use crate::ui::meal_list::{MealListIntent, MealListReducer, MealListState};
use crate::ui::mvi::Reducer;
use crate::ui::navigation::{Navigator, Route, RouteParams, MEAL_ID_PARAM};
use ratatui::layout::Rect;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Application state: both views, the route stack, and fetch bookkeeping.
///
/// Without a [`Fetcher`] no request is ever spawned; the view states still
/// transition, which is how unit tests drive the app.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    tick: u64,
    query: String,
    navigator: Navigator,
    meal_list: MealListState,
    meal_detail: MealDetailState,
    list_fetch: FetchSlot,
    detail_fetch: FetchSlot,
    fetcher: Option<Fetcher>,
}

impl App {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            size: None,
            tick: 0,
            query: query.into(),
            navigator: Navigator::new(),
            meal_list: MealListState::default(),
            meal_detail: MealDetailState::default(),
            list_fetch: FetchSlot::new(),
            detail_fetch: FetchSlot::new(),
            fetcher: None,
        }
    }

    pub fn with_fetcher(mut self, fetcher: Fetcher) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        if self.meal_detail.meal().is_some() {
            let max = self.max_detail_scroll();
            self.dispatch_detail(MealDetailIntent::ScrollDown { lines: 0, max });
        }
    }

    pub fn current_route(&self) -> &Route {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn meal_list(&self) -> &MealListState {
        &self.meal_list
    }

    pub fn meal_detail(&self) -> &MealDetailState {
        &self.meal_detail
    }

    pub fn list_generation(&self) -> u64 {
        self.list_fetch.generation()
    }

    pub fn detail_generation(&self) -> u64 {
        self.detail_fetch.generation()
    }

    // ========================================================================
    // Meal list
    // ========================================================================

    /// Mount the root view: start the one search fetch.
    pub fn mount(&mut self) {
        let generation = self.list_fetch.begin();
        self.dispatch_list(MealListIntent::FetchStarted);
        tracing::info!(query = %self.query, generation, "loading meal list");
        if let Some(fetcher) = &self.fetcher {
            let task = fetcher.search(generation, self.query.clone());
            self.list_fetch.attach(task);
        }
    }

    pub fn on_meals_fetched(&mut self, generation: u64, result: Result<Vec<Meal>, ApiError>) {
        if !self.list_fetch.complete(generation) {
            tracing::debug!(generation, "discarding stale meal list result");
            return;
        }
        match result {
            Ok(meals) => {
                tracing::info!(count = meals.len(), "meal list loaded");
                self.dispatch_list(MealListIntent::FetchSucceeded { meals });
            }
            Err(err) => {
                tracing::error!(error = %err, kind = err.kind(), "failed to load meal list");
                self.dispatch_list(MealListIntent::FetchFailed);
            }
        }
    }

    pub fn move_selection(&mut self, direction: i32) {
        if direction.is_negative() {
            self.dispatch_list(MealListIntent::MoveUp);
        } else {
            self.dispatch_list(MealListIntent::MoveDown);
        }
    }

    /// Navigate to the detail view of the highlighted meal.
    pub fn open_selected_meal(&mut self) -> bool {
        let Some(id) = self.meal_list.selected_meal().map(|meal| meal.id.clone()) else {
            return false;
        };
        self.open_meal_detail(RouteParams::new().with(MEAL_ID_PARAM, id));
        true
    }

    // ========================================================================
    // Meal detail
    // ========================================================================

    /// Show the detail route with `params`.
    ///
    /// From the list this pushes; on the detail route it replaces the top
    /// route, superseding whatever lookup was in flight.
    pub fn open_meal_detail(&mut self, params: RouteParams) {
        let id = params.get(MEAL_ID_PARAM).map(str::to_owned);
        let route = Route::MealDetail { params };
        match self.navigator.current() {
            Route::MealDetail { .. } => self.navigator.replace(route),
            Route::MealList => self.navigator.push(route),
        }
        self.mount_detail(id);
    }

    fn mount_detail(&mut self, id: Option<String>) {
        self.dispatch_detail(MealDetailIntent::Open { id });
        let MealDetailState::Loading { id } = &self.meal_detail else {
            self.detail_fetch.retire();
            tracing::info!("detail opened without a meal id");
            return;
        };

        let id = id.clone();
        let generation = self.detail_fetch.begin();
        tracing::info!(id = %id, generation, "loading meal detail");
        if let Some(fetcher) = &self.fetcher {
            let task = fetcher.lookup(generation, id);
            self.detail_fetch.attach(task);
        }
    }

    pub fn on_meal_fetched(
        &mut self,
        generation: u64,
        id: &str,
        result: Result<Option<Meal>, ApiError>,
    ) {
        if !self.detail_fetch.complete(generation) {
            tracing::debug!(generation, id, "discarding stale meal detail result");
            return;
        }
        match result {
            Ok(Some(meal)) => {
                self.dispatch_detail(MealDetailIntent::FetchSucceeded { meal: Some(meal) });
            }
            Ok(None) => {
                tracing::warn!(id, "meal not found");
                self.dispatch_detail(MealDetailIntent::FetchSucceeded { meal: None });
            }
            Err(err) => {
                tracing::error!(id, error = %err, kind = err.kind(), "failed to load meal detail");
                self.dispatch_detail(MealDetailIntent::FetchFailed);
            }
        }
    }

    pub fn scroll_detail(&mut self, delta: i32) {
        let lines = delta.unsigned_abs().min(u16::MAX as u32) as u16;
        if delta.is_negative() {
            self.dispatch_detail(MealDetailIntent::ScrollUp { lines });
        } else {
            let max = self.max_detail_scroll();
            self.dispatch_detail(MealDetailIntent::ScrollDown { lines, max });
        }
    }

    /// Rows of the detail viewport, used as the page size.
    pub fn detail_page(&self) -> u16 {
        let rows = self.size.map(|(_, rows)| rows).unwrap_or(24);
        rows.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT + 2).max(1)
    }

    fn max_detail_scroll(&self) -> u16 {
        let Some(meal) = self.meal_detail.meal() else {
            return 0;
        };
        let (cols, rows) = self.size.unwrap_or((80, 24));
        let body = body_rect(Rect::new(0, 0, cols, rows));
        let inner_width = body.width.saturating_sub(2);
        let inner_height = body.height.saturating_sub(2);
        content_height(meal, inner_width).saturating_sub(inner_height)
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Pop the detail route. Returns false on the root.
    pub fn back(&mut self) -> bool {
        if self.navigator.back().is_none() {
            return false;
        }
        self.detail_fetch.retire();
        self.dispatch_detail(MealDetailIntent::Close);
        true
    }

    fn dispatch_list(&mut self, intent: MealListIntent) {
        dispatch_mvi!(self, meal_list, MealListReducer, intent);
    }

    fn dispatch_detail(&mut self, intent: MealDetailIntent) {
        dispatch_mvi!(self, meal_detail, MealDetailReducer, intent);
    }
}
