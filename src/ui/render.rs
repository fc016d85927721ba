use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::meal_detail::render_meal_detail;
use crate::ui::meal_list::render_meal_list;
use crate::ui::navigation::Route;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let route = app.current_route();

    frame.render_widget(Header::new().widget(route, app.meal_detail()), header);
    frame.render_widget(Clear, body);
    match route {
        Route::MealList => render_meal_list(frame, body, app.meal_list(), app.tick()),
        Route::MealDetail { .. } => render_meal_detail(frame, body, app.meal_detail(), app.tick()),
    }
    frame.render_widget(Footer::new().widget(footer, route), footer);
}
