pub mod app;
pub mod events;
pub mod fetch;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod meal_detail;
pub mod meal_list;
pub mod mvi;
pub mod navigation;
pub mod render;
pub mod runtime;
pub mod strings;
pub mod terminal_guard;
pub mod theme;
pub mod widgets;
