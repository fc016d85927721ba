//! Model-View-Intent (MVI) primitives shared by both views.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: everything a view needs to render (loading, loaded, ...)
//! - **Intent**: key presses and fetch completions
//! - **Reducer**: pure `(State, Intent) -> State`
//!
//! Side effects (spawning fetches, navigation) stay in [`crate::ui::app::App`].

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
