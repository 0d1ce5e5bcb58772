//! Model-View-Intent (MVI) primitives for the form views.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers only touch view state. Store mutations (saving a form,
//! recording a value, submitting) go through the
//! [`Workspace`](crate::workspace::Workspace); their outcome is fed back
//! to the view as an intent.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
