//! Model-View-Intent (MVI) primitives shared by the portal state machines.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: everything the renderer needs to draw one screen region
//! - **Intent**: a user action or a system event (timer, validation result)
//! - **Reducer**: pure `(State, Intent) -> State` transition
//!
//! Side effects (clock, randomness, timers) stay in the controller, which
//! resolves them first and hands the results to a reducer inside an intent.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
