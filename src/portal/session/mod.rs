//! Who is signed in and which page is showing.
//!
//! The logged-in flag, the user and the current page are folded into one
//! enum so that "dashboard without a user" cannot be represented.

mod intent;
mod reducer;
mod state;

pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use state::{local_part, AuthPage, Page, SessionState, User};
