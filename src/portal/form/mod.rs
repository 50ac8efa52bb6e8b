//! Transient input for the login and registration forms.

mod intent;
mod reducer;
mod state;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormState, LoginField, LoginFields, RegisterField, RegisterFields};
