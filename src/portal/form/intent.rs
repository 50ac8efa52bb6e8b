use crate::portal::form::state::{LoginField, RegisterField};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    EditLogin { field: LoginField, value: String },
    EditRegister { field: RegisterField, value: String },
    /// Validation failed. Overwrites any previous error; fields are kept.
    Fail { message: String },
    /// Sign-in went through: wipe the login fields and the error.
    LoginAccepted,
    /// Registration went through: wipe the registration fields and the error.
    RegisterAccepted,
    /// The other form is now showing.
    PageSwitched,
    FocusNext { field_count: usize },
    FocusPrev { field_count: usize },
    TogglePasswordVisibility,
    Reset,
}

impl Intent for FormIntent {}
