use crate::portal::form::intent::FormIntent;
use crate::portal::form::state::{FormState, LoginFields, RegisterFields};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::EditLogin { field, value } => {
                *state.login.get_mut(field) = value;
                state
            }
            FormIntent::EditRegister { field, value } => {
                *state.register.get_mut(field) = value;
                state
            }
            FormIntent::Fail { message } => FormState {
                error: Some(message),
                ..state
            },
            FormIntent::LoginAccepted => FormState {
                login: LoginFields::default(),
                error: None,
                focused: 0,
                ..state
            },
            FormIntent::RegisterAccepted => FormState {
                register: RegisterFields::default(),
                error: None,
                focused: 0,
                ..state
            },
            FormIntent::PageSwitched => FormState {
                error: None,
                focused: 0,
                ..state
            },
            FormIntent::FocusNext { field_count } => {
                let focused = if state.focused + 1 >= field_count {
                    0
                } else {
                    state.focused + 1
                };
                FormState { focused, ..state }
            }
            FormIntent::FocusPrev { field_count } => {
                let focused = if state.focused == 0 {
                    field_count.saturating_sub(1)
                } else {
                    state.focused - 1
                };
                FormState { focused, ..state }
            }
            FormIntent::TogglePasswordVisibility => FormState {
                show_password: !state.show_password,
                ..state
            },
            FormIntent::Reset => FormState::default(),
        }
    }
}
