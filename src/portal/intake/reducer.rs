use crate::portal::intake::intent::IntakeIntent;
use crate::portal::intake::state::IntakeState;
use crate::ui::mvi::Reducer;

pub struct IntakeReducer;

impl Reducer for IntakeReducer {
    type State = IntakeState;
    type Intent = IntakeIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            IntakeIntent::EditDraft { text } => IntakeState {
                draft: text,
                ..state
            },
            IntakeIntent::Filed { complaint } => {
                state.banner.show(complaint.priority);
                state.complaints.push_newest(complaint);
                state.draft.clear();
                state
            }
            IntakeIntent::BannerExpired { generation } => {
                state.banner.expire(generation);
                state
            }
            IntakeIntent::Reset => {
                // Bump the generation instead of resetting it so a timer
                // scheduled before the reset can never match again.
                state.banner.clear();
                IntakeState {
                    draft: String::new(),
                    complaints: Default::default(),
                    banner: state.banner,
                }
            }
        }
    }
}
