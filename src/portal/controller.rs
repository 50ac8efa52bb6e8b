use std::time::Duration;

use crate::portal::error::{ValidationError, MIN_PASSWORD_LEN};
use crate::portal::form::{FormIntent, FormReducer, FormState, LoginField, RegisterField};
use crate::portal::intake::{
    BannerNotifier, BannerTimer, Complaint, ComplaintLog, ComplaintStatus, IntakeIntent,
    IntakeReducer, IntakeState, Priority, PriorityClassifier, RandomClassifier,
};
use crate::portal::language::Language;
use crate::portal::session::{AuthPage, Page, SessionIntent, SessionReducer, SessionState, User};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Session & intake controller.
///
/// Holds the session, both forms, the complaint log and the banner for one
/// terminal session. Every operation runs to completion on the caller's
/// thread; the only deferred work is the banner clear, which comes back
/// through [`expire_banner`](Self::expire_banner).
pub struct PortalController {
    session: SessionState,
    forms: FormState,
    intake: IntakeState,
    language: Language,
    classifier: Box<dyn PriorityClassifier>,
    banner_timer: BannerTimer,
}

impl PortalController {
    pub fn new(language: Language, banner_timeout: Duration) -> Self {
        Self {
            session: SessionState::default(),
            forms: FormState::default(),
            intake: IntakeState::default(),
            language,
            classifier: Box::new(RandomClassifier),
            banner_timer: BannerTimer::new(banner_timeout),
        }
    }

    /// Replace the default uniform-random classifier.
    pub fn with_classifier(mut self, classifier: Box<dyn PriorityClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Where expired banner generations are reported. Without a notifier the
    /// banner stays until the next submission or logout.
    pub fn set_banner_notifier(&mut self, notifier: BannerNotifier) {
        self.banner_timer.set_notifier(notifier);
    }

    // ========================================================================
    // Read access for the renderer
    // ========================================================================

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn forms(&self) -> &FormState {
        &self.forms
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn current_page(&self) -> Page {
        self.session.current_page()
    }

    pub fn error(&self) -> Option<&str> {
        self.forms.error()
    }

    pub fn draft(&self) -> &str {
        &self.intake.draft
    }

    pub fn complaints(&self) -> &ComplaintLog {
        &self.intake.complaints
    }

    pub fn banner(&self) -> Option<Priority> {
        self.intake.banner.current()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn banner_timeout(&self) -> Duration {
        self.banner_timer.delay()
    }

    /// Number of input fields on the current page; the dashboard has one.
    pub fn field_count(&self) -> usize {
        match self.current_page() {
            Page::Login => LoginField::ALL.len(),
            Page::Register => RegisterField::ALL.len(),
            Page::Dashboard => 1,
        }
    }

    // ========================================================================
    // Session operations
    // ========================================================================

    /// Sign in. Any non-empty pair is accepted; there is no credential store.
    pub fn login(&mut self, email: &str, password: &str) -> Result<(), ValidationError> {
        self.dispatch_form(FormIntent::EditLogin {
            field: LoginField::Email,
            value: email.to_string(),
        });
        self.dispatch_form(FormIntent::EditLogin {
            field: LoginField::Password,
            value: password.to_string(),
        });

        if let Err(err) = validate_login(email, password) {
            return Err(self.reject(err));
        }

        let user = User::from_email(email);
        tracing::info!(user = %user.name, "signed in");
        self.dispatch_session(SessionIntent::SignedIn { user });
        self.dispatch_form(FormIntent::LoginAccepted);
        Ok(())
    }

    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), ValidationError> {
        for (field, value) in [
            (RegisterField::Name, name),
            (RegisterField::Email, email),
            (RegisterField::Password, password),
            (RegisterField::ConfirmPassword, confirm_password),
        ] {
            self.dispatch_form(FormIntent::EditRegister {
                field,
                value: value.to_string(),
            });
        }

        if let Err(err) = validate_registration(name, email, password, confirm_password) {
            return Err(self.reject(err));
        }

        let user = User::new(name, email);
        tracing::info!(user = %user.name, "registered");
        self.dispatch_session(SessionIntent::SignedIn { user });
        self.dispatch_form(FormIntent::RegisterAccepted);
        Ok(())
    }

    /// Full session reset. Complaints do not survive a logout.
    pub fn logout(&mut self) {
        if let Some(user) = self.session.user() {
            tracing::info!(user = %user.name, "signed out");
        }
        self.banner_timer.cancel();
        self.dispatch_session(SessionIntent::SignedOut);
        self.dispatch_intake(IntakeIntent::Reset);
        self.dispatch_form(FormIntent::Reset);
    }

    /// Show the other signed-out form. Returns false while signed in.
    pub fn switch_page(&mut self, target: AuthPage) -> bool {
        if self.session.is_logged_in() {
            tracing::debug!(?target, "page switch ignored while signed in");
            return false;
        }
        self.dispatch_session(SessionIntent::SwitchPage { target });
        self.dispatch_form(FormIntent::PageSwitched);
        true
    }

    // ========================================================================
    // Complaint intake
    // ========================================================================

    /// File a complaint. Blank text (or no signed-in user) is a silent no-op.
    pub fn submit_complaint(&mut self, text: &str) -> Option<Complaint> {
        if text.trim().is_empty() {
            tracing::debug!("blank complaint ignored");
            return None;
        }
        if !self.session.is_logged_in() {
            tracing::debug!("complaint ignored while signed out");
            return None;
        }

        let now = chrono::Local::now();
        let now_millis = u64::try_from(now.timestamp_millis()).unwrap_or_default();
        let complaint = Complaint {
            id: self.intake.complaints.next_id(now_millis),
            text: text.to_string(),
            priority: self.classifier.classify(text),
            status: ComplaintStatus::Pending,
            date: now.format("%-m/%-d/%Y").to_string(),
        };
        tracing::info!(id = complaint.id, priority = complaint.priority.label(), "complaint filed");

        self.dispatch_intake(IntakeIntent::Filed {
            complaint: complaint.clone(),
        });
        self.banner_timer.schedule(self.intake.banner.generation());
        Some(complaint)
    }

    /// Clear the banner if `generation` is still the one showing.
    pub fn expire_banner(&mut self, generation: u64) -> bool {
        let before = self.intake.banner.current();
        self.dispatch_intake(IntakeIntent::BannerExpired { generation });
        before.is_some() && self.intake.banner.current().is_none()
    }

    // ========================================================================
    // Field editing (driven by the renderer's key handling)
    // ========================================================================

    pub fn edit_login(&mut self, field: LoginField, value: String) {
        self.dispatch_form(FormIntent::EditLogin { field, value });
    }

    pub fn edit_register(&mut self, field: RegisterField, value: String) {
        self.dispatch_form(FormIntent::EditRegister { field, value });
    }

    pub fn set_draft(&mut self, text: String) {
        self.dispatch_intake(IntakeIntent::EditDraft { text });
    }

    pub fn focus_next(&mut self) {
        let field_count = self.field_count();
        self.dispatch_form(FormIntent::FocusNext { field_count });
    }

    pub fn focus_prev(&mut self) {
        let field_count = self.field_count();
        self.dispatch_form(FormIntent::FocusPrev { field_count });
    }

    pub fn toggle_password_visibility(&mut self) {
        self.dispatch_form(FormIntent::TogglePasswordVisibility);
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Text of the focused input on the current page.
    pub fn focused_value(&self) -> &str {
        match self.current_page() {
            Page::Login => self.focused_login_field().map_or("", |f| self.forms.login.get(f)),
            Page::Register => self
                .focused_register_field()
                .map_or("", |f| self.forms.register.get(f)),
            Page::Dashboard => &self.intake.draft,
        }
    }

    /// Replace the text of the focused input on the current page.
    pub fn set_focused_value(&mut self, value: String) {
        match self.current_page() {
            Page::Login => {
                if let Some(field) = self.focused_login_field() {
                    self.edit_login(field, value);
                }
            }
            Page::Register => {
                if let Some(field) = self.focused_register_field() {
                    self.edit_register(field, value);
                }
            }
            Page::Dashboard => self.set_draft(value),
        }
    }

    pub fn focused_login_field(&self) -> Option<LoginField> {
        LoginField::ALL.get(self.forms.focused).copied()
    }

    pub fn focused_register_field(&self) -> Option<RegisterField> {
        RegisterField::ALL.get(self.forms.focused).copied()
    }

    /// Enter key: press the primary button of whatever page is showing.
    pub fn submit_active_form(&mut self) {
        match self.current_page() {
            Page::Login => {
                let fields = self.forms.login.clone();
                let _ = self.login(&fields.email, &fields.password);
            }
            Page::Register => {
                let fields = self.forms.register.clone();
                let _ = self.register(
                    &fields.name,
                    &fields.email,
                    &fields.password,
                    &fields.confirm_password,
                );
            }
            Page::Dashboard => {
                let draft = self.intake.draft.clone();
                self.submit_complaint(&draft);
            }
        }
    }

    fn reject(&mut self, err: ValidationError) -> ValidationError {
        tracing::debug!(error = %err, "form rejected");
        self.dispatch_form(FormIntent::Fail {
            message: err.to_string(),
        });
        err
    }

    fn dispatch_session(&mut self, intent: SessionIntent) {
        dispatch_mvi!(self, session, SessionReducer, intent);
    }

    fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, forms, FormReducer, intent);
    }

    fn dispatch_intake(&mut self, intent: IntakeIntent) {
        dispatch_mvi!(self, intake, IntakeReducer, intent);
    }
}

fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    if [name, email, password, confirm_password]
        .iter()
        .any(|value| value.is_empty())
    {
        return Err(ValidationError::MissingFields);
    }
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}
