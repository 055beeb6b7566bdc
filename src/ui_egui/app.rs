mod lifecycle;
mod settings_dialog;
mod sidebar;
mod views;

use chrono::NaiveDate;

use crate::models::credentials::{CredentialErrors, Credentials};
use crate::models::journal::DailyNote;
use crate::models::people::{Employee, UserProfile};
use crate::services::api::{ApiClient, SignedInUser};
use crate::services::journal::DateCursor;
use crate::services::people::DirectoryFilter;
use crate::services::preferences::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Page {
    DailyWins,
    People,
}

/// Sign-in form state, only live while signed out.
#[derive(Default)]
pub(super) struct LoginState {
    pub credentials: Credentials,
    pub field_errors: CredentialErrors,
    pub server_error: Option<String>,
}

pub struct TeamPulseApp {
    /// Appearance preferences backed by the leaked database
    prefs: PreferenceStore<'static>,
    api: ApiClient,
    session: Option<SignedInUser>,
    login: LoginState,
    page: Page,
    show_settings_dialog: bool,

    // Daily-wins state
    cursor: DateCursor,
    show_calendar_popup: bool,
    note: DailyNote,
    /// Date the current `note` was fetched for
    note_date: Option<NaiveDate>,
    profile: Option<UserProfile>,
    save_status: Option<String>,

    // People directory state
    employees: Vec<Employee>,
    employees_loaded: bool,
    filter: DirectoryFilter,
}

impl eframe::App for TeamPulseApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}
