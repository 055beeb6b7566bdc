use super::{LoginState, Page, TeamPulseApp};
use crate::models::journal::DailyNote;
use crate::services::api::{ApiClient, DEFAULT_BASE_URL};
use crate::services::database::Database;
use crate::services::journal::DateCursor;
use crate::services::people::DirectoryFilter;
use crate::services::preferences::PreferenceStore;
use crate::ui_egui::theme::ThemeTokens;
use chrono::Local;
#[cfg(not(debug_assertions))]
use directories::ProjectDirs;

impl TeamPulseApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Initialize database and leak it for 'static lifetime required by eframe
        let database = initialize_database();
        let prefs = PreferenceStore::load(database);

        let base_url = std::env::var("TEAMPULSE_API_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        log::info!("Using backend at {}", base_url);
        let api = ApiClient::new(base_url).expect("Failed to build backend HTTP client");

        let today = Local::now().date_naive();

        let app = Self {
            prefs,
            api,
            session: None,
            login: LoginState::default(),
            page: Page::DailyWins,
            show_settings_dialog: false,
            cursor: DateCursor::new(today),
            show_calendar_popup: false,
            note: DailyNote::default(),
            note_date: None,
            profile: None,
            save_status: None,
            employees: Vec::new(),
            employees_loaded: false,
            filter: DirectoryFilter::default(),
        };

        app.apply_theme(&cc.egui_ctx);
        app
    }

    /// Recompute the derived tokens from current preferences and apply them.
    pub(super) fn apply_theme(&self, ctx: &egui::Context) {
        ThemeTokens::resolve(self.prefs.accent_color(), self.prefs.theme())
            .apply_to_context(self.prefs.theme(), ctx);
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.session.is_none() {
            self.render_login(ctx);
            return;
        }

        self.render_sidebar(ctx);

        if self.show_settings_dialog {
            self.render_settings_dialog(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::DailyWins => self.render_daily_wins(ui),
            Page::People => self.render_people(ui),
        });
    }

    pub(super) fn sign_out(&mut self) {
        self.api.sign_out();
        self.session = None;
        self.login = LoginState::default();
        self.profile = None;
        self.note = DailyNote::default();
        self.note_date = None;
        self.employees.clear();
        self.employees_loaded = false;
    }
}

fn initialize_database() -> &'static Database {
    let path = resolve_database_path();
    log::info!("Opening preference database at {}", path);

    let database = Database::new(&path).expect("Failed to open application database");
    database
        .initialize_schema()
        .expect("Failed to initialize database schema");

    Box::leak(Box::new(database))
}

fn resolve_database_path() -> String {
    #[cfg(not(debug_assertions))]
    {
        if let Some(dirs) = ProjectDirs::from("com", "teampulse", "TeamPulse") {
            let data_dir = dirs.data_dir();
            if std::fs::create_dir_all(data_dir).is_ok() {
                return data_dir.join("teampulse.db").to_string_lossy().into_owned();
            }
            log::warn!(
                "Could not create data directory {}, falling back to working directory",
                data_dir.display()
            );
        }
    }

    "teampulse.db".to_string()
}
