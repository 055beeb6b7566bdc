//! Preference store: single source of truth for appearance settings.
//!
//! Each field persists under its own key, so one corrupted value cannot
//! invalidate the others. Storage is best-effort throughout: a failed read
//! falls back to the field default, a failed write is logged and the new
//! value simply does not survive the next launch.

use std::str::FromStr;

use anyhow::{Context, Result};
use rusqlite::OptionalExtension;

use crate::models::preferences::{AccentColor, Preferences, SidebarStyle, Theme};
use crate::services::database::Database;

const THEME_KEY: &str = "theme";
const ACCENT_COLOR_KEY: &str = "accent-color";
const SIDEBAR_STYLE_KEY: &str = "sidebar-style";

pub struct PreferenceStore<'a> {
    db: &'a Database,
    current: Preferences,
}

impl<'a> PreferenceStore<'a> {
    /// Read all three keys independently; a missing, unreadable, or
    /// unrecognized value falls back to that field's own default.
    pub fn load(db: &'a Database) -> Self {
        let current = Preferences {
            theme: read_field(db, THEME_KEY),
            accent_color: read_field(db, ACCENT_COLOR_KEY),
            sidebar_style: read_field(db, SIDEBAR_STYLE_KEY),
        };
        log::info!(
            "Loaded preferences: theme={}, accent={}, sidebar={}",
            current.theme,
            current.accent_color,
            current.sidebar_style
        );
        Self { db, current }
    }

    pub fn preferences(&self) -> Preferences {
        self.current
    }

    pub fn theme(&self) -> Theme {
        self.current.theme
    }

    pub fn accent_color(&self) -> AccentColor {
        self.current.accent_color
    }

    pub fn sidebar_style(&self) -> SidebarStyle {
        self.current.sidebar_style
    }

    pub fn set_theme(&mut self, value: Theme) {
        self.current.theme = value;
        self.persist(THEME_KEY, value.as_str());
    }

    pub fn set_accent_color(&mut self, value: AccentColor) {
        self.current.accent_color = value;
        self.persist(ACCENT_COLOR_KEY, value.as_str());
    }

    pub fn set_sidebar_style(&mut self, value: SidebarStyle) {
        self.current.sidebar_style = value;
        self.persist(SIDEBAR_STYLE_KEY, value.as_str());
    }

    /// Restore all three documented defaults in one state update and delete
    /// the persisted keys, so a fresh load also yields defaults.
    pub fn reset_to_defaults(&mut self) {
        self.current = Preferences::default();
        for key in [THEME_KEY, ACCENT_COLOR_KEY, SIDEBAR_STYLE_KEY] {
            if let Err(err) = self.remove(key) {
                log::warn!("Failed to clear preference '{}': {}", key, err);
            }
        }
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(err) = self.write(key, value) {
            log::warn!("Failed to persist preference '{}': {}", key, err);
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.db
            .connection()
            .execute(
                "INSERT OR REPLACE INTO preferences (key, value) VALUES (?1, ?2)",
                (key, value),
            )
            .context(format!("Failed to write preference '{}'", key))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.db
            .connection()
            .execute("DELETE FROM preferences WHERE key = ?1", [key])
            .context(format!("Failed to delete preference '{}'", key))?;
        Ok(())
    }
}

fn read_field<T>(db: &Database, key: &str) -> T
where
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    let raw: Result<Option<String>, rusqlite::Error> = db
        .connection()
        .query_row(
            "SELECT value FROM preferences WHERE key = ?1",
            [key],
            |row| row.get(0),
        )
        .optional();

    match raw {
        Ok(Some(value)) => value.parse().unwrap_or_else(|err| {
            log::warn!("Ignoring stored preference '{}': {}", key, err);
            T::default()
        }),
        Ok(None) => T::default(),
        Err(err) => {
            log::warn!("Failed to read preference '{}': {}", key, err);
            T::default()
        }
    }
}
