//! Blocking HTTP clients for the backend services.
//!
//! The backend endpoints (sign-in, employees, daily notes) are external
//! collaborators with loosely-specified response shapes. Every method here
//! normalizes transport or shape failures into empty/absent results so the
//! views can render a neutral "no data" state instead of an error.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::models::journal::DailyNote;
use crate::models::people::{Employee, EmployeeStatus, UserProfile, FIELD_PLACEHOLDER};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SignedInUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInResult {
    pub success: bool,
    pub message: Option<String>,
    pub user: Option<SignedInUser>,
}

impl SignInResult {
    fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: Some(message.to_string()),
            user: None,
        }
    }
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build backend HTTP client")?;

        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn sign_in(&self, email: &str, password: &str) -> SignInResult {
        match self.try_sign_in(email, password) {
            Ok(result) => result,
            Err(err) => {
                log::warn!("Sign-in request failed: {}", err);
                SignInResult::failure("Unable to reach the sign-in service")
            }
        }
    }

    fn try_sign_in(&self, email: &str, password: &str) -> Result<SignInResult> {
        let response = self
            .client
            .post(self.url("/signin"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .context("Network error during sign-in")?;

        let status = response.status();
        let body: Value = response.json().context("Sign-in response is not valid JSON")?;

        if !status.is_success() {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Login failed")
                .to_string();
            return Ok(SignInResult {
                success: false,
                message: Some(message),
                user: None,
            });
        }

        let user = body
            .get("user")
            .and_then(|user| serde_json::from_value(user.clone()).ok());
        Ok(SignInResult {
            success: true,
            message: None,
            user,
        })
    }

    /// Fire-and-forget; a failed sign-out only ends the local session.
    pub fn sign_out(&self) {
        if let Err(err) = self.client.post(self.url("/signout")).send() {
            log::warn!("Sign-out request failed: {}", err);
        }
    }

    pub fn employees(&self) -> Vec<Employee> {
        match self.fetch_json(&self.url("/employees")) {
            Ok(body) => employees_from_json(&body),
            Err(err) => {
                log::warn!("Employee fetch failed: {}", err);
                Vec::new()
            }
        }
    }

    pub fn self_profile(&self) -> Option<UserProfile> {
        match self.fetch_json(&self.url("/daily-wins/people")) {
            Ok(body) => profile_from_json(&body),
            Err(err) => {
                log::warn!("Profile fetch failed: {}", err);
                None
            }
        }
    }

    pub fn daily_note(&self, date: NaiveDate) -> Option<DailyNote> {
        let url = format!(
            "{}?date={}",
            self.url("/daily-wins/notes"),
            date.format("%Y-%m-%d")
        );
        match self.fetch_json(&url) {
            Ok(body) => note_from_json(&body),
            Err(err) => {
                log::warn!("Daily note fetch failed: {}", err);
                None
            }
        }
    }

    pub fn save_daily_note(&self, employee_id: &str, date: NaiveDate, note: &DailyNote) -> bool {
        let payload = serde_json::json!({
            "employee_id": employee_id,
            "date": date.format("%Y-%m-%d").to_string(),
            "wins": note.wins,
            "learnings": note.learnings,
        });

        match self
            .client
            .post(self.url("/daily-wins/notes"))
            .json(&payload)
            .send()
        {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                log::warn!("Daily note save failed: {}", err);
                false
            }
        }
    }

    fn fetch_json(&self, url: &str) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Network error fetching {}", url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Request to {} failed with HTTP status {}", url, status);
        }

        response
            .json()
            .with_context(|| format!("Response from {} is not valid JSON", url))
    }
}

/// Normalize the employee list from any of the shapes the backend has been
/// observed to return: a bare array, `{"employees": [...]}`, or
/// `{"data": [...]}`.
pub fn employees_from_json(value: &Value) -> Vec<Employee> {
    let records = value
        .as_array()
        .or_else(|| value.get("employees").and_then(Value::as_array))
        .or_else(|| value.get("data").and_then(Value::as_array));

    match records {
        Some(records) => records.iter().map(employee_from_record).collect(),
        None => Vec::new(),
    }
}

fn employee_from_record(record: &Value) -> Employee {
    let field = |key: &str| {
        record
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(FIELD_PLACEHOLDER)
            .to_string()
    };

    Employee {
        emp_code: field("employee_code"),
        name: field("name"),
        email: field("email"),
        role: field("role_title"),
        department: field("department"),
        classification: field("classification"),
        status: EmployeeStatus::from_raw(
            record.get("status").and_then(Value::as_str).unwrap_or(""),
        ),
    }
}

/// Accepts `{"self": {...}}` or a bare record; `name` is required.
pub fn profile_from_json(value: &Value) -> Option<UserProfile> {
    let record = value.get("self").unwrap_or(value);

    let name = record
        .get("name")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())?;

    let team = record
        .get("role_title")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .or_else(|| {
            record
                .get("department")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
        })
        .unwrap_or("Team Member");

    let badge = record.get("email").and_then(Value::as_str).unwrap_or("");

    Some(UserProfile {
        initials: UserProfile::initials_from_name(name),
        name: name.to_string(),
        team: team.to_string(),
        badge: badge.to_string(),
    })
}

/// Accepts `{"note": {...}}` or a bare note object.
pub fn note_from_json(value: &Value) -> Option<DailyNote> {
    let record = value.get("note").unwrap_or(value);
    serde_json::from_value(record.clone()).ok()
}
