//! Student Portal Controller
//!
//! Login, registration, status and application flows for students.

use crate::api::{ApiClient, ApiError, ApiResult, Transport};
use crate::models::{ApplicationStatus, BedRecord, Registration, StatusResponse, ROOM_TYPES};
use crate::session;
use crate::storage::KeyValueStore;

/// Which half of the portal is visible
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PortalView {
    #[default]
    Unauthenticated,
    Authenticated(Dashboard),
}

/// Everything the student dashboard shows
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub email: String,
    pub status: StatusResponse,
    pub rooms: Vec<BedRecord>,
}

/// What the status panel renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusView {
    Allocated { block: String, room: String, bed: String },
    /// Application submitted, waiting for the admin
    Pending,
    /// No application yet; show the form
    Apply,
}

impl StatusView {
    pub fn from_status(status: &StatusResponse) -> Self {
        let or_na = |v: &Option<String>| v.clone().unwrap_or_else(|| "N/A".to_string());
        match status.status {
            ApplicationStatus::Allocated => StatusView::Allocated {
                block: or_na(&status.block_name),
                room: or_na(&status.room_number),
                bed: or_na(&status.bed_label),
            },
            ApplicationStatus::Pending => StatusView::Pending,
            ApplicationStatus::NotApplied => StatusView::Apply,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Raw registration inputs, validated into a [`Registration`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub department: String,
    pub year: String,
    pub gender: String,
    pub physically_disabled: bool,
}

impl RegistrationForm {
    pub fn validate(&self) -> ApiResult<Registration> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(ApiError::validation("Email and password are required."));
        }
        let year = self
            .year
            .trim()
            .parse::<u16>()
            .map_err(|_| ApiError::validation("Year must be a number."))?;

        Ok(Registration {
            full_name: self.full_name.trim().to_string(),
            email: email.to_string(),
            password: self.password.clone(),
            department: self.department.trim().to_string(),
            year,
            gender: self.gender.clone(),
            physically_disabled: self.physically_disabled,
        })
    }
}

/// Restore the dashboard from stored identity, logging out if it is stale
pub async fn check_login_state<T: Transport>(api: &ApiClient<T>, store: &dyn KeyValueStore) -> PortalView {
    let Some(identity) = session::student(store) else {
        return PortalView::Unauthenticated;
    };

    match load_dashboard(api, &identity.email).await {
        Ok(dashboard) => PortalView::Authenticated(dashboard),
        Err(e) => {
            log::warn!("Auto-login failed: {}", e);
            logout(store);
            PortalView::Unauthenticated
        }
    }
}

/// Fetch status and room grid together
pub async fn load_dashboard<T: Transport>(api: &ApiClient<T>, email: &str) -> ApiResult<Dashboard> {
    let (status, rooms) = futures::join!(api.status(email), api.rooms_status(None));
    Ok(Dashboard {
        email: email.to_string(),
        status: status?,
        rooms: rooms?,
    })
}

pub async fn login<T: Transport>(
    api: &ApiClient<T>,
    store: &dyn KeyValueStore,
    form: &LoginForm,
) -> ApiResult<Dashboard> {
    let email = form.email.trim();
    if email.is_empty() || form.password.is_empty() {
        return Err(ApiError::validation("Please enter your email and password."));
    }

    let resp = api.login(email, &form.password).await?;
    session::save_student(store, &resp.email, &resp.student_id);
    log::info!("Logged in as {}", resp.email);

    load_dashboard(api, &resp.email).await.map_err(|e| {
        logout(store);
        e
    })
}

/// Register and return the backend's confirmation message
pub async fn register<T: Transport>(api: &ApiClient<T>, form: &RegistrationForm) -> ApiResult<String> {
    let registration = form.validate()?;
    let resp = api.register(&registration).await?;
    log::info!("Registered {}", registration.email);
    Ok(resp.message)
}

/// A submitted application. The reload may fail on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationOutcome {
    pub message: String,
    pub dashboard: ApiResult<Dashboard>,
}

/// Submit an application and reload the dashboard
pub async fn apply<T: Transport>(
    api: &ApiClient<T>,
    store: &dyn KeyValueStore,
    room_type: &str,
) -> ApiResult<ApplicationOutcome> {
    let identity = session::student(store)
        .ok_or_else(|| ApiError::validation("Your session has expired. Please log in again."))?;
    let student_id = identity
        .student_id
        .ok_or_else(|| ApiError::validation("Your session has expired. Please log in again."))?;
    if !ROOM_TYPES.contains(&room_type) {
        return Err(ApiError::validation("Please choose a room type."));
    }

    let resp = api.apply(&student_id, room_type).await?;
    log::info!("Application submitted for {} room", room_type);
    let dashboard = load_dashboard(api, &identity.email).await;
    if let Err(e) = &dashboard {
        log::warn!("Dashboard reload after applying failed: {}", e);
    }
    Ok(ApplicationOutcome { message: resp.message, dashboard })
}

pub fn logout(store: &dyn KeyValueStore) {
    session::clear_student(store);
}
