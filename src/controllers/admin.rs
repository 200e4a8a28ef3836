//! Admin Dashboard Controller

use crate::api::{ApiClient, ApiError, ApiResult, Transport};
use crate::models::BedRecord;
use crate::session;
use crate::storage::KeyValueStore;

pub const INVALID_KEY_MESSAGE: &str = "Invalid Admin Key.";
pub const CONFIRM_ALLOCATION_MESSAGE: &str =
    "Are you sure you want to run the allocation process? This cannot be undone.";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AdminView {
    #[default]
    Unauthenticated,
    Authenticated(Vec<BedRecord>),
}

/// Result of a confirmed allocation run
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationOutcome {
    pub message: String,
    pub rooms: Vec<BedRecord>,
}

/// True when the backend rejected the admin key
pub fn is_auth_failure(err: &ApiError) -> bool {
    matches!(err.status(), Some(401) | Some(403))
}

/// Validate a remembered key; a rejected key is forgotten
pub async fn check_auth_state<T: Transport>(api: &ApiClient<T>, store: &dyn KeyValueStore) -> AdminView {
    let Some(key) = session::admin_key(store) else {
        return AdminView::Unauthenticated;
    };

    match api.rooms_status(Some(&key)).await {
        Ok(rooms) => AdminView::Authenticated(rooms),
        Err(e) => {
            log::warn!("Stored admin key rejected: {}", e);
            session::clear_admin_key(store);
            AdminView::Unauthenticated
        }
    }
}

pub async fn authenticate<T: Transport>(
    api: &ApiClient<T>,
    store: &dyn KeyValueStore,
    key: &str,
) -> ApiResult<Vec<BedRecord>> {
    let key = key.trim();
    if key.is_empty() {
        return Err(ApiError::validation("Please enter an admin key."));
    }

    // Every failure reads as a bad key; the cause goes to the log
    let rooms = api.rooms_status(Some(key)).await.map_err(|e| {
        log::warn!("Admin key check failed: {}", e);
        match e {
            ApiError::Api { status, .. } => ApiError::Api { status, message: INVALID_KEY_MESSAGE.to_string() },
            _ => ApiError::validation(INVALID_KEY_MESSAGE),
        }
    })?;
    session::save_admin_key(store, key);
    log::info!("Admin authenticated, {} beds loaded", rooms.len());
    Ok(rooms)
}

/// Run the backend allocation once the user confirms, then refresh the grid.
/// Returns `None` when the user declines.
pub async fn auto_allocate<T: Transport>(
    api: &ApiClient<T>,
    store: &dyn KeyValueStore,
    confirm: impl FnOnce(&str) -> bool,
) -> ApiResult<Option<AllocationOutcome>> {
    let key = session::admin_key(store)
        .ok_or_else(|| ApiError::validation("Admin session expired. Please enter the key again."))?;
    if !confirm(CONFIRM_ALLOCATION_MESSAGE) {
        return Ok(None);
    }

    let result = async {
        let resp = api.auto_allocate(&key).await?;
        log::info!("Auto-allocation finished: {}", resp.message);
        let rooms = api.rooms_status(Some(&key)).await?;
        Ok::<_, ApiError>(AllocationOutcome { message: resp.message, rooms })
    }
    .await;

    if let Err(e) = &result {
        if is_auth_failure(e) {
            session::clear_admin_key(store);
        }
    }
    result.map(Some)
}

pub fn logout(store: &dyn KeyValueStore) {
    session::clear_admin_key(store);
}
