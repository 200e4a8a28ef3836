//! Session Identity
//!
//! Typed access to the storage keys shared by the pages.

use crate::storage::KeyValueStore;

pub const USER_EMAIL_KEY: &str = "userEmail";
pub const STUDENT_ID_KEY: &str = "studentID";
pub const ADMIN_KEY_KEY: &str = "adminKey";

/// Logged-in student, persisted in local storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentIdentity {
    pub email: String,
    pub student_id: Option<String>,
}

pub fn student(store: &dyn KeyValueStore) -> Option<StudentIdentity> {
    let email = store.get(USER_EMAIL_KEY).filter(|e| !e.is_empty())?;
    Some(StudentIdentity {
        email,
        student_id: store.get(STUDENT_ID_KEY).filter(|id| !id.is_empty()),
    })
}

pub fn save_student(store: &dyn KeyValueStore, email: &str, student_id: &str) {
    store.set(USER_EMAIL_KEY, email);
    store.set(STUDENT_ID_KEY, student_id);
}

pub fn clear_student(store: &dyn KeyValueStore) {
    store.remove(USER_EMAIL_KEY);
    store.remove(STUDENT_ID_KEY);
}

/// Admin key, kept in session storage
pub fn admin_key(store: &dyn KeyValueStore) -> Option<String> {
    store.get(ADMIN_KEY_KEY).filter(|k| !k.is_empty())
}

pub fn save_admin_key(store: &dyn KeyValueStore, key: &str) {
    store.set(ADMIN_KEY_KEY, key);
}

pub fn clear_admin_key(store: &dyn KeyValueStore) {
    store.remove(ADMIN_KEY_KEY);
}
