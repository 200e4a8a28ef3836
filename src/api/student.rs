//! Student Endpoints

use serde::Serialize;

use super::client::{with_query, ApiClient};
use super::error::ApiResult;
use super::transport::Transport;
use crate::models::{LoginResponse, MessageResponse, Registration, StatusResponse};

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct ApplyArgs<'a> {
    #[serde(rename = "studentID")]
    student_id: &'a str,
    #[serde(rename = "roomType")]
    room_type: &'a str,
}

impl<T: Transport> ApiClient<T> {
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        self.post_json("/api/login", &LoginArgs { email, password }).await
    }

    pub async fn register(&self, registration: &Registration) -> ApiResult<MessageResponse> {
        self.post_json("/api/register", registration).await
    }

    pub async fn status(&self, email: &str) -> ApiResult<StatusResponse> {
        self.get_json(&with_query("/api/status", &[("email", email)])).await
    }

    pub async fn apply(&self, student_id: &str, room_type: &str) -> ApiResult<MessageResponse> {
        self.post_json("/api/apply", &ApplyArgs { student_id, room_type }).await
    }
}
