//! Admin Endpoints

use super::client::{with_query, ApiClient};
use super::error::ApiResult;
use super::transport::Transport;
use crate::models::{BedRecord, MessageResponse};

impl<T: Transport> ApiClient<T> {
    /// Every bed with its occupancy; the key is optional for read-only views
    pub async fn rooms_status(&self, key: Option<&str>) -> ApiResult<Vec<BedRecord>> {
        let path = match key {
            Some(key) => with_query("/api/admin/rooms-status", &[("key", key)]),
            None => "/api/admin/rooms-status".to_string(),
        };
        self.get_json(&path).await
    }

    pub async fn auto_allocate(&self, key: &str) -> ApiResult<MessageResponse> {
        self.post_empty(&with_query("/api/admin/auto-allocate", &[("key", key)])).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{json_response, ScriptedTransport};
    use crate::api::{ApiError, Method};
    use serde_json::json;

    #[tokio::test]
    async fn test_rooms_status_with_and_without_key() {
        let transport = ScriptedTransport::new();
        transport.route(
            Method::Get,
            "/api/admin/rooms-status",
            json_response(200, json!([
                {"RoomNumber": "101", "Floor": 1, "RoomType": "Double", "BlockName": "A",
                 "BedLabel": "A", "IsOccupied": false, "Occupant": null}
            ])),
        );
        let client = ApiClient::with_transport("", transport.clone());

        assert_eq!(client.rooms_status(Some("s3cret key")).await.unwrap().len(), 1);
        assert_eq!(client.rooms_status(None).await.unwrap().len(), 1);

        let urls: Vec<_> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls, vec![
            "/api/admin/rooms-status?key=s3cret%20key".to_string(),
            "/api/admin/rooms-status".to_string(),
        ]);
    }

    #[tokio::test]
    async fn test_auto_allocate_unauthorized() {
        let transport = ScriptedTransport::new();
        transport.route(
            Method::Post,
            "/api/admin/auto-allocate",
            json_response(401, json!({"detail": "Unauthorized"})),
        );
        let client = ApiClient::with_transport("", transport.clone());

        let err = client.auto_allocate("wrong").await.unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.to_string(), "Unauthorized");
        assert!(transport.requests()[0].body.is_none());
        assert!(!matches!(err, ApiError::Connectivity));
    }
}
