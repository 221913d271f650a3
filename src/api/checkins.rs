//! Check-in API endpoints
//!
//! Handles HTTP requests for recording and listing client attendance. The
//! front desk scanner posts the client id read from the member's QR code.

use crate::api::utils::RouterState;
use crate::checkins::Checkin;
use crate::error::AppError;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

/// Request to record a check-in
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinRequest {
    /// ID of the client checking in (the QR code payload)
    pub client_id: String,
}

/// POST /api/checkins - Record a check-in for a client
pub async fn create_checkin(
    State((_, client_db, _, checkin_db)): State<RouterState>,
    Json(request): Json<CheckinRequest>,
) -> Result<(StatusCode, Json<Checkin>), AppError> {
    client_db
        .get(&request.client_id)
        .await?
        .ok_or_else(|| AppError::ClientNotFound(request.client_id.clone()))?;

    let checkin = Checkin::new(Uuid::new_v4().to_string(), request.client_id);
    checkin_db.create(&checkin).await?;

    Ok((StatusCode::CREATED, Json(checkin)))
}

/// GET /api/clients/:id/checkins - List a client's check-ins, newest first
pub async fn list_client_checkins(
    State((_, client_db, _, checkin_db)): State<RouterState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Checkin>>, AppError> {
    client_db
        .get(&id)
        .await?
        .ok_or_else(|| AppError::ClientNotFound(id.clone()))?;

    let checkins = checkin_db.list_for_client(&id).await?;
    Ok(Json(checkins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::clients::CreateClientRequest;
    use crate::checkins::CheckinDb;
    use crate::clients::ClientDb;
    use crate::packages::PackageDb;
    use crate::settings::SettingsDb;
    use std::sync::Arc;
    use tempfile::TempDir;

    async fn create_test_router_state() -> (RouterState, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let pool = crate::db::connect(db_path.to_str().unwrap())
            .await
            .expect("Failed to create test database");
        (
            (
                Arc::new(SettingsDb::new(pool.clone())),
                Arc::new(ClientDb::new(pool.clone())),
                Arc::new(PackageDb::new(pool.clone())),
                Arc::new(CheckinDb::new(pool)),
            ),
            temp_dir,
        )
    }

    async fn register_client(router_state: &RouterState, name: &str) -> String {
        let (_, Json(client)) = crate::api::clients::create_client(
            State(router_state.clone()),
            Json(CreateClientRequest {
                name: name.to_string(),
                phone: None,
                package_id: None,
            }),
        )
        .await
        .unwrap();
        client.id
    }

    #[tokio::test]
    async fn test_create_checkin() {
        let (router_state, _temp_dir) = create_test_router_state().await;
        let client_id = register_client(&router_state, "Ana").await;

        let request = CheckinRequest {
            client_id: client_id.clone(),
        };
        let (status, Json(checkin)) = create_checkin(State(router_state), Json(request))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(checkin.client_id, client_id);
    }

    #[tokio::test]
    async fn test_create_checkin_unknown_client() {
        let (router_state, _temp_dir) = create_test_router_state().await;
        let request = CheckinRequest {
            client_id: "nonexistent".to_string(),
        };
        let result = create_checkin(State(router_state), Json(request)).await;
        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::ClientNotFound(_) => {}
            other => panic!("Expected ClientNotFound error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_client_checkins() {
        let (router_state, _temp_dir) = create_test_router_state().await;
        let client_id = register_client(&router_state, "Ana").await;

        for _ in 0..3 {
            create_checkin(
                State(router_state.clone()),
                Json(CheckinRequest {
                    client_id: client_id.clone(),
                }),
            )
            .await
            .unwrap();
        }

        let checkins = list_client_checkins(State(router_state), Path(client_id))
            .await
            .unwrap()
            .0;
        assert_eq!(checkins.len(), 3);
        // Newest first
        assert!(checkins[0].checked_in_at >= checkins[2].checked_in_at);
    }

    #[tokio::test]
    async fn test_list_checkins_unknown_client() {
        let (router_state, _temp_dir) = create_test_router_state().await;
        let result =
            list_client_checkins(State(router_state), Path("nonexistent".to_string())).await;
        assert!(result.is_err());
    }
}
