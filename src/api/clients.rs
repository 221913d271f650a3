//! Client roster API endpoints
//!
//! Handles HTTP requests for client CRUD operations.

use crate::api::utils::{validate_name, RouterState};
use crate::clients::Client;
use crate::error::AppError;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to register a new client
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    /// Client's display name
    pub name: String,
    /// Contact phone number (optional)
    pub phone: Option<String>,
    /// Membership package to assign (optional, must exist)
    pub package_id: Option<String>,
}

/// Request to update a client
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientRequest {
    /// New display name (optional)
    pub name: Option<String>,
    /// New phone number (optional)
    pub phone: Option<String>,
    /// New membership package (optional, must exist)
    pub package_id: Option<String>,
}

/// Clients list response
#[derive(Serialize)]
pub struct ClientsListResponse {
    /// List of all clients
    pub clients: Vec<Client>,
    /// Total number of clients
    pub count: usize,
}

/// Message response
#[derive(Serialize)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
    /// Status indicator (e.g., "ok", "error")
    pub status: String,
}

/// GET /api/clients - List all clients
pub async fn list_clients(
    State((_, client_db, _, _)): State<RouterState>,
) -> Result<Json<ClientsListResponse>, AppError> {
    let clients = client_db.list().await?;

    Ok(Json(ClientsListResponse {
        count: clients.len(),
        clients,
    }))
}

/// GET /api/clients/:id - Get a specific client
pub async fn get_client(
    State((_, client_db, _, _)): State<RouterState>,
    Path(id): Path<String>,
) -> Result<Json<Client>, AppError> {
    let client = client_db
        .get(&id)
        .await?
        .ok_or(AppError::ClientNotFound(id))?;

    Ok(Json(client))
}

/// POST /api/clients - Register a new client
pub async fn create_client(
    State((_, client_db, package_db, _)): State<RouterState>,
    Json(request): Json<CreateClientRequest>,
) -> Result<(StatusCode, Json<Client>), AppError> {
    let name = validate_name(&request.name)?;

    // Assigned packages must exist before the FK sees the insert
    if let Some(package_id) = &request.package_id {
        package_db
            .get(package_id)
            .await?
            .ok_or_else(|| AppError::PackageNotFound(package_id.clone()))?;
    }

    let client = Client::new(
        Uuid::new_v4().to_string(),
        name,
        request.phone,
        request.package_id,
    );
    client_db.create(&client).await?;

    Ok((StatusCode::CREATED, Json(client)))
}

/// PUT /api/clients/:id - Update a client
pub async fn update_client(
    State((_, client_db, package_db, _)): State<RouterState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateClientRequest>,
) -> Result<Json<Client>, AppError> {
    let mut client = client_db
        .get(&id)
        .await?
        .ok_or_else(|| AppError::ClientNotFound(id.clone()))?;

    if let Some(name) = request.name {
        client.name = validate_name(&name)?;
    }

    if let Some(phone) = request.phone {
        client.phone = Some(phone);
    }

    if let Some(package_id) = request.package_id {
        package_db
            .get(&package_id)
            .await?
            .ok_or_else(|| AppError::PackageNotFound(package_id.clone()))?;
        client.package_id = Some(package_id);
    }

    client_db.update(&client).await?;

    let client = client_db
        .get(&id)
        .await?
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Client not found after update")))?;

    Ok(Json(client))
}

/// DELETE /api/clients/:id - Delete a client
pub async fn delete_client(
    State((_, client_db, _, _)): State<RouterState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    if !client_db.delete(&id).await? {
        return Err(AppError::ClientNotFound(id));
    }

    Ok(Json(MessageResponse {
        message: "Client deleted successfully".to_string(),
        status: "ok".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::packages::CreatePackageRequest;
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

    #[tokio::test]
    async fn test_list_clients_empty() {
        let (router_state, _temp_dir) = create_test_router_state().await;
        let response = list_clients(State(router_state)).await.unwrap().0;
        assert_eq!(response.count, 0);
        assert!(response.clients.is_empty());
    }

    #[tokio::test]
    async fn test_create_client() {
        let (router_state, _temp_dir) = create_test_router_state().await;
        let request = CreateClientRequest {
            name: "Ana García".to_string(),
            phone: Some("+34 600 000 000".to_string()),
            package_id: None,
        };
        let (status, Json(client)) = create_client(State(router_state.clone()), Json(request))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(client.name, "Ana García");

        let response = list_clients(State(router_state)).await.unwrap().0;
        assert_eq!(response.count, 1);
    }

    #[tokio::test]
    async fn test_create_client_with_unknown_package() {
        let (router_state, _temp_dir) = create_test_router_state().await;
        let request = CreateClientRequest {
            name: "Ana".to_string(),
            phone: None,
            package_id: Some("nonexistent".to_string()),
        };
        let result = create_client(State(router_state), Json(request)).await;
        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::PackageNotFound(_) => {}
            other => panic!("Expected PackageNotFound error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_client_empty_name() {
        let (router_state, _temp_dir) = create_test_router_state().await;
        let request = CreateClientRequest {
            name: "   ".to_string(),
            phone: None,
            package_id: None,
        };
        let result = create_client(State(router_state), Json(request)).await;
        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::InvalidRequest(_) => {}
            other => panic!("Expected InvalidRequest error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_client_not_found() {
        let (router_state, _temp_dir) = create_test_router_state().await;
        let result = get_client(State(router_state), Path("nonexistent".to_string())).await;
        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::ClientNotFound(_) => {}
            other => panic!("Expected ClientNotFound error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_client_assigns_package() {
        let (router_state, _temp_dir) = create_test_router_state().await;
        let (_, _, package_db, _) = &router_state;

        let package_request = CreatePackageRequest {
            name: "Monthly".to_string(),
            price: 30.0,
            duration_days: 30,
        };
        let (_, Json(package)) =
            crate::api::packages::create_package(State(router_state.clone()), Json(package_request))
                .await
                .unwrap();
        assert!(package_db.get(&package.id).await.unwrap().is_some());

        let (_, Json(client)) = create_client(
            State(router_state.clone()),
            Json(CreateClientRequest {
                name: "Ana".to_string(),
                phone: None,
                package_id: None,
            }),
        )
        .await
        .unwrap();

        let update = UpdateClientRequest {
            name: None,
            phone: None,
            package_id: Some(package.id.clone()),
        };
        let updated = update_client(State(router_state), Path(client.id.clone()), Json(update))
            .await
            .unwrap()
            .0;
        assert_eq!(updated.name, "Ana");
        assert_eq!(updated.package_id, Some(package.id));
    }

    #[tokio::test]
    async fn test_delete_client() {
        let (router_state, _temp_dir) = create_test_router_state().await;
        let (_, Json(client)) = create_client(
            State(router_state.clone()),
            Json(CreateClientRequest {
                name: "Ana".to_string(),
                phone: None,
                package_id: None,
            }),
        )
        .await
        .unwrap();

        let result = delete_client(State(router_state.clone()), Path(client.id.clone())).await;
        assert!(result.is_ok());

        let result = get_client(State(router_state), Path(client.id)).await;
        assert!(result.is_err());
    }
}
