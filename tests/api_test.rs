//! Integration tests for API endpoints.
//!
//! These drive the real router through `tower::ServiceExt::oneshot` with
//! hand-rolled stub services, so no database or live connections are
//! involved.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::{NaiveDate, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use billing_admin::api::{create_router, AppState};
use billing_admin::domain::{
    Client, Contract, ContractStatus, CreateClient, CreateContract, CreateService, CreateUser,
    Service, UpdateClient, UpdateContract, UpdateService, UpdateUser, User, UserResponse, UserRole,
};
use billing_admin::errors::{AppError, AppResult};
use billing_admin::infra::Database;
use billing_admin::services::{
    AuthResponse, AuthService, Claims, ClientService, ContractService, ServiceService, UserService,
};

const VALID_TOKEN: &str = "valid-test-token";

// =============================================================================
// Stub Services
// =============================================================================

fn sample_client() -> Client {
    Client {
        id: Some(1),
        code: Some(42),
        nickname: "Acme".to_string(),
        company_name: "Acme Ltda".to_string(),
        cnpj: "12345678901234".to_string(),
    }
}

fn sample_contract() -> Contract {
    Contract {
        id: Some(1),
        contract_code: "CT-2024-001".to_string(),
        client_id: 1,
        service_id: 2,
        quantity: 10,
        unit_price: 25.5,
        start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        end_date: None,
        status: ContractStatus::Active,
        observation: None,
    }
}

fn sample_service() -> Service {
    Service {
        id: Some(1),
        name: "Payroll processing".to_string(),
        code: "PAY".to_string(),
        default_price: Some(150.0),
    }
}

fn sample_user_response() -> UserResponse {
    UserResponse {
        id: Some(1),
        email: "user@example.com".to_string(),
        role: UserRole::Employee,
    }
}

/// Auth stub: accepts one fixed token, one fixed credential pair.
struct StubAuthService;

#[async_trait]
impl AuthService for StubAuthService {
    async fn login(&self, email: String, password: String) -> AppResult<AuthResponse> {
        if email == "user@example.com" && password == "secret123" {
            Ok(AuthResponse {
                token: "minted-token".to_string(),
                user: sample_user_response(),
            })
        } else {
            Err(AppError::InvalidCredentials)
        }
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        if token == VALID_TOKEN {
            Ok(Claims {
                sub: 1,
                email: "user@example.com".to_string(),
                role: "EMPLOYEE".to_string(),
                exp: Utc::now().timestamp() + 3600,
                iat: Utc::now().timestamp(),
            })
        } else {
            Err(AppError::TokenInvalid)
        }
    }
}

/// Client stub: id 1 exists, one CNPJ is already taken.
struct StubClientService;

#[async_trait]
impl ClientService for StubClientService {
    async fn register(&self, data: CreateClient) -> AppResult<Client> {
        if data.cnpj == "44444444444444" {
            return Err(AppError::conflict("Client with this CNPJ already exists."));
        }
        Ok(Client {
            id: Some(1),
            code: data.code,
            nickname: data.nickname,
            company_name: data.company_name,
            cnpj: data.cnpj,
        })
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Client> {
        if id == 1 {
            Ok(sample_client())
        } else {
            Err(AppError::not_found("Client"))
        }
    }

    async fn get_all(&self) -> AppResult<Vec<Client>> {
        Ok(vec![sample_client()])
    }

    async fn update(&self, id: i32, _data: UpdateClient) -> AppResult<Client> {
        if id == 1 {
            Ok(sample_client())
        } else {
            Err(AppError::not_found("Client"))
        }
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        if id == 1 {
            Ok(())
        } else {
            Err(AppError::not_found("Client"))
        }
    }
}

struct StubServiceService;

#[async_trait]
impl ServiceService for StubServiceService {
    async fn create(&self, data: CreateService) -> AppResult<Service> {
        Ok(Service {
            id: Some(1),
            name: data.name,
            code: data.code,
            default_price: data.default_price,
        })
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Service> {
        if id == 1 {
            Ok(sample_service())
        } else {
            Err(AppError::not_found("Service"))
        }
    }

    async fn get_all(&self) -> AppResult<Vec<Service>> {
        Ok(vec![sample_service()])
    }

    async fn update(&self, id: i32, _data: UpdateService) -> AppResult<Service> {
        if id == 1 {
            Ok(sample_service())
        } else {
            Err(AppError::not_found("Service"))
        }
    }

    async fn delete(&self, _id: i32) -> AppResult<()> {
        Ok(())
    }
}

/// Contract stub that records the payload the handler passed down.
#[derive(Default)]
struct RecordingContractService {
    received: Mutex<Option<CreateContract>>,
}

#[async_trait]
impl ContractService for RecordingContractService {
    async fn create(&self, data: CreateContract) -> AppResult<Contract> {
        let contract = Contract {
            id: Some(1),
            contract_code: data.contract_code.clone(),
            client_id: data.client_id,
            service_id: data.service_id,
            quantity: data.quantity,
            unit_price: data.unit_price,
            start_date: data.start_date,
            end_date: data.end_date,
            status: data.status,
            observation: data.observation.clone(),
        };
        *self.received.lock().unwrap() = Some(data);
        Ok(contract)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Contract> {
        if id == 1 {
            Ok(sample_contract())
        } else {
            Err(AppError::not_found("Contract"))
        }
    }

    async fn get_all(&self) -> AppResult<Vec<Contract>> {
        Ok(vec![sample_contract()])
    }

    async fn get_by_client(&self, _client_id: i32) -> AppResult<Vec<Contract>> {
        Ok(vec![sample_contract()])
    }

    async fn update(&self, _id: i32, _data: UpdateContract) -> AppResult<Contract> {
        Ok(sample_contract())
    }

    async fn delete(&self, _id: i32) -> AppResult<()> {
        Ok(())
    }
}

struct StubUserService;

#[async_trait]
impl UserService for StubUserService {
    async fn register(&self, data: CreateUser) -> AppResult<User> {
        if data.email == "taken@example.com" {
            return Err(AppError::conflict("User with this email already exists."));
        }
        Ok(User {
            id: Some(1),
            email: data.email,
            password_hash: "stored-hash".to_string(),
            role: UserRole::Employee,
        })
    }

    async fn get_by_id(&self, id: i32) -> AppResult<UserResponse> {
        if id == 1 {
            Ok(sample_user_response())
        } else {
            Err(AppError::not_found("User"))
        }
    }

    async fn get_all(&self) -> AppResult<Vec<UserResponse>> {
        Ok(vec![sample_user_response()])
    }

    async fn update(&self, _id: i32, _data: UpdateUser) -> AppResult<UserResponse> {
        Ok(sample_user_response())
    }

    async fn delete(&self, _id: i32) -> AppResult<()> {
        Ok(())
    }
}

/// Stubs that fail the test when reached: used where the request must be
/// rejected before the service layer.
struct UnreachableClientService;

#[async_trait]
impl ClientService for UnreachableClientService {
    async fn register(&self, _data: CreateClient) -> AppResult<Client> {
        unreachable!("client service must not be invoked")
    }
    async fn get_by_id(&self, _id: i32) -> AppResult<Client> {
        unreachable!("client service must not be invoked")
    }
    async fn get_all(&self) -> AppResult<Vec<Client>> {
        unreachable!("client service must not be invoked")
    }
    async fn update(&self, _id: i32, _data: UpdateClient) -> AppResult<Client> {
        unreachable!("client service must not be invoked")
    }
    async fn delete(&self, _id: i32) -> AppResult<()> {
        unreachable!("client service must not be invoked")
    }
}

struct UnreachableServiceService;

#[async_trait]
impl ServiceService for UnreachableServiceService {
    async fn create(&self, _data: CreateService) -> AppResult<Service> {
        unreachable!("service service must not be invoked")
    }
    async fn get_by_id(&self, _id: i32) -> AppResult<Service> {
        unreachable!("service service must not be invoked")
    }
    async fn get_all(&self) -> AppResult<Vec<Service>> {
        unreachable!("service service must not be invoked")
    }
    async fn update(&self, _id: i32, _data: UpdateService) -> AppResult<Service> {
        unreachable!("service service must not be invoked")
    }
    async fn delete(&self, _id: i32) -> AppResult<()> {
        unreachable!("service service must not be invoked")
    }
}

struct UnreachableUserService;

#[async_trait]
impl UserService for UnreachableUserService {
    async fn register(&self, _data: CreateUser) -> AppResult<User> {
        unreachable!("user service must not be invoked")
    }
    async fn get_by_id(&self, _id: i32) -> AppResult<UserResponse> {
        unreachable!("user service must not be invoked")
    }
    async fn get_all(&self) -> AppResult<Vec<UserResponse>> {
        unreachable!("user service must not be invoked")
    }
    async fn update(&self, _id: i32, _data: UpdateUser) -> AppResult<UserResponse> {
        unreachable!("user service must not be invoked")
    }
    async fn delete(&self, _id: i32) -> AppResult<()> {
        unreachable!("user service must not be invoked")
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn stub_state() -> (AppState, Arc<RecordingContractService>) {
    let contracts = Arc::new(RecordingContractService::default());
    let state = AppState::new(
        Arc::new(StubClientService),
        Arc::new(StubServiceService),
        contracts.clone(),
        Arc::new(StubUserService),
        Arc::new(StubAuthService),
        Arc::new(Database::disconnected()),
    );
    (state, contracts)
}

/// State whose entity services all fail the test if reached
fn guarded_state() -> AppState {
    AppState::new(
        Arc::new(UnreachableClientService),
        Arc::new(UnreachableServiceService),
        Arc::new(RecordingContractService::default()),
        Arc::new(UnreachableUserService),
        Arc::new(StubAuthService),
        Arc::new(Database::disconnected()),
    )
}

fn request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// =============================================================================
// Authentication & middleware
// =============================================================================

#[tokio::test]
async fn protected_routes_without_a_token_are_rejected() {
    let app = create_router(guarded_state());

    let response = app
        .oneshot(request("GET", "/clients", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Token is missing");
}

#[tokio::test]
async fn protected_routes_with_a_bad_token_are_rejected() {
    let app = create_router(guarded_state());

    let response = app
        .oneshot(request("GET", "/clients", Some("garbage"), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid token");
}

#[tokio::test]
async fn register_and_login_are_public() {
    let (state, _) = stub_state();
    let app = create_router(state);

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/users/register",
            None,
            Some(serde_json::json!({
                "email": "new@example.com",
                "password": "secret123"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["email"], "new@example.com");
    // No password material in the registration response
    assert!(json.get("password").is_none());
    assert!(json.get("passwordHash").is_none());
    assert!(json.get("password_hash").is_none());

    let response = app
        .oneshot(request(
            "POST",
            "/users/login",
            None,
            Some(serde_json::json!({
                "email": "user@example.com",
                "password": "secret123"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["token"], "minted-token");
    assert_eq!(json["user"]["email"], "user@example.com");
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let (state, _) = stub_state();
    let app = create_router(state);

    let response = app
        .oneshot(request(
            "POST",
            "/users/login",
            None,
            Some(serde_json::json!({
                "email": "user@example.com",
                "password": "wrong"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Incorrect email or password");
}

// =============================================================================
// Validation (requests rejected before the service layer)
// =============================================================================

#[tokio::test]
async fn malformed_client_payload_fails_validation() {
    let app = create_router(guarded_state());

    let response = app
        .oneshot(request(
            "POST",
            "/clients",
            Some(VALID_TOKEN),
            Some(serde_json::json!({
                "nickname": "",
                "companyName": "X Ltda",
                "cnpj": "123"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Validation failed");
    assert!(json["details"].as_array().is_some_and(|d| !d.is_empty()));
}

#[tokio::test]
async fn one_character_service_code_fails_validation() {
    let app = create_router(guarded_state());

    let response = app
        .oneshot(request(
            "POST",
            "/services",
            Some(VALID_TOKEN),
            Some(serde_json::json!({ "name": "Payroll", "code": "P" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Validation failed");
}

#[tokio::test]
async fn five_character_password_fails_validation() {
    let app = create_router(guarded_state());

    let response = app
        .oneshot(request(
            "POST",
            "/users/register",
            None,
            Some(serde_json::json!({
                "email": "user@example.com",
                "password": "12345"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Validation failed");
}

#[tokio::test]
async fn empty_update_bodies_are_rejected_before_the_service() {
    let app = create_router(guarded_state());

    for uri in ["/clients/1", "/services/1", "/users/1"] {
        let response = app
            .clone()
            .oneshot(request(
                "PATCH",
                uri,
                Some(VALID_TOKEN),
                Some(serde_json::json!({})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {}", uri);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Validation failed");
    }
}

#[tokio::test]
async fn non_numeric_ids_surface_as_not_found() {
    let app = create_router(guarded_state());

    let response = app
        .oneshot(request("GET", "/clients/abc", Some(VALID_TOKEN), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// CRUD flows
// =============================================================================

#[tokio::test]
async fn client_registration_returns_the_created_entity() {
    let (state, _) = stub_state();
    let app = create_router(state);

    let response = app
        .oneshot(request(
            "POST",
            "/clients",
            Some(VALID_TOKEN),
            Some(serde_json::json!({
                "nickname": "Acme",
                "companyName": "Acme Ltda",
                "cnpj": "12345678901234"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["cnpj"], "12345678901234");
    assert_eq!(json["id"], 1);
}

#[tokio::test]
async fn duplicate_cnpj_on_creation_is_a_400() {
    let (state, _) = stub_state();
    let app = create_router(state);

    let response = app
        .oneshot(request(
            "POST",
            "/clients",
            Some(VALID_TOKEN),
            Some(serde_json::json!({
                "nickname": "Acme",
                "companyName": "Acme Ltda",
                "cnpj": "44444444444444"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Client with this CNPJ already exists.");
}

#[tokio::test]
async fn missing_client_lookup_is_a_404_with_entity_message() {
    let (state, _) = stub_state();
    let app = create_router(state);

    let response = app
        .oneshot(request("GET", "/clients/99", Some(VALID_TOKEN), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Client not found");
}

#[tokio::test]
async fn existing_client_lookup_returns_the_entity() {
    let (state, _) = stub_state();
    let app = create_router(state);

    let response = app
        .oneshot(request("GET", "/clients/1", Some(VALID_TOKEN), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["companyName"], "Acme Ltda");
}

#[tokio::test]
async fn client_update_confirms_with_a_message() {
    let (state, _) = stub_state();
    let app = create_router(state);

    let response = app
        .oneshot(request(
            "PATCH",
            "/clients/1",
            Some(VALID_TOKEN),
            Some(serde_json::json!({ "nickname": "New Nick" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Client updated successfully");
    assert_eq!(json["cnpj"], "12345678901234");
}

#[tokio::test]
async fn client_delete_is_a_204_with_empty_body() {
    let (state, _) = stub_state();
    let app = create_router(state);

    let response = app
        .oneshot(request("DELETE", "/clients/1", Some(VALID_TOKEN), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn contract_dates_reach_the_service_as_date_values() {
    let (state, contracts) = stub_state();
    let app = create_router(state);

    let response = app
        .oneshot(request(
            "POST",
            "/contracts",
            Some(VALID_TOKEN),
            Some(serde_json::json!({
                "contractCode": "CT-2024-001",
                "clientId": 1,
                "serviceId": 2,
                "quantity": 10,
                "unitPrice": 25.5,
                "startDate": "2023-01-01",
                "status": "ACTIVE"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let received = contracts.received.lock().unwrap().take().unwrap();
    assert_eq!(
        received.start_date,
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
    );
    assert_eq!(received.status, ContractStatus::Active);
}

#[tokio::test]
async fn contract_with_unknown_status_fails_validation() {
    let app = create_router(guarded_state());

    let response = app
        .oneshot(request(
            "POST",
            "/contracts",
            Some(VALID_TOKEN),
            Some(serde_json::json!({
                "contractCode": "CT-2024-001",
                "clientId": 1,
                "serviceId": 2,
                "quantity": 10,
                "unitPrice": 25.5,
                "startDate": "2023-01-01",
                "status": "CANCELLED"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Validation failed");
}

#[tokio::test]
async fn user_listing_never_exposes_password_material() {
    let (state, _) = stub_state();
    let app = create_router(state);

    let response = app
        .oneshot(request("GET", "/users", Some(VALID_TOKEN), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = body_bytes(response).await;
    let text = String::from_utf8(bytes).unwrap();
    assert!(!text.contains("password"));
    assert!(!text.contains("hash"));
}

#[tokio::test]
async fn contracts_by_client_are_listed() {
    let (state, _) = stub_state();
    let app = create_router(state);

    let response = app
        .oneshot(request("GET", "/clients/1/contracts", Some(VALID_TOKEN), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["contractCode"], "CT-2024-001");
}
