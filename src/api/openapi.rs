//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::api::handlers::auth_handler::LoginRequest;
use crate::domain::{
    Client, Contract, ContractStatus, CreateClient, CreateContract, CreateService, CreateUser,
    Service, UpdateClient, UpdateContract, UpdateService, UpdateUser, UserResponse, UserRole,
};
use crate::services::AuthResponse;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::auth_handler::register,
        crate::api::handlers::auth_handler::login,
        crate::api::handlers::user_handler::get_by_id,
        crate::api::handlers::user_handler::get_all,
        crate::api::handlers::user_handler::update,
        crate::api::handlers::user_handler::remove,
        crate::api::handlers::client_handler::register,
        crate::api::handlers::client_handler::get_by_id,
        crate::api::handlers::client_handler::get_all,
        crate::api::handlers::client_handler::update,
        crate::api::handlers::client_handler::remove,
        crate::api::handlers::client_handler::contracts_by_client,
        crate::api::handlers::service_handler::create,
        crate::api::handlers::service_handler::get_by_id,
        crate::api::handlers::service_handler::get_all,
        crate::api::handlers::service_handler::update,
        crate::api::handlers::service_handler::remove,
        crate::api::handlers::contract_handler::create,
        crate::api::handlers::contract_handler::get_by_id,
        crate::api::handlers::contract_handler::get_all,
        crate::api::handlers::contract_handler::update,
        crate::api::handlers::contract_handler::remove,
    ),
    components(
        schemas(
            Client,
            CreateClient,
            UpdateClient,
            Service,
            CreateService,
            UpdateService,
            Contract,
            ContractStatus,
            CreateContract,
            UpdateContract,
            CreateUser,
            UpdateUser,
            UserResponse,
            UserRole,
            LoginRequest,
            AuthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Users", description = "User management"),
        (name = "Clients", description = "Client management"),
        (name = "Services", description = "Service catalog management"),
        (name = "Contracts", description = "Contract management"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
