//! Sample declaration file for `apigen-gen`.
//!
//! Generate its transport module with:
//!
//! ```bash
//! apigen-gen demos/user_api.rs demos/user_api_gen.rs
//! ```
//!
//! then wire the result in as a child module:
//!
//! ```rust,ignore
//! #[path = "user_api_gen.rs"]
//! mod user_api_gen;
//! ```
//!
//! The generated module adds `MyApi::serve_http` and `OtherApi::serve_http`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use apigen_macros::ApiValidator;
use serde::Serialize;

/// Client-visible error: its status and message go out as-is.
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

/// What business methods fail with. `Api` reaches the client verbatim,
/// `Internal` is masked behind the shared 500 response.
pub enum HandlerError {
    Api(ApiError),
    Internal(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: u64,
    pub login: String,
    pub full_name: String,
    pub status: String,
    pub age: i64,
}

#[derive(Debug, Serialize)]
pub struct NewUser {
    pub id: u64,
}

#[derive(Debug, Serialize)]
pub struct OtherUser {
    pub id: u64,
    pub login: String,
    pub full_name: String,
    pub class: String,
    pub level: i64,
}

#[derive(ApiValidator)]
pub struct ProfileParams {
    #[api_validator("required")]
    pub login: String,
}

#[derive(ApiValidator)]
pub struct CreateParams {
    #[api_validator("required,min=10")]
    pub login: String,
    #[api_validator("paramname=full_name")]
    pub name: String,
    #[api_validator("enum=user|moderator|admin,default=user")]
    pub status: String,
    #[api_validator("min=0,max=128")]
    pub age: i64,
}

#[derive(ApiValidator)]
pub struct OtherCreateParams {
    #[api_validator("required,min=3")]
    pub username: String,
    #[api_validator("paramname=account_name")]
    pub name: String,
    #[api_validator("default=warrior,enum=warrior|sorcerer|rouge")]
    pub class: String,
    #[api_validator("min=1,max=50")]
    pub level: i64,
}

#[derive(Default)]
pub struct MyApi {
    users: Mutex<HashMap<String, User>>,
}

impl MyApi {
    /// apigen:api {"url": "/user/profile"}
    pub fn profile(&self, params: ProfileParams) -> Result<User, HandlerError> {
        let users = self
            .users
            .lock()
            .map_err(|_| HandlerError::Internal("user table poisoned".to_string()))?;
        users.get(&params.login).cloned().ok_or_else(|| {
            HandlerError::Api(ApiError {
                status: 404,
                message: "user not exist".to_string(),
            })
        })
    }

    /// apigen:api {"url": "/user/create", "auth": true, "method": "POST"}
    pub fn create(&self, params: CreateParams) -> Result<NewUser, HandlerError> {
        let mut users = self
            .users
            .lock()
            .map_err(|_| HandlerError::Internal("user table poisoned".to_string()))?;
        if users.contains_key(&params.login) {
            return Err(HandlerError::Api(ApiError {
                status: 409,
                message: "user already exists".to_string(),
            }));
        }
        let id = users.len() as u64 + 1;
        users.insert(
            params.login.clone(),
            User {
                id,
                login: params.login,
                full_name: params.name,
                status: params.status,
                age: params.age,
            },
        );
        Ok(NewUser { id })
    }
}

#[derive(Default)]
pub struct OtherApi {
    counter: AtomicU64,
}

impl OtherApi {
    /// apigen:api {"url": "/user/create", "auth": true, "method": "POST"}
    pub fn create(&self, params: OtherCreateParams) -> Result<OtherUser, HandlerError> {
        let id = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        Ok(OtherUser {
            id,
            login: params.username.to_lowercase(),
            full_name: params.name,
            class: params.class,
            level: params.level,
        })
    }
}
