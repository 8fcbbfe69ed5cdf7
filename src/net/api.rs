//! REST API helpers for the catalog backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side
//! (SSR): stubs returning errors since these endpoints are only meaningful
//! in the browser.
//!
//! Every request except login carries `Authorization: Bearer <token>` read
//! from the session store at call time; the login endpoint must stay bare
//! so a stale token can never poison re-authentication.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs with user-presentable messages.
//! Login failures are classified by status; CRUD failures surface the
//! backend's `{message}` body when it provides one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Project, ProjectPayload};
#[cfg(feature = "hydrate")]
use crate::util::session::{BrowserSessionStore, SessionStore};

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_ENDPOINT: &str = "/api/auth/login";
#[cfg(any(test, feature = "hydrate"))]
const PROJECTS_ENDPOINT: &str = "/api/projects";

#[cfg(any(test, feature = "hydrate"))]
fn project_endpoint(id: &str) -> String {
    format!("/api/projects/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failure_message(status: u16) -> &'static str {
    match status {
        404 => "No account found for that email",
        401 => "Incorrect password",
        _ => "Login failed. Please try again.",
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

/// Extract the backend's `{"message": ...}` error body, if it sent one.
#[cfg(any(test, feature = "hydrate"))]
fn server_error_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.message)
}

/// Attach the stored bearer token, when one exists.
#[cfg(feature = "hydrate")]
fn with_auth(request: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match BrowserSessionStore.get().token {
        Some(token) => request.header("Authorization", &bearer_value(&token)),
        None => request,
    }
}

/// Authenticate via `POST /api/auth/login`, returning the session token.
///
/// # Errors
///
/// Returns a user-presentable message classified by failure cause. One
/// attempt per call; retry discipline belongs to the user.
pub async fn login(email: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failure_message(resp.status()).to_owned());
        }
        #[derive(serde::Deserialize)]
        struct LoginResponse {
            token: String,
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the full project list via `GET /api/projects`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_projects() -> Result<Vec<Project>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(PROJECTS_ENDPOINT))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("project list", resp.status()));
        }
        resp.json::<Vec<Project>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch one project via `GET /api/projects/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_project(id: &str) -> Result<Project, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(&project_endpoint(id)))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("project load", resp.status()));
        }
        resp.json::<Project>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Create a project via `POST /api/projects`.
///
/// # Errors
///
/// Returns the backend's message body when present, else a generic
/// status-bearing message.
pub async fn create_project(payload: &ProjectPayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::post(PROJECTS_ENDPOINT))
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = request_failed_message("create project", resp.status());
            let body = resp.text().await.unwrap_or_default();
            return Err(server_error_message(&body).unwrap_or(fallback));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}

/// Replace a project via `PUT /api/projects/{id}`.
///
/// # Errors
///
/// Returns the backend's message body when present, else a generic
/// status-bearing message.
pub async fn update_project(id: &str, payload: &ProjectPayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::put(&project_endpoint(id)))
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = request_failed_message("update project", resp.status());
            let body = resp.text().await.unwrap_or_default();
            return Err(server_error_message(&body).unwrap_or(fallback));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err("not available on server".to_owned())
    }
}

/// Delete a project via `DELETE /api/projects/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn delete_project(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::delete(&project_endpoint(id)))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("delete project", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}
