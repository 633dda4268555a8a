//! Page-level REST endpoints.
//!
//! Every call goes through the session's [`ApiClient`], so the bearer
//! credential is attached automatically and failures come back as
//! [`ApiError`](session::ApiError) values for the page to present.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;
use session::{ApiClient, ApiResult, Transport};

use super::types::{
    Ack, AdminUser, Appeal, AppealDecision, AppealPayload, Bundle, ClickLog, ClickStats, Paginated,
};
use crate::state::appeals::AppealAction;

const USER_APPEALS: &str = "/user/appeals";
const USER_STATS: &str = "/user/stats";
const USER_BUNDLES: &str = "/user/bundles";
const USER_BUNDLE_LOGS: &str = "/user/log-bundles";
const USER_LINK_LOGS: &str = "/user/log-links";
const ADMIN_USERS: &str = "/admin/users";
const ADMIN_APPEALS: &str = "/admin/appeals";

fn user_status_endpoint(user_id: &str, activate: bool) -> String {
    let action = if activate { "activate" } else { "deactivate" };
    format!("{ADMIN_USERS}/{user_id}/{action}")
}

fn appeal_decision_endpoint(appeal_id: &str, action: AppealAction) -> String {
    format!("{ADMIN_APPEALS}/{appeal_id}/{}", action.as_str())
}

fn bundles_page_endpoint(page: u32) -> String {
    format!("/admin/bundles?page={}", page.max(1))
}

fn user_bundles_endpoint(user_id: &str) -> String {
    format!("{ADMIN_USERS}/{user_id}/bundles")
}

fn bundle_endpoint(bundle_id: &str) -> String {
    format!("/admin/bundles/{bundle_id}")
}

#[derive(Deserialize)]
struct UsersEnvelope {
    #[serde(default)]
    users: Vec<AdminUser>,
}

#[derive(Deserialize)]
struct BundlesEnvelope {
    #[serde(default)]
    bundles: Vec<Bundle>,
}

// =============================================================================
// USER
// =============================================================================

/// `GET /user/appeals`: the signed-in user's appeal history.
///
/// # Errors
///
/// Any request or decode failure.
pub async fn user_appeals<T: Transport>(client: &ApiClient<T>) -> ApiResult<Vec<Appeal>> {
    client.get_data(USER_APPEALS).await
}

/// `POST /user/appeals`.
///
/// # Errors
///
/// Any request failure; validation messages arrive in the error.
pub async fn submit_appeal<T: Transport>(client: &ApiClient<T>, payload: &AppealPayload) -> ApiResult<()> {
    client
        .post::<_, serde_json::Value>(USER_APPEALS, payload)
        .await
        .map(|_| ())
}

/// # Errors
///
/// Any request or decode failure.
pub async fn user_stats<T: Transport>(client: &ApiClient<T>) -> ApiResult<ClickStats> {
    client.get_data(USER_STATS).await
}

/// # Errors
///
/// Any request or decode failure.
pub async fn user_bundles<T: Transport>(client: &ApiClient<T>) -> ApiResult<Vec<Bundle>> {
    client.get_data(USER_BUNDLES).await
}

/// # Errors
///
/// Any request or decode failure.
pub async fn bundle_click_logs<T: Transport>(client: &ApiClient<T>) -> ApiResult<Vec<ClickLog>> {
    client.get_data(USER_BUNDLE_LOGS).await
}

/// # Errors
///
/// Any request or decode failure.
pub async fn link_click_logs<T: Transport>(client: &ApiClient<T>) -> ApiResult<Vec<ClickLog>> {
    client.get_data(USER_LINK_LOGS).await
}

// =============================================================================
// ADMIN
// =============================================================================

/// `GET /admin/users` (`{ "users": [...] }`).
///
/// # Errors
///
/// Any request or decode failure.
pub async fn admin_users<T: Transport>(client: &ApiClient<T>) -> ApiResult<Vec<AdminUser>> {
    let envelope: UsersEnvelope = client.get(ADMIN_USERS).await?;
    Ok(envelope.users)
}

/// `POST /admin/users/{id}/activate` or `/deactivate`.
///
/// # Errors
///
/// Any request failure.
pub async fn set_user_active<T: Transport>(client: &ApiClient<T>, user_id: &str, activate: bool) -> ApiResult<()> {
    client
        .post_empty::<serde_json::Value>(&user_status_endpoint(user_id, activate))
        .await
        .map(|_| ())
}

/// # Errors
///
/// Any request or decode failure.
pub async fn admin_appeals<T: Transport>(client: &ApiClient<T>) -> ApiResult<Vec<Appeal>> {
    client.get_data(ADMIN_APPEALS).await
}

/// `POST /admin/appeals/{id}/approve|reject` with `{ admin_reply }`.
///
/// # Errors
///
/// Any request failure; the backend's message is kept for the alert.
pub async fn decide_appeal<T: Transport>(
    client: &ApiClient<T>,
    appeal_id: &str,
    action: AppealAction,
    reply: &str,
) -> ApiResult<()> {
    let body = AppealDecision { admin_reply: reply.to_owned() };
    client
        .post::<_, serde_json::Value>(&appeal_decision_endpoint(appeal_id, action), &body)
        .await
        .map(|_| ())
}

/// One page of all bundles.
///
/// # Errors
///
/// Any request or decode failure.
pub async fn admin_bundles<T: Transport>(client: &ApiClient<T>, page: u32) -> ApiResult<Paginated<Bundle>> {
    client.get_data(&bundles_page_endpoint(page)).await
}

/// Every bundle owned by one user (unpaginated).
///
/// # Errors
///
/// Any request or decode failure.
pub async fn admin_user_bundles<T: Transport>(client: &ApiClient<T>, user_id: &str) -> ApiResult<Vec<Bundle>> {
    let envelope: BundlesEnvelope = client.get(&user_bundles_endpoint(user_id)).await?;
    Ok(envelope.bundles)
}

/// `DELETE /admin/bundles/{id}`.
///
/// # Errors
///
/// Any request or decode failure.
pub async fn delete_bundle<T: Transport>(client: &ApiClient<T>, bundle_id: &str) -> ApiResult<Ack> {
    let ack: Option<Ack> = client.delete(&bundle_endpoint(bundle_id)).await?;
    Ok(ack.unwrap_or_default())
}
