/**
 * Current Principal Handlers
 *
 * `GET /users/me` and `GET /users/me/items`. Both sit behind the session
 * gate, so the principal is already resolved and active by the time these
 * run.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::{OwnedItem, PrincipalResponse};
use crate::backend::middleware::AuthUser;

/// Get current principal handler
///
/// # Example Response
///
/// ```json
/// {
///   "username": "childe",
///   "email": "ajax@gmail.com",
///   "full_name": "Ajax Tartaglia",
///   "disabled": false
/// }
/// ```
pub async fn get_me(AuthUser(principal): AuthUser) -> Json<PrincipalResponse> {
    Json(PrincipalResponse::from(principal))
}

/// Items owned by the current principal
pub async fn get_my_items(AuthUser(principal): AuthUser) -> Json<Vec<OwnedItem>> {
    Json(vec![OwnedItem {
        item_id: 1,
        owner: principal.username,
    }])
}
