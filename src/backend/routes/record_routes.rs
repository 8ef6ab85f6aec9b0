/**
 * Record Routes
 *
 * ## Services
 * - `GET /services/`, `POST /services/`
 * - `GET /services/{service_id}`, `PUT /services/{service_id}`,
 *   `DELETE /services/{service_id}`
 *
 * ## Confirmations
 * - `GET /confirmations/`, `POST /confirmations/`
 * - `GET /confirmations/{confirmation_id}`
 *
 * ## Reports
 * - `GET /reports/`, `POST /reports/`
 * - `GET /reports/{report_id}`
 *
 * All of these expect the auth middleware to be layered on by the caller.
 */

use axum::{routing::get, Router};

use crate::backend::records::handlers::{
    create_record, delete_record, get_record, list_records, update_record,
};
use crate::backend::server::state::AppState;
use crate::shared::{Confirmation, Report, Service};

/// Configure the service, confirmation, and report routes
pub fn configure_record_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/services/",
            get(list_records::<Service>).post(create_record::<Service>),
        )
        .route(
            "/services/{service_id}",
            get(get_record::<Service>)
                .put(update_record::<Service>)
                .delete(delete_record::<Service>),
        )
        .route(
            "/confirmations/",
            get(list_records::<Confirmation>).post(create_record::<Confirmation>),
        )
        .route(
            "/confirmations/{confirmation_id}",
            get(get_record::<Confirmation>),
        )
        .route(
            "/reports/",
            get(list_records::<Report>).post(create_record::<Report>),
        )
        .route("/reports/{report_id}", get(get_record::<Report>))
}
