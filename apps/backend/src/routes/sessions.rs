//! HTTP mirror of the websocket protocol.
//!
//! Responses carry the same `stateUpdate` envelope websocket clients
//! receive, so a client can mix transports freely. Accepted mutations
//! posted here still fan out to websocket watchers of the session.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::protocol::{InboundAction, OutboundEvent};
use crate::state::app_state::AppState;

/// `GET /api/sessions/{session_id}/state`
async fn get_state(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session_id = path.into_inner();
    let state = app_state.service().state(&session_id).await?;
    Ok(HttpResponse::Ok().json(OutboundEvent::state_update(state, session_id)))
}

/// `POST /api/sessions/{session_id}/actions`
async fn post_action(
    path: web::Path<String>,
    action: web::Json<InboundAction>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session_id = path.into_inner();
    let action = action.into_inner();
    let mutation = !matches!(action, InboundAction::RequestState);

    let state = app_state.service().handle(&session_id, action).await?;
    let event = OutboundEvent::state_update(state, session_id.clone());
    if mutation {
        app_state.registry().broadcast(&session_id, event.clone());
    }
    Ok(HttpResponse::Ok().json(event))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/sessions")
            .route("/{session_id}/state", web::get().to(get_state))
            .route("/{session_id}/actions", web::post().to(post_action)),
    );
}
