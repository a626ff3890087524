use std::sync::Arc;
use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::protocol::{InboundAction, OutboundEvent};
use crate::state::app_state::AppState;
use crate::ws::hub::OutboundMessage;

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

/// `GET /ws/sessions/{session_id}` - upgrade to a realtime connection.
pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let session_id = path.into_inner();
    let session = WsSession::new(session_id, app_state);
    ws::start(session, &req, stream)
}

pub struct WsSession {
    conn_id: Uuid,
    session_id: String,
    app_state: web::Data<AppState>,
    /// Registry token handed out on start, surrendered on stop.
    registry_token: Option<Uuid>,
    last_heartbeat: Instant,
}

impl WsSession {
    fn new(session_id: String, app_state: web::Data<AppState>) -> Self {
        Self {
            conn_id: Uuid::new_v4(),
            session_id,
            app_state,
            registry_token: None,
            last_heartbeat: Instant::now(),
        }
    }

    fn send_json(ctx: &mut ws::WebsocketContext<Self>, event: &OutboundEvent) {
        match serde_json::to_string(event) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(error = %err, "[WS SESSION] failed to serialize outbound event"),
        }
    }

    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!(
                    conn_id = %actor.conn_id,
                    session_id = %actor.session_id,
                    "[WS SESSION] heartbeat timed out"
                );
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
    }

    /// Runs one action through the service. Accepted mutations broadcast
    /// the fresh state to every watcher; reads and rejections go only to
    /// this connection.
    fn dispatch(&self, action: InboundAction, ctx: &mut ws::WebsocketContext<Self>) {
        let broadcast = !matches!(action, InboundAction::RequestState);
        let service = self.app_state.service();
        let registry = self.app_state.registry();
        let session_id = self.session_id.clone();

        ctx.spawn(
            async move {
                let result = service.handle(&session_id, action).await;
                (session_id, result)
            }
            .into_actor(self)
            .map(move |(session_id, result), _actor, ctx| match result {
                Ok(state) => {
                    let event = OutboundEvent::state_update(state, session_id.clone());
                    if broadcast {
                        registry.broadcast(&session_id, event);
                    } else {
                        Self::send_json(ctx, &event);
                    }
                }
                Err(err) => {
                    Self::send_json(ctx, &err.to_event());
                }
            }),
        );
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(
            conn_id = %self.conn_id,
            session_id = %self.session_id,
            "[WS SESSION] started"
        );
        let recipient = ctx.address().recipient::<OutboundMessage>();
        let token = self.app_state.registry().register(&self.session_id, recipient);
        self.registry_token = Some(token);
        self.start_heartbeat(ctx);

        // Connecting clients render from the first stateUpdate.
        self.dispatch(InboundAction::RequestState, ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(token) = self.registry_token.take() {
            self.app_state.registry().unregister(&self.session_id, token);
        }
        info!(
            conn_id = %self.conn_id,
            session_id = %self.session_id,
            "[WS SESSION] stopped"
        );
    }
}

impl Handler<OutboundMessage> for WsSession {
    type Result = ();

    fn handle(&mut self, msg: OutboundMessage, ctx: &mut Self::Context) {
        Self::send_json(ctx, &msg.0);
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.last_heartbeat = Instant::now();
                match serde_json::from_str::<InboundAction>(&text) {
                    Ok(action) => self.dispatch(action, ctx),
                    Err(err) => {
                        // Malformed frames are answered, not fatal; the
                        // connection stays useful for the next action.
                        let rejection =
                            AppError::bad_request(format!("malformed action: {err}"));
                        Self::send_json(ctx, &rejection.to_event());
                    }
                }
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(_) => {}
            Err(err) => {
                warn!(
                    conn_id = %self.conn_id,
                    session_id = %self.session_id,
                    error = %err,
                    "[WS SESSION] protocol error"
                );
                ctx.stop();
            }
        }
    }
}
