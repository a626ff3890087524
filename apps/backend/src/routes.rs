use actix_web::web;

pub mod sessions;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(crate::health::configure)
        .configure(sessions::configure)
        .route("/ws/sessions/{session_id}", web::get().to(crate::ws::upgrade));
}
