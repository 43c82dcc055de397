//! HTTP surface
//!
//! A single route, `POST /api/check-zone`, served by axum as a
//! `tokio-graceful-shutdown` subsystem.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio_graceful_shutdown::SubsystemHandle;
use zonecheck_core::engine::evaluate;

use crate::api::{CheckZoneRequest, CheckZoneResponse};
use crate::error::AppError;
use crate::store::ZoneStore;
use crate::Cli;

pub const CHECK_ZONE_PATH: &str = "/api/check-zone";

#[derive(Error, Debug)]
pub enum WebError {
    #[error("Unable to listen on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("Webserver failed: {0}")]
    Serve(#[source] io::Error),
}

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ZoneStore>,
}

pub struct Web {
    addr: SocketAddr,
    state: AppState,
}

impl Web {
    pub fn new(args: &Cli, store: Arc<dyn ZoneStore>) -> Self {
        Web {
            addr: args.socket_addr(),
            state: AppState { store },
        }
    }

    pub async fn run(self, subsys: SubsystemHandle) -> Result<(), WebError> {
        let listener = TcpListener::bind(self.addr)
            .await
            .map_err(|source| WebError::Bind {
                addr: self.addr,
                source,
            })?;

        log::info!("Starting HTTP web server on http://{}", self.addr);

        axum::serve(listener, router(self.state))
            .with_graceful_shutdown(async move {
                subsys.on_shutdown_requested().await;
                log::info!("Webserver shutting down");
            })
            .await
            .map_err(WebError::Serve)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(CHECK_ZONE_PATH, post(check_zone))
        .with_state(state)
}

async fn check_zone(
    State(state): State<AppState>,
    payload: Result<Json<CheckZoneRequest>, JsonRejection>,
) -> Result<Json<CheckZoneResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::MalformedPayload(e.body_text()))?;
    let (point, filter) = request.validate()?;

    let candidates = state.store.candidates(&filter).await?;
    log::debug!(
        "check ({}, {}) city={} state={}: {} candidates",
        point.latitude,
        point.longitude,
        filter.city,
        filter.state,
        candidates.len()
    );

    let verdict = evaluate(point, &candidates);
    log::debug!("({}, {}) {}", point.latitude, point.longitude, verdict);

    Ok(Json(verdict.into()))
}
