use crate::{
    config::Config,
    constant::{ACTIONS_JSON_PATH, LIVENESS_PATH},
    error::DonateError,
    server::{
        cors::{action_headers, with_action_headers},
        handler::{get_actions_json, get_donate, liveness, post_donate, DonateAction},
    },
};
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use std::{io, net::SocketAddr, time::Duration};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    join_handle: JoinHandle<io::Result<()>>,
}

impl ServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Signals graceful shutdown; in-flight requests are allowed to finish.
    pub fn stop(&mut self) -> Result<(), anyhow::Error> {
        self.shutdown_tx
            .take()
            .ok_or_else(|| anyhow::anyhow!("Server already stopped"))?
            .send(())
            .map_err(|_| anyhow::anyhow!("Server task is no longer running"))
    }

    pub async fn stopped(self) -> Result<(), anyhow::Error> {
        self.join_handle.await??;
        Ok(())
    }
}

/// Routes plus the middleware stack. Layers added later wrap the earlier
/// ones, so the action headers are outermost and also cover timeouts,
/// body-limit rejections and 404s.
#[allow(deprecated)]
pub fn build_router(action: DonateAction) -> Result<Router, DonateError> {
    check_server_config(action.config())?;
    let server_config = action.config().server.clone();

    let router = Router::new()
        .route(
            &server_config.action_path,
            get(get_donate).post(post_donate).options(get_donate),
        )
        .route(ACTIONS_JSON_PATH, get(get_actions_json))
        .route(LIVENESS_PATH, get(liveness))
        .with_state(action)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(server_config.max_request_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(server_config.request_timeout_secs)))
        .layer(TraceLayer::new_for_http());

    with_action_headers(router, &server_config.blockchain_id)
}

pub async fn run_server(
    action: DonateAction,
    addr: SocketAddr,
) -> Result<ServerHandle, anyhow::Error> {
    let router = build_router(action)?;

    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    log::info!("Donation action server listening on {local_addr}");

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let join_handle = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
                log::info!("Shutting down donation action server");
            })
            .await
    });

    Ok(ServerHandle { local_addr, shutdown_tx: Some(shutdown_tx), join_handle })
}

/// Validates the config pieces the router depends on before binding anything.
pub fn check_server_config(config: &Config) -> Result<(), DonateError> {
    if !config.server.action_path.starts_with('/') {
        return Err(DonateError::ConfigError(format!(
            "action_path must start with '/': {}",
            config.server.action_path
        )));
    }
    action_headers(&config.server.blockchain_id)?;
    Ok(())
}
