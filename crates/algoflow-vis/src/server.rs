//! Axum web server: topic API plus one WebSocket session per client.

use std::pin::pin;
use std::sync::Arc;

use algoflow_core::{LandingView, TopicDetails, TopicId, TopicRegistry};
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use futures::{future, SinkExt, StreamExt};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

use crate::config::VisConfig;
use crate::error::Result;
use crate::session::{drive, Session};

/// Shared application state.
pub struct AppState {
    registry: Arc<TopicRegistry>,
    log_capacity: usize,
}

/// Visualization server.
pub struct VisServer {
    state: Arc<AppState>,
    config: VisConfig,
}

impl VisServer {
    pub fn new(registry: Arc<TopicRegistry>, config: VisConfig) -> Self {
        Self {
            state: Arc::new(AppState {
                registry,
                log_capacity: config.log_capacity,
            }),
            config,
        }
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        let router = Router::new()
            .route("/api/topics", get(topics_handler))
            .route("/api/topics/{id}", get(topic_handler))
            .route("/ws", get(ws_handler));

        let router = match &self.config.static_dir {
            Some(dir) => router.fallback_service(ServeDir::new(dir)),
            None => router.route("/", get(index_handler)),
        };

        router
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Bind and serve until the process is stopped.
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(self.config.bind).await?;
        info!(
            addr = %self.config.bind,
            topics = self.state.registry.len(),
            "AlgoFlow running on http://{}",
            self.config.bind
        );
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

async fn topics_handler(State(state): State<Arc<AppState>>) -> Json<LandingView> {
    Json(state.registry.landing())
}

async fn topic_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> std::result::Result<Json<TopicDetails>, StatusCode> {
    state
        .registry
        .get(&TopicId::new(id))
        .map(|topic| Json(TopicDetails::from(topic.as_ref())))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

async fn handle_ws(socket: WebSocket, state: Arc<AppState>) {
    info!("client connected");
    let session = Session::new(state.registry.clone(), state.log_capacity);
    let (sender, receiver) = socket.split();

    let incoming = receiver
        .take_while(|msg| future::ready(matches!(msg, Ok(m) if !matches!(m, Message::Close(_)))))
        .filter_map(|msg| {
            future::ready(match msg {
                Ok(Message::Text(text)) => Some(text.as_str().to_owned()),
                _ => None,
            })
        });
    let outgoing =
        sender.with(|text: String| future::ready(Ok::<_, axum::Error>(Message::Text(text.into()))));

    if let Err(err) = drive(session, pin!(incoming), pin!(outgoing)).await {
        warn!(%err, "session ended with error");
    }
    info!("client disconnected");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> Arc<AppState> {
        Arc::new(AppState {
            registry: Arc::new(algoflow_topics::registry().unwrap()),
            log_capacity: 50,
        })
    }

    #[test]
    fn router_builds() {
        let registry = Arc::new(algoflow_topics::registry().unwrap());
        let _router = VisServer::new(registry.clone(), VisConfig::default()).router();

        let config = VisConfig {
            static_dir: Some("static".into()),
            ..VisConfig::default()
        };
        let _router = VisServer::new(registry, config).router();
    }

    #[test]
    fn topics_lists_both_categories() {
        let Json(landing) = tokio_test::block_on(topics_handler(State(state())));
        assert_eq!(landing.data_structures.len(), 7);
        assert_eq!(landing.algorithms.len(), 10);
    }

    #[test]
    fn topic_details_by_id() {
        let Json(details) =
            tokio_test::block_on(topic_handler(State(state()), Path("dijkstra".to_string()))).unwrap();
        assert_eq!(details.id.as_str(), "dijkstra");
        assert_eq!(details.steps.len(), 6);
    }

    #[test]
    fn unknown_topic_is_not_found() {
        let result = tokio_test::block_on(topic_handler(State(state()), Path("nope".to_string())));
        assert_eq!(result.err(), Some(StatusCode::NOT_FOUND));
    }
}
