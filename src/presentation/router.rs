use axum::Router;
use axum::http::HeaderValue;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{VideoConcatenator, VideoLibrary};
use crate::domain::PUBLIC_VIDEO_PREFIX;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    available_words_handler, convert_handler, health_handler, sentence_handler,
    video_file_handler, video_path_handler, words_lookup_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<L, C>(state: AppState<L, C>) -> Router
where
    L: VideoLibrary + 'static,
    C: VideoConcatenator + 'static,
{
    let cors = cors_layer(&state.settings.server.cors_origins);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let assets = ServeDir::new(&state.settings.assets.video_dir);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/convert", post(convert_handler::<L, C>))
        .route("/api/v1/sentence", post(sentence_handler::<L, C>))
        .route("/api/v1/videos/{word}", get(video_path_handler::<L, C>))
        .route("/api/v1/videos/{word}/file", get(video_file_handler::<L, C>))
        .route("/api/v1/words", get(available_words_handler::<L, C>))
        .route("/api/v1/words/lookup", post(words_lookup_handler::<L, C>))
        .nest_service(&format!("/{}", PUBLIC_VIDEO_PREFIX), assets)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}
