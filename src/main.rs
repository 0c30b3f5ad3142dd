use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use signbridge::application::services::ConversionService;
use signbridge::infrastructure::llm::TextGeneratorFactory;
use signbridge::infrastructure::media::FfmpegConcatenator;
use signbridge::infrastructure::observability::{TracingConfig, init_tracing};
use signbridge::infrastructure::storage::LocalVideoLibrary;
use signbridge::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    let tracing_config = TracingConfig::from_settings(&settings.logging, environment);
    init_tracing(&tracing_config, settings.server.port)
        .context("Failed to initialize tracing")?;

    let video_library = Arc::new(
        LocalVideoLibrary::new(&settings.assets.video_dir)
            .context("Failed to open video asset directory")?,
    );
    tracing::info!(video_dir = %video_library.video_dir().display(), "Video library ready");

    let concatenator = Arc::new(FfmpegConcatenator::new(
        &settings.media.ffmpeg_path,
        settings.media.resolved_output_dir(),
    ));
    if !concatenator.is_available().await {
        tracing::warn!(
            ffmpeg = %settings.media.ffmpeg_path,
            "Media tool not available; sentence concatenation will fail"
        );
    }

    let text_generator = TextGeneratorFactory::create(&settings.generator)
        .context("Failed to create text generator")?;
    tracing::info!(
        provider = %settings.generator.provider,
        model = %settings.generator.model,
        "Text generator ready"
    );

    let conversion_service = Arc::new(ConversionService::new(
        text_generator,
        video_library,
        concatenator,
        settings.conversion.max_input_chars,
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState {
        conversion_service,
        settings,
    };

    let router = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
