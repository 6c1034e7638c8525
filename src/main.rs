//! Pomodoro Timer - a work/break interval timer served over HTTP
//! 
//! This is the main entry point for the pomodoro-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use pomodoro_timer::{
    config::Config,
    state::AppState,
    api::create_router,
    services::CueConfig,
    tasks::{notification_task, tick_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomodoro_timer={},tower_http=info", config.log_level()))
        .init();

    let settings = config.settings()?;

    info!("Starting pomodoro-timer v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, work={}min, short break={}min, long break={}min, rounds={}",
          config.host, config.port, settings.work_minutes, settings.short_break_minutes,
          settings.long_break_minutes, settings.total_rounds);

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone(), settings, config.dev));

    // Start the tick source and the notification collaborator
    let tick_state = Arc::clone(&state);
    tokio::spawn(async move {
        tick_task(tick_state).await;
    });

    let cues = CueConfig::new(config.work_cue.clone(), config.break_cue.clone());
    let notify_state = Arc::clone(&state);
    tokio::spawn(async move {
        notification_task(notify_state, cues).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start      - Start or resume the timer");
    info!("  POST /pause      - Pause the timer");
    info!("  POST /reset      - Reset to the first work round");
    info!("  PUT  /running    - Set the run state");
    info!("  GET  /settings   - Current durations and rounds");
    info!("  PUT  /settings   - Change durations and rounds (resets the timer)");
    info!("  GET  /status     - Timer phase, remaining time and progress");
    info!("  GET  /health     - Health check");
    if config.dev {
        info!("  POST /skip       - Jump to the final second of the phase");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
