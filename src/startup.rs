use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{error, info};

use crate::background_log_emitter::background_task::{BackgroundTask, spawn_background};
use crate::background_log_emitter::timed_log_emitter::TimedLogEmitter;
use crate::cli_arguments::CliArguments;
use crate::error::Error;
use crate::server::serve;
use crate::shutdown::shutdown_signal;
use crate::vocabulary::VOCABULARY;
use crate::word_picker::random_word_picker::RandomWordPicker;

pub fn log_emitter(args: &CliArguments, stop_signal: watch::Receiver<bool>) -> TimedLogEmitter {
    TimedLogEmitter::new(
        Arc::new(RandomWordPicker::new(&VOCABULARY, args.seed)),
        Duration::from_secs(args.startup_delay_secs),
        Duration::from_secs(args.interval_secs),
        stop_signal,
    )
}

pub async fn run(args: CliArguments) -> Result<(), Error> {
    let tcp_listener = TcpListener::bind(format!("0.0.0.0:{}", args.port))
        .await
        .map_err(|source| Error::Bind {
            port: args.port,
            source,
        })?;

    info!("Server started on port {}", args.port);

    let (stop_sender, stop_receiver) = watch::channel(false);
    let emitter = Arc::new(log_emitter(&args, stop_receiver));

    run_with(tcp_listener, emitter, stop_sender, shutdown_signal()).await
}

/// Serves until `shutdown` resolves, then stops the emitter through
/// `stop_sender` and joins it.
pub async fn run_with<F>(
    tcp_listener: TcpListener,
    emitter: Arc<dyn BackgroundTask>,
    stop_sender: watch::Sender<bool>,
    shutdown: F,
) -> Result<(), Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let emitter = spawn_background(emitter);

    let result = serve(tcp_listener, async move {
        shutdown.await;
        let _ = stop_sender.send(true);
    })
    .await;

    if let Err(err) = emitter.await {
        error!("Log emitter task failed: {err}");
    }

    info!("Server stopped");
    result
}
