use std::future::Future;

use tokio::net::TcpListener;

use crate::error::Error;
use crate::route::router;

pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<(), Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(Error::Serve)
}
