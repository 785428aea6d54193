use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinHandle;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackgroundTask: Send + Sync {
    async fn execute(&self);
}

pub fn spawn_background(task: Arc<dyn BackgroundTask>) -> JoinHandle<()> {
    tokio::spawn(async move { task.execute().await })
}
