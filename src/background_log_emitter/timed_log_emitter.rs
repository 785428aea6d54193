use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tokio::{
    sync::watch,
    time::{self, Instant, MissedTickBehavior},
};
use tracing::{info, warn};

use crate::{
    background_log_emitter::background_task::BackgroundTask, word_picker::word_picker::WordPicker,
};

const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

pub struct TimedLogEmitter {
    word_picker: Arc<dyn WordPicker>,
    startup_delay: Duration,
    interval: Duration,
    stop_signal: watch::Receiver<bool>,
}

impl TimedLogEmitter {
    pub fn new(
        word_picker: Arc<dyn WordPicker>,
        startup_delay: Duration,
        interval: Duration,
        stop_signal: watch::Receiver<bool>,
    ) -> Self {
        Self {
            word_picker,
            startup_delay,
            interval,
            stop_signal,
        }
    }

    fn emit(&self) {
        match self.word_picker.pick() {
            Ok(word) => info!("Log gerado: {}", word),
            Err(error) => warn!("Failed to pick a word: {}", error),
        }
    }
}

#[async_trait]
impl BackgroundTask for TimedLogEmitter {
    async fn execute(&self) {
        info!(
            "Starting timed log emitter with {:?} startup delay and {:?} interval",
            self.startup_delay, self.interval
        );

        let mut stop_signal = self.stop_signal.clone();
        if *stop_signal.borrow_and_update() {
            info!("Log emitter stopped before start");
            return;
        }

        let start = Instant::now().checked_add(self.startup_delay).unwrap_or_else(|| {
            warn!(
                "Startup delay {:?} is out of range, waiting until stopped",
                self.startup_delay
            );
            Instant::now() + FAR_FUTURE
        });

        // interval panics on a zero period
        let period = self.interval.max(Duration::from_millis(1));
        let mut ticks = time::interval_at(start, period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                changed = stop_signal.changed() => {
                    if changed.is_err() || *stop_signal.borrow_and_update() {
                        info!("Log emitter stopped");
                        return;
                    }
                }
                _ = ticks.tick() => self.emit(),
            }
        }
    }
}
