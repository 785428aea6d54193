pub mod background_task;
pub mod timed_log_emitter;
