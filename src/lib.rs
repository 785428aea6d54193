pub mod background_log_emitter;
pub mod cli_arguments;
pub mod error;
pub mod request_id;
pub mod route;
pub mod server;
pub mod shutdown;
pub mod startup;
pub mod vocabulary;
pub mod word_picker;

#[cfg(test)]
pub(crate) mod captured_logs;
