use crate::word_picker::error::Error;

#[cfg_attr(test, mockall::automock)]
pub trait WordPicker: Send + Sync {
    fn pick(&self) -> Result<&'static str, Error>;
}
