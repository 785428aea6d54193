#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("There are zero words to pick from")]
    EmptyVocabulary,
    #[error("Poisoned random generator")]
    PoisonedRng,
}
