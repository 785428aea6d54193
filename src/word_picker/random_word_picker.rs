use std::sync::Mutex;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::word_picker::{error::Error, word_picker::WordPicker};

pub struct RandomWordPicker {
    vocabulary: &'static [&'static str],
    rng: Mutex<StdRng>,
}

impl RandomWordPicker {
    pub fn new(vocabulary: &'static [&'static str], seed: Option<u64>) -> RandomWordPicker {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            vocabulary,
            rng: Mutex::new(rng),
        }
    }
}

impl WordPicker for RandomWordPicker {
    fn pick(&self) -> Result<&'static str, Error> {
        if self.vocabulary.is_empty() {
            return Err(Error::EmptyVocabulary);
        }

        let mut rng = self.rng.lock().map_err(|_| Error::PoisonedRng)?;
        let random_index = rng.random_range(0..self.vocabulary.len());

        Ok(self.vocabulary[random_index])
    }
}
