use std::collections::HashSet;
use std::hash::Hash;

use crate::errors::GenerationError;
use crate::model::DEFAULT_RETRY_MULTIPLIER;

/// Draws pairwise-distinct values from a generator, retrying on collision.
///
/// Every accepted value earns `retry_multiplier` attempts, so a request never
/// takes more than `retry_multiplier * n` attempts and a stalled domain gives up
/// after `retry_multiplier * (collected + 1)`. Running out of attempts is
/// reported as [`GenerationError::ExhaustedDomain`] instead of returning a
/// short result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniqueSampler {
    retry_multiplier: usize,
}

impl Default for UniqueSampler {
    fn default() -> Self {
        Self::new(DEFAULT_RETRY_MULTIPLIER)
    }
}

impl UniqueSampler {
    pub fn new(retry_multiplier: usize) -> Self {
        Self {
            retry_multiplier: retry_multiplier.max(1),
        }
    }

    /// `n` distinct values from `generate`, in the order they were produced.
    pub fn sample<T, F>(&self, n: usize, generate: F) -> Result<Vec<T>, GenerationError>
    where
        T: Eq + Hash + Clone,
        F: FnMut() -> T,
    {
        let mut seen = HashSet::new();
        self.sample_into(n, &mut seen, generate)
    }

    /// Like [`sample`](Self::sample) for generators taking a formatting option.
    pub fn sample_with<T, O, F>(
        &self,
        n: usize,
        options: &O,
        mut generate: F,
    ) -> Result<Vec<T>, GenerationError>
    where
        T: Eq + Hash + Clone,
        O: ?Sized,
        F: FnMut(&O) -> T,
    {
        self.sample(n, || generate(options))
    }

    /// Sample against a caller-owned set so uniqueness spans several calls.
    ///
    /// Accepted values are inserted into `seen`.
    pub fn sample_into<T, F>(
        &self,
        n: usize,
        seen: &mut HashSet<T>,
        mut generate: F,
    ) -> Result<Vec<T>, GenerationError>
    where
        T: Eq + Hash + Clone,
        F: FnMut() -> T,
    {
        self.try_sample_into(n, seen, || Ok::<T, GenerationError>(generate()))
    }

    /// [`sample`](Self::sample) for fallible generators; the first error aborts.
    pub fn try_sample<T, E, F>(&self, n: usize, generate: F) -> Result<Vec<T>, E>
    where
        T: Eq + Hash + Clone,
        E: From<GenerationError>,
        F: FnMut() -> Result<T, E>,
    {
        let mut seen = HashSet::new();
        self.try_sample_into(n, &mut seen, generate)
    }

    pub fn try_sample_into<T, E, F>(
        &self,
        n: usize,
        seen: &mut HashSet<T>,
        mut generate: F,
    ) -> Result<Vec<T>, E>
    where
        T: Eq + Hash + Clone,
        E: From<GenerationError>,
        F: FnMut() -> Result<T, E>,
    {
        // `n` comes straight from callers; grow as values arrive instead of reserving it.
        let mut values = Vec::new();
        let mut attempts = 0_usize;

        while values.len() < n {
            let budget = n
                .min(values.len() + 1)
                .saturating_mul(self.retry_multiplier);
            if attempts >= budget {
                return Err(GenerationError::ExhaustedDomain {
                    requested: n,
                    collected: values.len(),
                    attempts,
                }
                .into());
            }
            attempts += 1;

            let value = generate()?;
            if seen.insert(value.clone()) {
                values.push(value);
            }
        }

        Ok(values)
    }
}
