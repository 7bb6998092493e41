//! Count-parameterized value requests (`hash`, `uuid`, `slug`, `colors`, ...).

use std::num::IntErrorKind;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;
use crate::generators::Generator;
use crate::sampler::UniqueSampler;

/// Typed parameters of a counted request.
///
/// Encoded on the wire as the query string `count=N`, or nothing when the
/// count is omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl CountParams {
    pub const fn single() -> Self {
        Self { count: None }
    }

    pub const fn many(count: usize) -> Self {
        Self { count: Some(count) }
    }

    /// Parse the raw `count` text of a request.
    ///
    /// Missing or blank text means "single value"; negative integers clamp to
    /// zero; anything that is not an integer is rejected, and so are integers
    /// too large for `usize`.
    pub fn parse(raw: Option<&str>) -> Result<Self, GenerationError> {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Ok(Self::single());
        };
        match raw.parse::<usize>() {
            Ok(count) => Ok(Self::many(count)),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => Err(GenerationError::InvalidCount(format!(
                    "count out of range, got '{raw}' (max {})",
                    usize::MAX
                ))),
                _ if is_negative_integer(raw) => Ok(Self::many(0)),
                _ => Err(GenerationError::InvalidCount(format!(
                    "count must be an integer, got '{raw}'"
                ))),
            },
        }
    }

    pub fn to_query(&self) -> String {
        match self.count {
            Some(count) => format!("count={count}"),
            None => String::new(),
        }
    }
}

fn is_negative_integer(raw: &str) -> bool {
    raw.strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Result shape of a counted request: a bare value or an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Counted<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Counted<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Counted::One(value) => vec![value],
            Counted::Many(values) => values,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Counted::One(_) => 1,
            Counted::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Answer a counted request with values from `generator`.
///
/// Arrays hold pairwise-distinct values; a zero count yields an empty array.
pub fn generate_counted(
    generator: &dyn Generator,
    params: &CountParams,
    sampler: &UniqueSampler,
    rng: &mut dyn RngCore,
) -> Result<Counted<String>, GenerationError> {
    match params.count {
        None => Ok(Counted::One(generator.generate(rng)?)),
        Some(count) => {
            let values = sampler.try_sample(count, || generator.generate(rng))?;
            Ok(Counted::Many(values))
        }
    }
}
