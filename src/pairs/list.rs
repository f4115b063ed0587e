//! Text pair list and its row operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when operating on the pair list.
#[derive(Error, Debug)]
pub enum PairsError {
    #[error("Row {index} does not exist (list has {len} rows)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Unknown field: {0}. Expected text1, language1, text2 or language2")]
    UnknownField(String),
}

/// One unit of synthesis input: two text snippets, each with a language code.
///
/// The language codes are taken on trust; nothing client-side checks them
/// against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPair {
    pub text1: String,
    pub text2: String,
    pub language1: String,
    pub language2: String,
}

/// An editable cell of a pair row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairField {
    Text1,
    Language1,
    Text2,
    Language2,
}

impl FromStr for PairField {
    type Err = PairsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text1" => Ok(PairField::Text1),
            "language1" | "lang1" => Ok(PairField::Language1),
            "text2" => Ok(PairField::Text2),
            "language2" | "lang2" => Ok(PairField::Language2),
            other => Err(PairsError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for PairField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PairField::Text1 => "text1",
            PairField::Language1 => "language1",
            PairField::Text2 => "text2",
            PairField::Language2 => "language2",
        };
        write!(f, "{name}")
    }
}

/// Ordered list of text pairs, addressed by row index.
///
/// List order is insertion order and determines synthesis order. Every
/// mutating operation returns a new list computed from the current one;
/// callers replace their copy wholesale, so an edit is always applied to
/// the latest rows rather than a stale binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairList {
    pairs: Vec<TextPair>,
}

impl PairList {
    /// Create an empty pair list.
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Create a pair list from existing rows.
    pub fn from_pairs(pairs: Vec<TextPair>) -> Self {
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TextPair> {
        self.pairs.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TextPair> {
        self.pairs.iter()
    }

    pub fn as_slice(&self) -> &[TextPair] {
        &self.pairs
    }

    fn check_index(&self, index: usize) -> Result<(), PairsError> {
        if index >= self.pairs.len() {
            return Err(PairsError::IndexOutOfBounds {
                index,
                len: self.pairs.len(),
            });
        }
        Ok(())
    }

    /// Return a list with exactly one cell replaced.
    ///
    /// All other rows and fields are carried over unchanged.
    pub fn edited(&self, index: usize, field: PairField, value: &str) -> Result<Self, PairsError> {
        self.check_index(index)?;

        let mut pairs = self.pairs.clone();
        let row = &mut pairs[index];
        match field {
            PairField::Text1 => row.text1 = value.to_string(),
            PairField::Language1 => row.language1 = value.to_string(),
            PairField::Text2 => row.text2 = value.to_string(),
            PairField::Language2 => row.language2 = value.to_string(),
        }

        Ok(Self { pairs })
    }

    /// Return a list with one row's sides exchanged: `(text1, language1)`
    /// swaps with `(text2, language2)`. Applying it twice restores the row.
    pub fn swapped(&self, index: usize) -> Result<Self, PairsError> {
        self.check_index(index)?;

        let mut pairs = self.pairs.clone();
        let row = &pairs[index];
        pairs[index] = TextPair {
            text1: row.text2.clone(),
            text2: row.text1.clone(),
            language1: row.language2.clone(),
            language2: row.language1.clone(),
        };

        Ok(Self { pairs })
    }

    /// Return a list with exactly one row deleted; later rows shift up.
    pub fn removed(&self, index: usize) -> Result<Self, PairsError> {
        self.check_index(index)?;

        let pairs = self
            .pairs
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, pair)| pair.clone())
            .collect();

        Ok(Self { pairs })
    }

    /// Return a list with the given rows appended after the existing ones.
    pub fn appended(&self, new_pairs: Vec<TextPair>) -> Self {
        let mut pairs = self.pairs.clone();
        pairs.extend(new_pairs);
        Self { pairs }
    }
}
