//! Movie and catalogue types plus the input payloads the service accepts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::rating::Rating;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A stored movie. The title is the key it is filed under in a [`Catalogue`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Movie {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Movie {
    pub fn new(director: Option<String>, rating: Option<Rating>) -> Self {
        Self { director, rating }
    }
}

/// Result shape of every catalogue query: title -> movie.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalogue {
    pub movies: BTreeMap<String, Movie>,
}

impl Catalogue {
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, title: &str) -> Option<&Movie> {
        self.movies.get(title)
    }
}

impl From<BTreeMap<String, Movie>> for Catalogue {
    fn from(movies: BTreeMap<String, Movie>) -> Self {
        Self { movies }
    }
}

impl FromIterator<(String, Movie)> for Catalogue {
    fn from_iter<I: IntoIterator<Item = (String, Movie)>>(iter: I) -> Self {
        Self {
            movies: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Payload for adding a movie. Only the title is required; a missing or
/// `null` title is rejected by the service, not by deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewMovie {
    pub title: Option<String>,
    pub director: Option<String>,
    pub rating: Option<f32>,
}

/// Partial edit of an existing movie. Every field is optional; `title`
/// renames the movie.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieEdit {
    pub title: Option<String>,
    pub director: Option<String>,
    pub rating: Option<f32>,
}

/// Assign one director to a list of existing movies.
///
/// Both fields are optional on the wire so that an absent or `null` value
/// reaches the service and is reported as a validation error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectorAssignment {
    pub name: Option<String>,
    pub movies: Option<Vec<String>>,
}
