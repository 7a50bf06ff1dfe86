//! Movie row model.

use moviecat_core::movie::Movie;
use sqlx::FromRow;

use crate::rating_codec;

/// A row from the `movies` table, rating still sentinel-encoded.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub title: String,
    pub director: Option<String>,
    pub rating: f32,
}

impl MovieRow {
    /// Decode into a catalogue entry.
    pub fn into_entry(self) -> (String, Movie) {
        let movie = Movie::new(self.director, rating_codec::decode(self.rating));
        (self.title, movie)
    }
}
