//! Query parameters for `GET /api/v1/movies`.

use serde::Deserialize;

use crate::error::AppError;

/// Raw `?title=&director=&rating=` parameters.
///
/// Empty strings count as absent. `rating` is kept as a string so an
/// unparsable value can be reported as a 400 with a useful message.
#[derive(Debug, Default, Deserialize)]
pub struct MovieQueryParams {
    pub title: Option<String>,
    pub director: Option<String>,
    pub rating: Option<String>,
}

/// Which catalogue lookup a request resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum MovieFilter {
    All,
    Title(String),
    Director(String),
    MinRating(f32),
    DirectorAndMinRating(String, f32),
}

impl MovieQueryParams {
    /// Resolve the parameters into a single lookup.
    ///
    /// A title wins over everything else since it identifies at most one
    /// movie; director and rating combine.
    pub fn into_filter(self) -> Result<MovieFilter, AppError> {
        let title = non_empty(self.title);
        let director = non_empty(self.director);
        let rating = non_empty(self.rating)
            .map(|raw| {
                raw.trim()
                    .parse::<f32>()
                    .map_err(|_| AppError::BadRequest(format!("Invalid rating '{raw}'")))
            })
            .transpose()?;

        Ok(match (title, director, rating) {
            (Some(title), _, _) => MovieFilter::Title(title),
            (None, Some(director), Some(rating)) => {
                MovieFilter::DirectorAndMinRating(director, rating)
            }
            (None, Some(director), None) => MovieFilter::Director(director),
            (None, None, Some(rating)) => MovieFilter::MinRating(rating),
            (None, None, None) => MovieFilter::All,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
