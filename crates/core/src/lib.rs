//! Domain layer for the movie catalogue.
//!
//! Holds the movie/catalogue types, rating validation, director pattern
//! handling, the [`store::MovieStore`] port and the [`service::CatalogueService`]
//! that enforces the catalogue's business rules on top of it.

pub mod config;
pub mod director;
pub mod error;
pub mod movie;
pub mod rating;
pub mod service;
pub mod store;
