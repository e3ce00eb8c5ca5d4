mod client;
mod error;
mod query;

pub use client::{IndexClient, RawSearchResponse, parse_search_response};
pub use error::{Error, Result};
pub use query::{ComposedQuery, Projection, QueryClause};
