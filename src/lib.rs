//! Harvests quotes from a paginated HTML site and repository metadata from a JSON
//! search API, and merges both into a single JSON report.

mod infrastructure;
mod interface;
mod model;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;
