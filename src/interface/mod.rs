mod extractor;
mod fetcher;
mod harvester;
mod persister;

pub use extractor::*;
pub use fetcher::*;
pub use harvester::*;
pub use persister::*;
