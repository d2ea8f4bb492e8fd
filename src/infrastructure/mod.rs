mod extractor_quotes_html;
mod extractor_repositories_github;
mod fetcher_reqwest;
mod fetcher_retrier;
mod harvester_sequential;
mod persister_json_file;

pub use extractor_quotes_html::*;
pub use extractor_repositories_github::*;
pub use fetcher_reqwest::*;
pub use fetcher_retrier::*;
pub use harvester_sequential::*;
pub use persister_json_file::*;
