pub mod http_board;
pub mod json_listing;
pub mod search_plan;

pub use http_board::HttpBoardCollector;
pub use json_listing::JsonListingParser;
pub use search_plan::{build_search_url, plan_searches};
