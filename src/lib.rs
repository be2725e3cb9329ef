pub mod analyzers;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod query;
pub mod reading;
pub mod source;
pub mod summary;

pub use summary::Summary;
