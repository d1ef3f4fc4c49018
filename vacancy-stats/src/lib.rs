pub mod headhunter;
pub mod pagination;
pub mod salary;
pub mod source;
pub mod statistics;
pub mod superjob;
pub mod table;
pub mod transport;
pub mod types;

pub use source::{Source, SourceDescriptor};
pub use statistics::{collect_statistics, LanguageStats, SourceReport};
pub use types::{Error, PageFetchFailed};
