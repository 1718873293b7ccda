//! Where article links come from.
//!
//! | Source | Module | Failure behavior |
//! |--------|--------|------------------|
//! | RSS 2.0 / RSS 1.0 / Atom feed | [`feed`] | Reported as [`FeedOutcome::FetchFailed`](crate::models::FeedOutcome) |
//! | CSV file with a URL column | [`csv_file`] | Missing file or column is an error |
//!
//! Both yield [`FeedEntry`](crate::models::FeedEntry) values in source order,
//! duplicates included.

pub mod csv_file;
pub mod feed;
