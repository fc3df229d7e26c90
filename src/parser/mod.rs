//! Parser layer for outdated listings
//! - traits.rs: OutdatedParser trait and OutdatedEntry
//! - yarn_outdated.rs: `yarn outdated` table parser
//! - npm_outdated.rs: `npm outdated --json --long` parser

pub mod npm_outdated;
pub mod traits;
pub mod yarn_outdated;

pub use npm_outdated::NpmOutdatedParser;
pub use traits::{ListingError, OutdatedEntry, OutdatedParser};
pub use yarn_outdated::YarnOutdatedParser;
