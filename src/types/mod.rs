//! Public types for the claimcheck API.

mod claim;
mod classification;
mod lookup;
mod report;
mod search;

pub use claim::{ClaimReview, FactCheckClaim, FactCheckSummary};
pub use classification::{Classification, DEFAULT_FALSE_LABELS, Verdict};
pub use lookup::Lookup;
pub use report::{Evidence, Report, SkipReason};
pub use search::SearchItem;
