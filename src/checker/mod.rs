//! The claim checking pipeline and its builder.

mod builder;
mod pipeline;

pub use builder::ClaimCheckerBuilder;
pub use pipeline::ClaimChecker;

impl ClaimChecker {
    /// Create a new builder for configuring the checker.
    pub fn builder() -> ClaimCheckerBuilder {
        ClaimCheckerBuilder::new()
    }
}
