//! Frame invariants as named, independently checkable properties.
//!
//! Each invariant lives in its own module. [`FrameInvariants`] bundles them
//! so that the roll post-check and frame deserialization run the same set.

/// A property that must hold for every reachable state `S`.
pub trait Invariant<S> {
    /// Returns true when `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Short statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// A failed invariant check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// What was violated.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a violation with the given description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}

/// Invariants checked together, reporting every failure rather than the first.
pub trait InvariantSet<S> {
    /// Runs every check in the set.
    ///
    /// # Errors
    ///
    /// Returns one violation per failed invariant, in declaration order.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B, C> InvariantSet<S> for (A, B, C)
where
    A: Invariant<S>,
    B: Invariant<S>,
    C: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks = [
            (A::holds(state), A::description()),
            (B::holds(state), B::description()),
            (C::holds(state), C::description()),
        ];
        let violations: Vec<_> = checks
            .into_iter()
            .filter(|(holds, _)| !holds)
            .map(|(_, description)| InvariantViolation::new(description))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod frame_total;
pub mod pin_range;
pub mod roll_count;

pub use frame_total::FrameTotalInvariant;
pub use pin_range::PinRangeInvariant;
pub use roll_count::RollCountInvariant;

/// All frame invariants as a composable set.
pub type FrameInvariants = (RollCountInvariant, PinRangeInvariant, FrameTotalInvariant);
