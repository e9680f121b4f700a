use std::fmt::{Display, Formatter};

/// Total spend in whole New Taiwan dollars.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    derive_more::From,
)]
pub struct Spend(pub u32);

impl Display for Spend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
