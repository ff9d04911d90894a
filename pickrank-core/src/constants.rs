/// Smallest pool that yields at least one comparison.
pub const MIN_POOL_SIZE: usize = 2;

/// Heading printed above a finished ranking.
pub const RANKED_LIST_HEADING: &str = "Your Ranked List:";
