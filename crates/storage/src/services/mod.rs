pub mod comparison;
pub mod completeness;
pub mod leaderboard;
pub mod mark_submission;

#[cfg(test)]
pub(crate) mod fixtures;
