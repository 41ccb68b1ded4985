pub mod admin;
pub mod categories;
pub mod criteria;
pub mod jury;
pub mod marks;
pub mod participants;
pub mod scoring;
