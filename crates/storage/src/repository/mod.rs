pub mod admin;
pub mod category;
pub mod criterion;
pub mod jury;
pub mod mark;
pub mod participant;
