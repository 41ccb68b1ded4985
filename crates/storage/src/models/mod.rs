mod category;
mod criterion;
mod jury_member;
mod jury_name;
mod mark;
mod participant;

pub use category::Category;
pub use criterion::Criterion;
pub use jury_member::JuryMember;
pub use jury_name::NormalizedJuryName;
pub use mark::Mark;
pub use participant::Participant;
