// Model exports
pub mod domain;
pub mod requests;

pub use domain::{
    Candidate, Conversation, FilterState, Match, MatchStatus, Message, PlanStatus, Proficiency,
    Session, SessionKind, SessionStatus, StudyPlan, SubjectInfo, TaughtSubject,
};
pub use requests::{
    NewMatch, NewMessage, NewSession, NewStudyPlan, SessionUpdate, StudyPlanUpdate,
};
