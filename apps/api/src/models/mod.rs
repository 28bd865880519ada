pub mod record;
pub mod sample;
pub mod snapshot;

pub use record::{
    BulletLine, CandidateRecord, Degree, Identified, ItemId, Job, Project, SkillCategory,
};
