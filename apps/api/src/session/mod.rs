// Form session: editing buffer, field addressing, section visibility, commit,
// plus the in-memory store and HTTP handlers that host sessions.

pub mod fields;
pub mod form;
pub mod handlers;
pub mod sections;
pub mod store;
