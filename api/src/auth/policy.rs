//! The single role table for every entity kind and operation.
//!
//! Route groups attach a [`PolicyRule`] at construction time;
//! [`guards::enforce_policy`](super::guards::enforce_policy) looks the rule
//! up here. Role decisions live in exactly one `match` instead of being
//! re-derived inside each handler.

/// The nine stored entity kinds as seen by the authorization gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Assignment,
    Submission,
    Resource,
    Notice,
    ScheduleSlot,
    Todo,
    Event,
    Message,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    List,
    Read,
    Create,
    Update,
    Delete,
}

/// What a caller must be for an operation to proceed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Any resolved session.
    Authenticated,
    /// Student role required (e.g. handing in a submission).
    Student,
    /// Admin role required.
    Admin,
    /// Any resolved session, plus an ownership check the handler performs
    /// against the loaded record. The middleware treats this like
    /// [`Access::Authenticated`].
    Owner,
}

/// The per-route rule attached as a request extension.
#[derive(Clone, Copy, Debug)]
pub struct PolicyRule {
    pub kind: EntityKind,
    pub action: Action,
}

impl PolicyRule {
    pub fn new(kind: EntityKind, action: Action) -> Self {
        Self { kind, action }
    }
}

/// Maps `(entity kind, action)` to the required access level.
///
/// Shared reference data is readable by anyone authenticated and mutable
/// only by admins; personally-owned data is owner-scoped; roster management
/// is admin-only; submissions are created by students.
pub fn access_for(kind: EntityKind, action: Action) -> Access {
    use Access::*;
    use Action::*;
    use EntityKind::*;

    match (kind, action) {
        (User, _) => Admin,

        (Assignment | Resource | Notice | ScheduleSlot | Event, List | Read) => Authenticated,
        (Assignment | Resource | Notice | ScheduleSlot | Event, _) => Admin,

        (Submission, Create) => Student,
        (Submission, _) => Authenticated,

        (Todo | Message, List | Read | Create) => Authenticated,
        (Todo | Message, Update | Delete) => Owner,
    }
}
