pub mod m202601050001_create_users;
pub mod m202601050002_create_assignments;
pub mod m202601050003_create_submissions;
pub mod m202601050004_create_resources;
pub mod m202601050005_create_notices;
pub mod m202601050006_create_schedule_slots;
pub mod m202601050007_create_todos;
pub mod m202601050008_create_events;
pub mod m202601050009_create_messages;
pub mod m202601050010_create_auth_sessions;
