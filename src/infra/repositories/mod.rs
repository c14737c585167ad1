pub mod sqlite_manager_repo;
pub mod sqlite_participant_repo;
pub mod sqlite_private_event_repo;
pub mod sqlite_public_event_repo;
pub mod sqlite_report_repo;
pub mod sqlite_supervisor_repo;

pub mod postgres_manager_repo;
pub mod postgres_participant_repo;
pub mod postgres_private_event_repo;
pub mod postgres_public_event_repo;
pub mod postgres_report_repo;
pub mod postgres_supervisor_repo;
