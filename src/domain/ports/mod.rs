use crate::domain::models::{
    manager::Manager,
    participant::Participant,
    private_event::{Invitation, InviteStatus, PrivateEvent},
    public_event::PublicEvent,
    report::Report,
    supervisor::Supervisor,
};
use crate::error::ApiError;
use async_trait::async_trait;

#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    async fn create(&self, participant: &Participant) -> Result<Participant, ApiError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Participant>, ApiError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<Participant>, ApiError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Participant>, ApiError>;
}

/// The private-event store owns the invitee list, so invitation operations
/// live here next to the event CRUD.
#[async_trait]
pub trait PrivateEventRepository: Send + Sync {
    async fn create(&self, event: &PrivateEvent) -> Result<PrivateEvent, ApiError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<PrivateEvent>, ApiError>;
    async fn list_created_by(&self, participant_id: &str) -> Result<Vec<PrivateEvent>, ApiError>;
    async fn list_invited(&self, participant_id: &str) -> Result<Vec<PrivateEvent>, ApiError>;
    async fn update(&self, event: &PrivateEvent) -> Result<PrivateEvent, ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;

    /// Appends Pending entries for the given participants in one transaction,
    /// skipping pairs that already exist. Returns the ids actually added.
    async fn add_invitees(&self, event_id: &str, participant_ids: &[String]) -> Result<Vec<String>, ApiError>;
    async fn find_invitation(&self, event_id: &str, participant_id: &str) -> Result<Option<Invitation>, ApiError>;
    async fn list_invitations(&self, event_id: &str) -> Result<Vec<Invitation>, ApiError>;
    /// Transitions a Pending entry to the given status. Returns false when no
    /// Pending entry matched (absent or already terminal).
    async fn set_invitation_status(&self, event_id: &str, participant_id: &str, status: InviteStatus) -> Result<bool, ApiError>;
}

#[async_trait]
pub trait ManagerRepository: Send + Sync {
    async fn create(&self, manager: &Manager) -> Result<Manager, ApiError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Manager>, ApiError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Manager>, ApiError>;
    async fn list_pending(&self) -> Result<Vec<Manager>, ApiError>;
    async fn update(&self, manager: &Manager) -> Result<Manager, ApiError>;
}

#[async_trait]
pub trait SupervisorRepository: Send + Sync {
    async fn create(&self, supervisor: &Supervisor) -> Result<Supervisor, ApiError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Supervisor>, ApiError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Supervisor>, ApiError>;
}

#[async_trait]
pub trait PublicEventRepository: Send + Sync {
    async fn create(&self, event: &PublicEvent) -> Result<PublicEvent, ApiError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<PublicEvent>, ApiError>;
    async fn list(&self) -> Result<Vec<PublicEvent>, ApiError>;
    async fn update(&self, event: &PublicEvent) -> Result<PublicEvent, ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn create(&self, report: &Report) -> Result<Report, ApiError>;
    async fn list(&self) -> Result<Vec<Report>, ApiError>;
}

#[async_trait]
pub trait EmailService: Send + Sync {
    async fn send(&self, recipient: &str, subject: &str, html_body: &str) -> Result<(), ApiError>;
}
