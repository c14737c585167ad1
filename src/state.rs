use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::{
    EmailService, ManagerRepository, ParticipantRepository, PrivateEventRepository,
    PublicEventRepository, ReportRepository, SupervisorRepository,
};
use crate::domain::services::auth_service::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub participant_repo: Arc<dyn ParticipantRepository>,
    pub private_event_repo: Arc<dyn PrivateEventRepository>,
    pub manager_repo: Arc<dyn ManagerRepository>,
    pub supervisor_repo: Arc<dyn SupervisorRepository>,
    pub public_event_repo: Arc<dyn PublicEventRepository>,
    pub report_repo: Arc<dyn ReportRepository>,
    pub auth_service: Arc<AuthService>,
    pub email_service: Arc<dyn EmailService>,
}
