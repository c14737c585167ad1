use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::models::{
    manager::Manager,
    participant::Participant,
    private_event::{InviteStatus, PrivateEvent},
    public_event::PublicEvent,
    report::Report,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressView {
    pub country: String,
    pub city: String,
    pub street: String,
    pub number: String,
    pub postal_code: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantProfile {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub username: String,
    pub email: String,
    pub email_verified: bool,
    pub birth_date: Option<NaiveDate>,
}

impl From<&Participant> for ParticipantProfile {
    fn from(p: &Participant) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            surname: p.surname.clone(),
            username: p.username.clone(),
            email: p.email.clone(),
            email_verified: p.email_verified,
            birth_date: p.birth_date,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantSummary {
    pub id: String,
    pub username: String,
    pub name: String,
    pub surname: String,
}

impl From<&Participant> for ParticipantSummary {
    fn from(p: &Participant) -> Self {
        Self {
            id: p.id.clone(),
            username: p.username.clone(),
            name: p.name.clone(),
            surname: p.surname.clone(),
        }
    }
}

/// One invitee-list entry. `participant` is None when the referenced account
/// no longer exists; the id is still reported.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationView {
    pub participant_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<ParticipantSummary>,
    pub status: InviteStatus,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateEventView {
    pub id: String,
    pub creator_id: String,
    pub init_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub address: AddressView,
    pub cost: f64,
    pub description: String,
    pub photos: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<InvitationView>>,
}

impl PrivateEventView {
    pub fn from_event(event: &PrivateEvent) -> Self {
        Self {
            id: event.id.clone(),
            creator_id: event.creator_id.clone(),
            init_date: event.init_date,
            end_date: event.end_date,
            address: AddressView {
                country: event.country.clone(),
                city: event.city.clone(),
                street: event.street.clone(),
                number: event.number.clone(),
                postal_code: event.postal_code.clone(),
            },
            cost: event.cost,
            description: event.description.clone(),
            photos: event.photos(),
            participants: None,
        }
    }

    pub fn with_participants(event: &PrivateEvent, participants: Vec<InvitationView>) -> Self {
        let mut view = Self::from_event(event);
        view.participants = Some(participants);
        view
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub email_verified: bool,
    pub address: AddressView,
    pub local_type: String,
    pub approved: Option<bool>,
    pub created_at: DateTime<Utc>,
}

impl From<&Manager> for ManagerView {
    fn from(m: &Manager) -> Self {
        Self {
            id: m.id.clone(),
            name: m.name.clone(),
            email: m.email.clone(),
            email_verified: m.email_verified,
            address: AddressView {
                country: m.country.clone(),
                city: m.city.clone(),
                street: m.street.clone(),
                number: m.number.clone(),
                postal_code: m.postal_code.clone(),
            },
            local_type: m.local_type.clone(),
            approved: m.approved,
            created_at: m.created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicEventView {
    pub id: String,
    pub manager_id: String,
    pub init_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub address: AddressView,
    pub cost: f64,
    pub description: String,
    pub photos: Vec<String>,
}

impl From<&PublicEvent> for PublicEventView {
    fn from(event: &PublicEvent) -> Self {
        Self {
            id: event.id.clone(),
            manager_id: event.manager_id.clone(),
            init_date: event.init_date,
            end_date: event.end_date,
            address: AddressView {
                country: event.country.clone(),
                city: event.city.clone(),
                street: event.street.clone(),
                number: event.number.clone(),
                postal_code: event.postal_code.clone(),
            },
            cost: event.cost,
            description: event.description.clone(),
            photos: event.photos(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    pub id: String,
    pub reporter_id: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Report> for ReportView {
    fn from(r: &Report) -> Self {
        Self {
            id: r.id.clone(),
            reporter_id: r.reporter_id.clone(),
            title: r.title.clone(),
            description: r.description.clone(),
            created_at: r.created_at,
        }
    }
}
