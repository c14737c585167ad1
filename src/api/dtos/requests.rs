use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    pub country: Option<String>,
    pub city: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub postal_code: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub name: String,
    pub surname: String,
    pub username: String,
    pub email: String,
    pub password: Option<String>,
    pub external_id: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct EmailLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrivateEventRequest {
    pub init_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub description: String,
    pub address: Option<AddressDto>,
    pub cost: Option<f64>,
    pub photos: Option<Vec<String>>,
}

/// Full-field overwrite; photos are deliberately absent.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePrivateEventRequest {
    pub init_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub description: String,
    pub address: Option<AddressDto>,
    pub cost: Option<f64>,
}

#[derive(Deserialize)]
pub struct InviteRequest {
    pub users: Vec<String>,
}

#[derive(Deserialize)]
pub struct RespondRequest {
    pub accept: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerSignupRequest {
    pub name: String,
    pub email: String,
    pub local_type: String,
    pub address: Option<AddressDto>,
}

#[derive(Deserialize)]
pub struct DecideRequest {
    pub approve: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePublicEventRequest {
    pub init_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub description: String,
    pub address: Option<AddressDto>,
    pub cost: Option<f64>,
    pub photos: Option<Vec<String>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePublicEventRequest {
    pub init_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub description: String,
    pub address: Option<AddressDto>,
    pub cost: Option<f64>,
}

#[derive(Deserialize)]
pub struct CreateReportRequest {
    pub title: String,
    pub description: String,
}
