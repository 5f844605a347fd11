use crate::domain::ids::UserId;
use serde::{Deserialize, Serialize};

/// Canonical user record. Every optional field is either a non-empty trimmed
/// string, a finite float, or `None`; never an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub id: UserId,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub zipcode: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub company_name: Option<String>,
    pub website: Option<String>,
}
