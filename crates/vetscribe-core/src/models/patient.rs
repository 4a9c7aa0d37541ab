use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub date_of_birth: Option<jiff::civil::Date>,
    pub sex: String,
    pub owner_name: String,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
