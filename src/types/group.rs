use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::error::AppError;
use crate::types::user::UserView;
use crate::utils::validate::required;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RGroupCreate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub location: Option<String>,
    pub chronic: Option<String>,
    pub master: Option<Uuid>,
}

pub struct NewGroup {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub location: String,
    pub chronic: String,
    pub master: Option<Uuid>,
}

impl RGroupCreate {
    pub fn validate(&self) -> Result<NewGroup, AppError> {
        let name = required(&self.name, "name")?;
        let description = required(&self.description, "description")?;
        let schedule = required(&self.schedule, "schedule")?;
        let location = required(&self.location, "location")?;
        let chronic = required(&self.chronic, "chronic")?;
        Ok(NewGroup {
            name: name.to_string(),
            description: description.to_string(),
            schedule: schedule.to_string(),
            location: location.to_string(),
            chronic: chronic.to_string(),
            master: self.master,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GroupView {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub location: String,
    pub chronic: String,
    pub master: Uuid,
    pub players: Vec<UserView>,
}

impl GroupView {
    pub fn new(group: entity::group::Model, players: Vec<entity::user::Model>) -> Self {
        GroupView {
            id: group.id,
            name: group.name,
            description: group.description,
            schedule: group.schedule,
            location: group.location,
            chronic: group.chronic,
            master: group.master,
            players: players.into_iter().map(UserView::from).collect(),
        }
    }
}
