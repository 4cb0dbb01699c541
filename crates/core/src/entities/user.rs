//! Shop user (the client who places orders).

use serde::{Deserialize, Serialize};

use crate::types::{Entity, UserId};

/// A registered user.
///
/// The stored password hash never leaves the persistence layer, so it has no
/// field here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Entity for User {
    type Id = UserId;

    const NAME: &'static str = "User";

    fn id(&self) -> UserId {
        self.id
    }
}
