//! Identity resolved from an access token.

use crate::server::model::order::Channel;

/// Who is calling and what they may see.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub user_id: i32,
    pub merchant_id: i32,
    pub access_reception: bool,
    pub access_delivery: bool,
    pub access_waiter: bool,
}

impl Identity {
    /// Converts a user row into an identity at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            user_id: entity.user_id,
            merchant_id: entity.merchant_id,
            access_reception: entity.access_reception,
            access_delivery: entity.access_delivery,
            access_waiter: entity.access_waiter,
        }
    }

    /// Whether the user holds the permission for `channel`.
    pub fn can_use(&self, channel: Channel) -> bool {
        match channel {
            Channel::Reception => self.access_reception,
            Channel::Delivery => self.access_delivery,
            Channel::Waiter => self.access_waiter,
        }
    }
}
