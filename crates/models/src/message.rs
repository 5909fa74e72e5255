//! The `message` schema: an envelope whose `details` field is a tagged union
//! keyed by `"type"`.

use crate::user::User;
use tagwire_codec::{wire_record, wire_union};
use time::OffsetDateTime;

wire_record! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct MessageDetailsUserDeleted {
        pub user_id: String => "userId",
    }
}

wire_record! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct MessageDetailsUserCreated {
        pub user: User => "user",
    }
}

wire_union! {
    /// What happened to the user.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum MessageDetails {
        discriminator = "type";
        "user_deleted" => UserDeleted(MessageDetailsUserDeleted),
        "user_created" => UserCreated(MessageDetailsUserCreated),
    }
}

impl MessageDetails {
    /// Id of the affected user, whichever variant is active.
    pub fn user_id(&self) -> &str {
        match self {
            MessageDetails::UserDeleted(d) => &d.user_id,
            MessageDetails::UserCreated(c) => &c.user.id,
        }
    }
}

wire_record! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Message {
        pub message_id: String => "messageId",
        pub details: MessageDetails => "details",
        pub timestamp: OffsetDateTime => "timestamp",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tagwire_codec::{FromWire, TaggedUnion, ToWire};

    #[test]
    fn test_details_discriminator_constants() {
        assert_eq!(MessageDetails::DISCRIMINATOR, "type");
        assert_eq!(
            MessageDetails::registry().tags().collect::<Vec<_>>(),
            vec!["user_deleted", "user_created"]
        );
    }

    #[test]
    fn test_user_id_across_variants() {
        let deleted = MessageDetails::from_wire(&json!({"type": "user_deleted", "userId": "9"}))
            .unwrap();
        assert_eq!(deleted.user_id(), "9");

        let created = MessageDetails::UserCreated(MessageDetailsUserCreated {
            user: User::new("4", "D"),
        });
        assert_eq!(created.user_id(), "4");
        assert_eq!(
            created.to_wire().unwrap(),
            json!({"type": "user_created", "user": {"id": "4", "name": "D"}})
        );
    }
}
