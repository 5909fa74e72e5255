//! The `user` schema.

use tagwire_codec::wire_record;

wire_record! {
    /// A user account.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct User {
        pub id: String => "id",
        pub name: String => "name",
        /// Omitted on the wire when `None`.
        pub favorite_numbers: Option<Vec<i32>> => "favoriteNumbers",
    }
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        User {
            id: id.into(),
            name: name.into(),
            favorite_numbers: None,
        }
    }
}
