//! tagwire-models: schema-derived models built on tagwire-codec.
//!
//! Each module mirrors one schema. Records, enums and tagged unions are
//! declared with the codec macros, so every type here implements
//! `FromWire` and `ToWire` and round-trips through flat JSON objects.

pub mod analytics;
pub mod gamut;
pub mod message;
pub mod user;

pub use analytics::{Analytics, AnalyticsUserLoggedIn, AnalyticsUserLoggedOut, LoginMethod};
pub use gamut::{
    Gamut, GamutDiscriminator, GamutDiscriminatorA, GamutDiscriminatorB, GamutElements,
    GamutEnum, GamutType, GamutValues, Ref,
};
pub use message::{Message, MessageDetails, MessageDetailsUserCreated, MessageDetailsUserDeleted};
pub use user::User;
