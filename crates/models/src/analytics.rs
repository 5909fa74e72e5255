//! The `analytics` schema: the root value is itself a tagged union keyed by
//! `"eventType"`.

use tagwire_codec::{wire_enum, wire_record, wire_union, Open};

wire_enum! {
    /// Login methods known to this build. Newer producers may send others,
    /// so the field holding it is open.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum LoginMethod {
        Password = "password",
        Sso = "sso",
        Token = "token",
    }
}

wire_record! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AnalyticsUserLoggedIn {
        pub user_id: String => "userId",
        pub login_method: Open<LoginMethod> => "loginMethod",
    }
}

wire_record! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AnalyticsUserLoggedOut {
        pub user_id: String => "userId",
        pub logout_method: String => "logoutMethod",
    }
}

wire_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Analytics {
        discriminator = "eventType";
        "user_logged_in" => UserLoggedIn(AnalyticsUserLoggedIn),
        "user_logged_out" => UserLoggedOut(AnalyticsUserLoggedOut),
    }
}

impl Analytics {
    pub fn user_id(&self) -> &str {
        match self {
            Analytics::UserLoggedIn(e) => &e.user_id,
            Analytics::UserLoggedOut(e) => &e.user_id,
        }
    }
}
