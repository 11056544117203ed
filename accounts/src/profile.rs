//! Profile view model for the signed-in user.
//!
//! Shared by the web profile page and the CLI `whoami` command so both show
//! the same rows in the same order.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::session::Session;

pub const SIGNED_OUT_MESSAGE: &str = "You are not signed in.";
const FALLBACK_HEADING: &str = "User";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileView {
    SignedOut { message: &'static str },
    SignedIn { heading: String, subheading: String, rows: Vec<ProfileRow> },
}

impl ProfileView {
    #[must_use]
    pub fn from_session(session: Option<&Session>) -> Self {
        let Some(user) = session else {
            return Self::SignedOut { message: SIGNED_OUT_MESSAGE };
        };
        let heading = if user.username.is_empty() { FALLBACK_HEADING.to_owned() } else { user.username.clone() };
        let rows = vec![
            ProfileRow { label: "Username", value: user.username.clone() },
            ProfileRow { label: "Name", value: user.full_name.clone() },
            ProfileRow { label: "Email", value: user.email.clone() },
            ProfileRow { label: "Phone", value: user.phone.clone() },
        ];
        Self::SignedIn { heading, subheading: user.full_name.clone(), rows }
    }

    /// Plain-text rendering, one `Label: value` line per row.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::SignedOut { message } => (*message).to_owned(),
            Self::SignedIn { heading, rows, .. } => {
                let mut out = heading.clone();
                for row in rows {
                    out.push('\n');
                    out.push_str(row.label);
                    out.push_str(": ");
                    out.push_str(&row.value);
                }
                out
            }
        }
    }
}
