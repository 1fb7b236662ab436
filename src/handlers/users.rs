//! User accounts fixture served by `GET /users`.

use std::time::Duration;

use axum::http::Method;
use serde::{Deserialize, Serialize};
use time::macros::datetime;
use time::OffsetDateTime;

use crate::handlers::StubHandler;

/// Path served by the users handler.
pub const USERS_PATH: &str = "/users";

/// Default artificial delay for `GET /users`.
pub const DEFAULT_USERS_DELAY: Duration = Duration::from_secs(1);

/// Role of a console user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    Sales,
    Viewer,
}

/// Lifecycle status of a console user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
}

/// A user account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    pub id: String,
    /// Full name
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    /// Registration time
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Last sign-in, `None` if the user never signed in
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_access: Option<OffsetDateTime>,
    /// Avatar image URL
    #[serde(default)]
    pub avatar: Option<String>,
}

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    name: &str,
    email: &str,
    role: UserRole,
    status: UserStatus,
    created_at: OffsetDateTime,
    last_access: Option<OffsetDateTime>,
    avatar: Option<&str>,
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        created_at,
        last_access,
        avatar: avatar.map(str::to_string),
    }
}

/// The fixed set of user accounts, in response order.
pub fn fixture_users() -> Vec<User> {
    use UserRole::*;
    use UserStatus::*;

    vec![
        user(
            "usr-001",
            "Alice Moreau",
            "alice.moreau@example.com",
            Admin,
            Active,
            datetime!(2023-01-09 08:15:00 UTC),
            Some(datetime!(2024-06-03 07:42:10 UTC)),
            Some("https://avatars.example.com/usr-001.png"),
        ),
        user(
            "usr-002",
            "Bruno Keller",
            "bruno.keller@example.com",
            Manager,
            Active,
            datetime!(2023-02-14 10:30:00 UTC),
            Some(datetime!(2024-06-02 16:05:44 UTC)),
            None,
        ),
        user(
            "usr-003",
            "Chiara Russo",
            "chiara.russo@example.com",
            Sales,
            Active,
            datetime!(2023-04-21 13:00:00 UTC),
            Some(datetime!(2024-05-30 09:12:31 UTC)),
            Some("https://avatars.example.com/usr-003.png"),
        ),
        user(
            "usr-004",
            "Daniel Okafor",
            "daniel.okafor@example.com",
            Sales,
            Inactive,
            datetime!(2023-06-05 09:45:00 UTC),
            Some(datetime!(2024-01-18 11:27:03 UTC)),
            None,
        ),
        user(
            "usr-005",
            "Elena Petrova",
            "elena.petrova@example.com",
            Viewer,
            Pending,
            datetime!(2024-05-28 15:20:00 UTC),
            None,
            None,
        ),
        user(
            "usr-006",
            "Farid Haddad",
            "farid.haddad@example.com",
            Manager,
            Active,
            datetime!(2023-09-11 07:55:00 UTC),
            Some(datetime!(2024-06-01 18:40:19 UTC)),
            Some("https://avatars.example.com/usr-006.png"),
        ),
        user(
            "usr-007",
            "Greta Lindqvist",
            "greta.lindqvist@example.com",
            Viewer,
            Inactive,
            datetime!(2023-11-30 12:10:00 UTC),
            None,
            None,
        ),
    ]
}

/// Build the `GET /users` handler.
///
/// # Parameters
///
/// - `delay` - Artificial delay applied before every response
///
/// # Returns
///
/// Returns a `StubHandler` serving [`fixture_users`], or the serialization error.
///
/// # Errors
///
/// Returns error if the fixture cannot be encoded as JSON.
pub fn users_handler(delay: Duration) -> serde_json::Result<StubHandler> {
    let body = serde_json::to_value(fixture_users())?;
    Ok(StubHandler::new(USERS_PATH, body)
        .with_method(Method::GET)
        .with_delay(delay)
        .with_name("users"))
}
