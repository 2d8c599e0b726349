use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Store-assigned identifier of a client. Once issued it is never handed out again,
/// even after the client it belonged to has been deleted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(transparent)]
#[serde(transparent)]
pub struct ClientId(i32);

impl From<i32> for ClientId {
    fn from(value: i32) -> Self {
        ClientId(value)
    }
}

impl From<ClientId> for i32 {
    fn from(client_id: ClientId) -> Self {
        client_id.0
    }
}

impl Display for ClientId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A gym client. `id` is `None` until the record has been stored for the first time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Client {
    #[serde(default)]
    pub id: Option<ClientId>,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub membership_number: i32,
}

impl Client {
    pub fn new(first_name: String, last_name: String, membership_number: i32) -> Self {
        Client {
            id: None,
            first_name,
            last_name,
            membership_number,
        }
    }

    pub fn with_id(mut self, client_id: ClientId) -> Self {
        self.id = Some(client_id);
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Trims the text fields and checks that a first name is present.
    pub fn validated(mut self) -> Result<Self, Error> {
        self.first_name = parse_first_name(&self.first_name)?;
        self.last_name = self.last_name.trim().to_owned();
        Ok(self)
    }
}

impl Display for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "#{} ", id)?,
            None => f.write_str("#- ")?,
        }
        write!(
            f,
            "{} {} (membership {})",
            self.first_name, self.last_name, self.membership_number
        )
    }
}

pub fn parse_first_name(value: &str) -> Result<String, Error> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::invalid_input("first_name", "must not be empty"));
    }
    Ok(value.to_owned())
}

pub fn parse_membership_number(value: &str) -> Result<i32, Error> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::invalid_input("membership_number", "must not be empty"));
    }
    value
        .parse()
        .map_err(|_| Error::invalid_input("membership_number", "must be a whole number"))
}

pub fn parse_client_id(value: &str) -> Result<ClientId, Error> {
    value
        .trim()
        .parse::<i32>()
        .map(ClientId::from)
        .map_err(|_| Error::invalid_input("id", "must be a whole number"))
}
