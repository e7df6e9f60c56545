use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::PitwallError;

/// Number of lap times recorded per practice session.
pub const LAP_COUNT: usize = 3;

/// Maximum number of sessions a store holds before rejecting inserts.
pub const MAX_SESSIONS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleCategory {
    Gt3,
    Formula,
    Rally,
}

impl VehicleCategory {
    /// All categories, in menu order.
    pub const ALL: [VehicleCategory; 3] = [
        VehicleCategory::Gt3,
        VehicleCategory::Formula,
        VehicleCategory::Rally,
    ];

    /// Maps the CLI's numbered menu choice (1-3) to a category. Anything
    /// outside the menu is an error, never a fallback category.
    pub fn from_menu_choice(choice: u32) -> Result<Self, PitwallError> {
        match choice {
            1 => Ok(VehicleCategory::Gt3),
            2 => Ok(VehicleCategory::Formula),
            3 => Ok(VehicleCategory::Rally),
            _ => Err(PitwallError::InvalidVehicleChoice {
                choice: choice.to_string(),
            }),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleCategory::Gt3 => "GT3",
            VehicleCategory::Formula => "Formula",
            VehicleCategory::Rally => "Rally",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One recorded practice run. Immutable once handed to a [`SessionStore`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub driver_name: String,
    pub track_name: String,
    pub vehicle: VehicleCategory,
    /// Lap times in seconds, in the order they were driven.
    pub lap_times_s: [f64; LAP_COUNT],
}

/// Bounded, insertion-ordered collection of sessions. Holds at most
/// [`MAX_SESSIONS`] entries; inserts beyond that are rejected without
/// touching the stored sessions.
pub struct SessionStore {
    sessions: Vec<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Vec::with_capacity(MAX_SESSIONS),
        }
    }

    /// Appends a session unless the store is at capacity. Returns whether
    /// the insertion happened.
    pub fn add(&mut self, session: Session) -> bool {
        if self.sessions.len() >= MAX_SESSIONS {
            return false;
        }
        self.sessions.push(session);
        true
    }

    pub fn count(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Stored sessions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Session> {
        self.sessions.iter()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
