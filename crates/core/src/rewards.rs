//! MarioPoints earned for user actions
//!
//! Every event appends to the reward history and adds its points to a
//! running total kept under a separate key.

use crate::error::{Error, Result};
use crate::store::{read_json, write_json, KeyValueStore};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage key for the reward history
pub const REWARD_HISTORY_KEY: &str = "marioRewards";

/// Storage key for the running point total
pub const TOTAL_POINTS_KEY: &str = "marioTotalPoints";

/// Actions that earn points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RewardEventType {
    /// Booked through the concierge
    Concierge,
    /// Followed a MarioAI pick
    MarioPick,
    /// Found a prescription price
    Prescription,
    /// Filled in the profile
    ProfileComplete,
    /// Ran a first search
    FirstSearch,
    /// Made a first booking
    FirstBooking,
}

impl RewardEventType {
    /// Every event type
    pub const ALL: [RewardEventType; 6] = [
        RewardEventType::Concierge,
        RewardEventType::MarioPick,
        RewardEventType::Prescription,
        RewardEventType::ProfileComplete,
        RewardEventType::FirstSearch,
        RewardEventType::FirstBooking,
    ];

    /// Stored identifier
    pub fn as_str(self) -> &'static str {
        match self {
            RewardEventType::Concierge => "concierge",
            RewardEventType::MarioPick => "marioPick",
            RewardEventType::Prescription => "prescription",
            RewardEventType::ProfileComplete => "profileComplete",
            RewardEventType::FirstSearch => "firstSearch",
            RewardEventType::FirstBooking => "firstBooking",
        }
    }

    /// Points awarded for the event
    pub fn points(self) -> u32 {
        match self {
            RewardEventType::Concierge => 50,
            RewardEventType::MarioPick => 25,
            RewardEventType::Prescription => 30,
            RewardEventType::ProfileComplete => 100,
            RewardEventType::FirstSearch => 10,
            RewardEventType::FirstBooking => 75,
        }
    }

    /// Text shown in the reward history
    pub fn description(self) -> &'static str {
        match self {
            RewardEventType::Concierge => "Booked with Concierge",
            RewardEventType::MarioPick => "Used MarioAI Pick",
            RewardEventType::Prescription => "Found Prescription",
            RewardEventType::ProfileComplete => "Completed Profile",
            RewardEventType::FirstSearch => "First Search",
            RewardEventType::FirstBooking => "First Booking",
        }
    }
}

impl fmt::Display for RewardEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RewardEventType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        RewardEventType::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| {
                Error::invalid_input(format!("Unknown reward event: {}", s)).with_suggestion(
                    "Use one of: concierge, marioPick, prescription, profileComplete, firstSearch, firstBooking",
                )
            })
    }
}

/// One entry in the reward history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardEvent {
    /// What was rewarded
    #[serde(rename = "type")]
    pub event_type: RewardEventType,
    /// Points earned
    pub points: u32,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    /// Text shown in the history
    pub description: String,
}

/// Reward history and point total backed by a [`KeyValueStore`]
pub struct Rewards<'s, S: KeyValueStore + ?Sized> {
    store: &'s mut S,
}

impl<'s, S: KeyValueStore + ?Sized> Rewards<'s, S> {
    /// Use `store` for history and total
    pub fn new(store: &'s mut S) -> Self {
        Self { store }
    }

    /// Earned rewards, oldest first
    pub fn history(&self) -> Result<Vec<RewardEvent>> {
        Ok(read_json(&*self.store, REWARD_HISTORY_KEY)?.unwrap_or_default())
    }

    /// Running point total. Unreadable values count as zero.
    pub fn total_points(&self) -> Result<u64> {
        let Some(raw) = self.store.get(TOTAL_POINTS_KEY)? else {
            return Ok(0);
        };

        Ok(raw.trim().parse::<u64>().unwrap_or_else(|_| {
            tracing::warn!(value = %raw, "Ignoring unreadable point total");
            0
        }))
    }

    /// Record `event_type` and return the event that was stored
    pub fn earn(&mut self, event_type: RewardEventType) -> Result<RewardEvent> {
        let event = RewardEvent {
            event_type,
            points: event_type.points(),
            timestamp: Utc::now().timestamp_millis(),
            description: event_type.description().to_string(),
        };

        let mut history = self.history()?;
        history.push(event.clone());
        write_json(&mut *self.store, REWARD_HISTORY_KEY, &history)?;

        let total = self.total_points()? + u64::from(event.points);
        self.store.set(TOTAL_POINTS_KEY, &total.to_string())?;

        tracing::debug!(event = %event_type, points = event.points, total, "Reward earned");
        Ok(event)
    }

    /// Forget the history and reset the total
    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(REWARD_HISTORY_KEY)?;
        self.store.remove(TOTAL_POINTS_KEY)
    }
}
