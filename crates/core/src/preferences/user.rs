//! Locally stored user preferences
//!
//! Stored values are merged over [`UserPreferences::default`], so fields
//! missing from older saves keep their defaults.

use crate::error::{Error, Result};
use crate::store::{read_json, write_json, KeyValueStore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Storage key for the preferences object
pub const USER_PREFERENCES_KEY: &str = "medSearchPreferences";

/// Saved locations kept before the oldest is dropped
pub const MAX_SAVED_LOCATIONS: usize = 5;

/// Search radius used until the user picks one, in miles
pub const DEFAULT_RADIUS_MILES: u32 = 50;

/// A named place the user searches around
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedLocation {
    /// Generated identifier
    pub id: String,
    /// Label chosen by the user, e.g. "Home"
    pub name: String,
    /// ZIP code
    pub zip: String,
    /// Search radius in miles
    pub radius: u32,
}

/// Notification channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationPreferences {
    /// Email updates
    pub email: bool,
    /// Text message updates
    pub sms: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self { email: true, sms: false }
    }
}

/// Search defaults and contact settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    /// ZIP code searches start from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_zip: Option<String>,
    /// Search radius in miles
    pub default_radius: u32,
    /// Insurance carriers to favour in results
    pub preferred_insurance_carriers: Vec<String>,
    /// Oldest first, at most [`MAX_SAVED_LOCATIONS`]
    pub saved_locations: Vec<SavedLocation>,
    /// ISO 639-1 language code
    pub language: String,
    /// Notification channels
    pub notifications: NotificationPreferences,
    /// Set on every save
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            default_zip: None,
            default_radius: DEFAULT_RADIUS_MILES,
            preferred_insurance_carriers: Vec::new(),
            saved_locations: Vec::new(),
            language: "en".to_string(),
            notifications: NotificationPreferences::default(),
            updated_at: None,
        }
    }
}

/// Stored preferences, or the defaults when nothing readable is stored
pub fn user_preferences<S: KeyValueStore + ?Sized>(store: &S) -> Result<UserPreferences> {
    Ok(read_json(store, USER_PREFERENCES_KEY)?.unwrap_or_default())
}

/// Whether preferences have ever been saved
pub fn has_user_preferences<S: KeyValueStore + ?Sized>(store: &S) -> Result<bool> {
    Ok(store.get(USER_PREFERENCES_KEY)?.is_some())
}

/// Save `preferences`, stamping `updated_at`
pub fn save_user_preferences<S: KeyValueStore + ?Sized>(
    store: &mut S,
    mut preferences: UserPreferences,
) -> Result<UserPreferences> {
    preferences.updated_at = Some(Utc::now());
    write_json(store, USER_PREFERENCES_KEY, &preferences)?;
    Ok(preferences)
}

/// Load, change and save the preferences in one step
pub fn update_user_preferences<S, F>(store: &mut S, change: F) -> Result<UserPreferences>
where
    S: KeyValueStore + ?Sized,
    F: FnOnce(&mut UserPreferences),
{
    let mut preferences = user_preferences(&*store)?;
    change(&mut preferences);
    save_user_preferences(store, preferences)
}

/// Remember a location, dropping the oldest ones beyond the limit
pub fn add_saved_location<S: KeyValueStore + ?Sized>(
    store: &mut S,
    name: &str,
    zip: &str,
    radius: u32,
) -> Result<SavedLocation> {
    let name = name.trim();
    let zip = zip.trim();
    if name.is_empty() || zip.is_empty() {
        return Err(Error::invalid_input("A saved location needs a name and a ZIP code"));
    }

    let location = SavedLocation {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        zip: zip.to_string(),
        radius,
    };

    let added = location.clone();
    update_user_preferences(store, move |preferences| {
        let locations = &mut preferences.saved_locations;
        let overflow = (locations.len() + 1).saturating_sub(MAX_SAVED_LOCATIONS);
        locations.drain(..overflow.min(locations.len()));
        locations.push(location);
    })?;

    Ok(added)
}

/// Forget the saved location with `id`, returning whether it existed
pub fn remove_saved_location<S: KeyValueStore + ?Sized>(store: &mut S, id: &str) -> Result<bool> {
    let mut preferences = user_preferences(&*store)?;
    let before = preferences.saved_locations.len();
    preferences.saved_locations.retain(|location| location.id != id);

    if preferences.saved_locations.len() == before {
        return Ok(false);
    }
    save_user_preferences(store, preferences)?;
    Ok(true)
}

/// Drop all stored preferences
pub fn clear_user_preferences<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<()> {
    store.remove(USER_PREFERENCES_KEY)
}
