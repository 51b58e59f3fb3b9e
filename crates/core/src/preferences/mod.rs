//! Locally remembered user choices
//!
//! The result sort order lives under its own key; everything else is one
//! preferences object.

mod sort;
mod user;

pub use sort::{save_sort_preference, sort_preference, SortOption, SORT_PREFERENCE_KEY};
pub use user::{
    add_saved_location, clear_user_preferences, has_user_preferences, remove_saved_location,
    save_user_preferences, update_user_preferences, user_preferences, NotificationPreferences,
    SavedLocation, UserPreferences, DEFAULT_RADIUS_MILES, MAX_SAVED_LOCATIONS, USER_PREFERENCES_KEY,
};
