use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Kinds of notification a user can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum NotificationCategory {
    UpdatesSavedProperties,
    NewProperties,
    News,
}

impl NotificationCategory {
    /// Display order
    pub const ALL: [Self; 3] = [Self::UpdatesSavedProperties, Self::NewProperties, Self::News];

    /// Field prefix used in step data, e.g. `newProperties` in `newPropertiesEmail`
    pub fn key(self) -> &'static str {
        match self {
            Self::UpdatesSavedProperties => "updatesSavedProperties",
            Self::NewProperties => "newProperties",
            Self::News => "news",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::UpdatesSavedProperties => "Property Updates",
            Self::NewProperties => "New Property Matches",
            Self::News => "Rentora Updates",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::UpdatesSavedProperties => {
                "Get notified when saved properties have price changes, new photos, or status updates"
            }
            Self::NewProperties => {
                "Receive alerts for new properties that match your preferences and search criteria"
            }
            Self::News => {
                "Stay informed about new features, market insights, and important platform updates"
            }
        }
    }
}

/// Delivery channel for a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum NotificationChannel {
    Email,
    /// SMS / push; needs a phone number
    Push,
}

/// Email and push opt-ins for every category, as sent back to the onboarding flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct NotificationPreferences {
    pub updates_saved_properties_email: bool,
    pub updates_saved_properties_push: bool,
    pub new_properties_email: bool,
    pub new_properties_push: bool,
    pub news_email: bool,
    pub news_push: bool,
}

impl NotificationPreferences {
    pub fn get(&self, category: NotificationCategory, channel: NotificationChannel) -> bool {
        *self.field(category, channel)
    }

    pub fn set(&mut self, category: NotificationCategory, channel: NotificationChannel, value: bool) {
        *self.field_mut(category, channel) = value;
    }

    fn field(&self, category: NotificationCategory, channel: NotificationChannel) -> &bool {
        use NotificationCategory::*;
        use NotificationChannel::*;
        match (category, channel) {
            (UpdatesSavedProperties, Email) => &self.updates_saved_properties_email,
            (UpdatesSavedProperties, Push) => &self.updates_saved_properties_push,
            (NewProperties, Email) => &self.new_properties_email,
            (NewProperties, Push) => &self.new_properties_push,
            (News, Email) => &self.news_email,
            (News, Push) => &self.news_push,
        }
    }

    fn field_mut(&mut self, category: NotificationCategory, channel: NotificationChannel) -> &mut bool {
        use NotificationCategory::*;
        use NotificationChannel::*;
        match (category, channel) {
            (UpdatesSavedProperties, Email) => &mut self.updates_saved_properties_email,
            (UpdatesSavedProperties, Push) => &mut self.updates_saved_properties_push,
            (NewProperties, Email) => &mut self.new_properties_email,
            (NewProperties, Push) => &mut self.new_properties_push,
            (News, Email) => &mut self.news_email,
            (News, Push) => &mut self.news_push,
        }
    }
}
