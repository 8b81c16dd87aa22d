use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{OnboardingError, Result};
use crate::preferences::{NotificationCategory, NotificationChannel, NotificationPreferences};

/// The slice of accumulated onboarding data this step reads.
/// Other fields of the flow's step data are ignored.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct OnboardingStepData {
    #[serde(default)]
    #[ts(optional)]
    pub phone_number: Option<String>,
    #[serde(default)]
    #[ts(optional)]
    pub updates_saved_properties_email: Option<bool>,
    #[serde(default)]
    #[ts(optional)]
    pub updates_saved_properties_push: Option<bool>,
    #[serde(default)]
    #[ts(optional)]
    pub new_properties_email: Option<bool>,
    #[serde(default)]
    #[ts(optional)]
    pub new_properties_push: Option<bool>,
    #[serde(default)]
    #[ts(optional)]
    pub news_email: Option<bool>,
    #[serde(default)]
    #[ts(optional)]
    pub news_push: Option<bool>,
}

impl OnboardingStepData {
    /// A phone number counts only if it has non-whitespace content
    pub fn has_phone_number(&self) -> bool {
        self.phone_number
            .as_deref()
            .is_some_and(|p| !p.trim().is_empty())
    }
}

/// View data for one category's pair of switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ToggleRow {
    pub key: String,
    pub label: String,
    pub description: String,
    pub email: bool,
    pub push: bool,
    pub push_disabled: bool,
}

/// Notification-preferences step of the onboarding flow
#[derive(Debug, Clone)]
pub struct NotificationPreferencesStep {
    preferences: NotificationPreferences,
    phone_available: bool,
}

impl NotificationPreferencesStep {
    /// Seed the step from incoming data. Unset fields default to enabled;
    /// push is forced off when there is no phone number.
    pub fn new(data: &OnboardingStepData) -> Self {
        let phone_available = data.has_phone_number();
        let push = |value: Option<bool>| phone_available && value.unwrap_or(true);

        let preferences = NotificationPreferences {
            updates_saved_properties_email: data.updates_saved_properties_email.unwrap_or(true),
            updates_saved_properties_push: push(data.updates_saved_properties_push),
            new_properties_email: data.new_properties_email.unwrap_or(true),
            new_properties_push: push(data.new_properties_push),
            news_email: data.news_email.unwrap_or(true),
            news_push: push(data.news_push),
        };

        Self {
            preferences,
            phone_available,
        }
    }

    pub fn preferences(&self) -> &NotificationPreferences {
        &self.preferences
    }

    pub fn push_disabled(&self) -> bool {
        !self.phone_available
    }

    /// Flip one switch. Push cannot be turned on without a phone number;
    /// turning anything off always succeeds.
    pub fn toggle(
        &mut self,
        category: NotificationCategory,
        channel: NotificationChannel,
        value: bool,
    ) -> Result<()> {
        if channel == NotificationChannel::Push && value && self.push_disabled() {
            return Err(OnboardingError::PhoneNumberRequired);
        }
        self.preferences.set(category, channel, value);
        Ok(())
    }

    pub fn rows(&self) -> Vec<ToggleRow> {
        NotificationCategory::ALL
            .into_iter()
            .map(|category| ToggleRow {
                key: category.key().to_string(),
                label: category.label().to_string(),
                description: category.description().to_string(),
                email: self.preferences.get(category, NotificationChannel::Email),
                push: self.preferences.get(category, NotificationChannel::Push),
                push_disabled: self.push_disabled(),
            })
            .collect()
    }

    /// Hand the preferences to the flow, then advance if a next step exists
    pub fn submit<U, N>(self, on_update: U, on_next: Option<N>)
    where
        U: FnOnce(NotificationPreferences),
        N: FnOnce(),
    {
        debug!(
            push_disabled = self.push_disabled(),
            "Submitting notification preferences"
        );
        on_update(self.preferences);
        if let Some(next) = on_next {
            next();
        }
    }

    /// Go back without emitting an update
    pub fn back<P: FnOnce()>(self, on_previous: P) {
        on_previous();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn with_phone(phone: &str) -> OnboardingStepData {
        OnboardingStepData {
            phone_number: Some(phone.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_with_phone_enable_everything() {
        let step = NotificationPreferencesStep::new(&with_phone("+1 512 555 0100"));
        let prefs = step.preferences();

        assert!(!step.push_disabled());
        for category in NotificationCategory::ALL {
            assert!(prefs.get(category, NotificationChannel::Email));
            assert!(prefs.get(category, NotificationChannel::Push));
        }
    }

    #[test]
    fn test_no_phone_forces_push_off() {
        let data = OnboardingStepData {
            news_push: Some(true),
            new_properties_push: Some(true),
            ..Default::default()
        };
        let step = NotificationPreferencesStep::new(&data);

        assert!(step.push_disabled());
        for category in NotificationCategory::ALL {
            assert!(step.preferences().get(category, NotificationChannel::Email));
            assert!(!step.preferences().get(category, NotificationChannel::Push));
        }
    }

    #[test]
    fn test_blank_phone_counts_as_missing() {
        let step = NotificationPreferencesStep::new(&with_phone("   "));
        assert!(step.push_disabled());
        assert!(!step.preferences().news_push);
    }

    #[test]
    fn test_existing_values_are_kept() {
        let data = OnboardingStepData {
            phone_number: Some("5125550100".into()),
            updates_saved_properties_email: Some(false),
            news_push: Some(false),
            ..Default::default()
        };
        let prefs = *NotificationPreferencesStep::new(&data).preferences();

        assert!(!prefs.updates_saved_properties_email);
        assert!(prefs.updates_saved_properties_push);
        assert!(!prefs.news_push);
        assert!(prefs.news_email);
    }

    #[test]
    fn test_toggle() {
        let mut step = NotificationPreferencesStep::new(&with_phone("5125550100"));
        step.toggle(NotificationCategory::News, NotificationChannel::Email, false)
            .unwrap();
        step.toggle(NotificationCategory::News, NotificationChannel::Push, false)
            .unwrap();

        assert!(!step.preferences().news_email);
        assert!(!step.preferences().news_push);
        assert!(step.preferences().new_properties_email);
    }

    #[test]
    fn test_toggle_push_without_phone_is_rejected() {
        let mut step = NotificationPreferencesStep::new(&OnboardingStepData::default());

        let result = step.toggle(NotificationCategory::News, NotificationChannel::Push, true);
        assert_eq!(result, Err(OnboardingError::PhoneNumberRequired));
        assert!(!step.preferences().news_push);

        // Turning push off is still fine
        assert!(step
            .toggle(NotificationCategory::News, NotificationChannel::Push, false)
            .is_ok());
    }

    #[test]
    fn test_rows_follow_category_order() {
        let step = NotificationPreferencesStep::new(&OnboardingStepData::default());
        let rows = step.rows();

        let keys: Vec<_> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["updatesSavedProperties", "newProperties", "news"]);
        assert_eq!(rows[2].label, "Rentora Updates");
        assert!(rows.iter().all(|r| r.push_disabled && r.email && !r.push));
    }

    #[test]
    fn test_submit_updates_then_advances() {
        let calls = RefCell::new(Vec::new());
        let mut step = NotificationPreferencesStep::new(&with_phone("5125550100"));
        step.toggle(NotificationCategory::NewProperties, NotificationChannel::Email, false)
            .unwrap();

        step.submit(
            |prefs| {
                assert!(!prefs.new_properties_email);
                calls.borrow_mut().push("update");
            },
            Some(|| calls.borrow_mut().push("next")),
        );

        assert_eq!(*calls.borrow(), vec!["update", "next"]);
    }

    #[test]
    fn test_submit_without_next_step() {
        let mut updated = None;
        let step = NotificationPreferencesStep::new(&OnboardingStepData::default());

        step.submit(|prefs| updated = Some(prefs), None::<fn()>);

        assert!(updated.is_some_and(|p| !p.news_push));
    }

    #[test]
    fn test_back_does_not_update() {
        let mut went_back = false;
        let step = NotificationPreferencesStep::new(&OnboardingStepData::default());

        step.back(|| went_back = true);

        assert!(went_back);
    }

    #[test]
    fn test_step_data_ignores_unknown_fields() {
        let data: OnboardingStepData = serde_json::from_str(
            r#"{ "phoneNumber": "5125550100", "firstName": "Sam", "newsPush": false }"#,
        )
        .unwrap();

        assert!(data.has_phone_number());
        assert_eq!(data.news_push, Some(false));
        assert_eq!(data.news_email, None);
    }
}
