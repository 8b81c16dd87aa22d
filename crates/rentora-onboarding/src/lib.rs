//! Onboarding step state for Rentora
//!
//! Holds the logic behind the notification-preferences step: defaults,
//! gating SMS/push on a phone number, toggling, and handing the result back
//! to the onboarding flow. Rendering is left to the frontend, which consumes
//! the generated TypeScript bindings.

mod error;
mod preferences;
mod step;

pub use error::{OnboardingError, Result};
pub use preferences::{NotificationCategory, NotificationChannel, NotificationPreferences};
pub use step::{NotificationPreferencesStep, OnboardingStepData, ToggleRow};
