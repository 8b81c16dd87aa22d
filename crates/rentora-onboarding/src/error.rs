//! Error types for onboarding steps

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingError {
    /// Push notifications cannot be enabled without a phone number
    PhoneNumberRequired,
}

impl fmt::Display for OnboardingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PhoneNumberRequired => {
                write!(f, "Phone number required for push notifications")
            }
        }
    }
}

impl std::error::Error for OnboardingError {}

pub type Result<T> = std::result::Result<T, OnboardingError>;
