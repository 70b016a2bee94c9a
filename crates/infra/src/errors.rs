//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use staffhub_domain::StaffHubError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub StaffHubError);

impl From<InfraError> for StaffHubError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<StaffHubError> for InfraError {
    fn from(value: StaffHubError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoStaffHubError {
    fn into_staffhub(self) -> StaffHubError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → StaffHubError */
/* -------------------------------------------------------------------------- */

impl IntoStaffHubError for HttpError {
    fn into_staffhub(self) -> StaffHubError {
        if self.is_timeout() {
            return StaffHubError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return StaffHubError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                404 => StaffHubError::NotFound(message),
                400..=499 => StaffHubError::InvalidInput(message),
                500..=599 => StaffHubError::DataService(message),
                _ => StaffHubError::Network(message),
            };
        }

        if self.is_decode() {
            return StaffHubError::DataService(format!("failed to decode response: {self}"));
        }

        StaffHubError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_staffhub())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
