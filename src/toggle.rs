use std::fmt;

use thiserror::Error;

/// Fallback notice text when the server rejects a toggle without a reason.
const GENERIC_REJECTION: &str = "The status change was not saved.";

#[derive(Debug, Error)]
pub enum ToggleError {
    #[error("a toggle request is already in flight")]
    RequestInFlight,

    #[error("no toggle request is in flight")]
    NoRequestInFlight,
}

/// What the transport layer posts: the desired-state parameter for one
/// toggle interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleRequest {
    pub desired: bool,
}

/// Terminal outcome of the toggle request as reported by the transport
/// layer: any 2xx response is `Accepted`, anything else is `Rejected` with
/// whatever reason text the body carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    Accepted,
    Rejected { reason: Option<String> },
}

/// Inline dismissible notice shown when a toggle is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
}

impl Notice {
    fn rejection(reason: Option<String>) -> Self {
        Self {
            message: reason.unwrap_or_else(|| GENERIC_REJECTION.to_owned()),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// How a resolved toggle request should be applied to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleResolution {
    /// The server accepted; the backing state now equals `active`.
    Applied { active: bool },
    /// The server rejected; the control reverts to the prior backing state
    /// and `notice` is surfaced to the user.
    Reverted { notice: Notice },
}

/// State machine for the background activation toggle.
///
/// At most one request is outstanding per control. While a request is in
/// flight the control optimistically shows the desired state; the backing
/// state only changes when the request resolves successfully.
///
/// # Example
///
/// ```
/// use shopadmin::{StatusToggle, ToggleOutcome, ToggleResolution};
///
/// let mut toggle = StatusToggle::new(true);
/// let request = toggle.request(false).unwrap();
/// assert!(!toggle.displayed());
///
/// // transport posts `request.desired`, server says no
/// let resolution = toggle
///     .resolve(ToggleOutcome::Rejected { reason: Some("locked".into()) })
///     .unwrap();
/// assert!(toggle.displayed());
/// assert!(matches!(resolution, ToggleResolution::Reverted { .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusToggle {
    active: bool,
    pending: Option<bool>,
}

impl StatusToggle {
    #[must_use]
    pub fn new(active: bool) -> Self {
        Self {
            active,
            pending: None,
        }
    }

    /// The confirmed backing state.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// What the control should show: the in-flight desired state while a
    /// request is pending, otherwise the backing state.
    #[must_use]
    pub fn displayed(&self) -> bool {
        self.pending.unwrap_or(self.active)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Begin a toggle interaction.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::RequestInFlight`] if an earlier request has
    /// not resolved yet.
    pub fn request(&mut self, desired: bool) -> Result<ToggleRequest, ToggleError> {
        if self.pending.is_some() {
            return Err(ToggleError::RequestInFlight);
        }
        self.pending = Some(desired);
        Ok(ToggleRequest { desired })
    }

    /// Apply the request's terminal outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::NoRequestInFlight`] if nothing is pending.
    pub fn resolve(&mut self, outcome: ToggleOutcome) -> Result<ToggleResolution, ToggleError> {
        let desired = self.pending.take().ok_or(ToggleError::NoRequestInFlight)?;
        Ok(match outcome {
            ToggleOutcome::Accepted => {
                self.active = desired;
                ToggleResolution::Applied { active: desired }
            }
            ToggleOutcome::Rejected { reason } => ToggleResolution::Reverted {
                notice: Notice::rejection(reason),
            },
        })
    }
}
