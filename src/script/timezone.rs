//! System timezone.

/// Set the system timezone to `tz` (an IANA identifier, not validated).
#[must_use]
pub fn timezone(tz: &str) -> String {
    format!("timedatectl set-timezone {tz}")
}
