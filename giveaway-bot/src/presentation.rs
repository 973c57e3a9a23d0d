//! Single place deciding the user-facing text for handler failures.
//!
//! Internal failure details stay in the logs; the user only ever sees the
//! notices below.

use crate::core::{ContestError, GiveawayError};

/// Maps a dispatch error to the notice shown to the end user.
pub fn notice(err: &GiveawayError) -> &'static str {
    match err {
        GiveawayError::Contest(ContestError::AlreadyActive) => "⚠️ A contest is already active",
        GiveawayError::Contest(ContestError::NoneActive) => "⚠️ No active contest",
        GiveawayError::Contest(ContestError::Unauthorized) => "❌ Access denied",
        GiveawayError::Contest(ContestError::MalformedPayload(_))
        | GiveawayError::Storage(_)
        | GiveawayError::Transport(_)
        | GiveawayError::Config(_) => "Something went wrong, please try again",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_notices() {
        assert_eq!(
            notice(&ContestError::AlreadyActive.into()),
            "⚠️ A contest is already active"
        );
        assert_eq!(
            notice(&ContestError::NoneActive.into()),
            "⚠️ No active contest"
        );
        assert_eq!(
            notice(&ContestError::Unauthorized.into()),
            "❌ Access denied"
        );
    }

    #[test]
    fn test_internal_details_are_not_echoed() {
        let err: GiveawayError =
            ContestError::MalformedPayload("expected ident at line 1 column 2".to_string()).into();
        let text = notice(&err);
        assert!(!text.contains("line 1"));
        assert!(!text.contains("ident"));

        let err = GiveawayError::Transport("connection refused to api.telegram.org".to_string());
        assert!(!notice(&err).contains("api.telegram.org"));
    }
}
