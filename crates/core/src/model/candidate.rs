use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CandidateError {
    #[error("candidate name cannot be empty")]
    EmptyName,

    #[error("candidate email cannot be empty")]
    EmptyEmail,
}

/// Contact details collected on the landing screen.
///
/// Both fields are stored trimmed. Nothing beyond non-emptiness is
/// checked; the intake form never validated email shape either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    name: String,
    email: String,
}

impl Candidate {
    /// Create a validated candidate record.
    ///
    /// # Errors
    ///
    /// Returns `CandidateError::EmptyName` or `CandidateError::EmptyEmail`
    /// if the respective field is empty after trimming.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, CandidateError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(CandidateError::EmptyName);
        }

        let email = email.into();
        let email = email.trim();
        if email.is_empty() {
            return Err(CandidateError::EmptyEmail);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_both_fields() {
        let candidate = Candidate::new("  Ada Lovelace ", " ada@example.com  ").unwrap();
        assert_eq!(candidate.name(), "Ada Lovelace");
        assert_eq!(candidate.email(), "ada@example.com");
    }

    #[test]
    fn rejects_blank_name() {
        let err = Candidate::new("   ", "ada@example.com").unwrap_err();
        assert_eq!(err, CandidateError::EmptyName);
    }

    #[test]
    fn rejects_blank_email() {
        let err = Candidate::new("Ada", "\t").unwrap_err();
        assert_eq!(err, CandidateError::EmptyEmail);
    }

    #[test]
    fn does_not_validate_email_shape() {
        assert!(Candidate::new("Ada", "not-an-email").is_ok());
    }
}
