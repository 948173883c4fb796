//! Form validation

use super::types::{Detail, FormInput, Requirement, ValidatedInput};
use thiserror::Error;

/// Reason a form cannot produce a card yet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("User and repository are required")]
    MissingIdentity,

    #[error("Number is required for this type")]
    MissingNumber,

    #[error("Tag is required for releases")]
    MissingTag,
}

/// Check the fields the selected card type needs. The first failing rule wins.
pub fn validate(input: &FormInput) -> Result<ValidatedInput, ValidationError> {
    let user = input.user.trim();
    let repo = input.repo.trim();
    if user.is_empty() || repo.is_empty() {
        return Err(ValidationError::MissingIdentity);
    }

    let detail = match input.card_type.requirement() {
        Requirement::None => Detail::None,
        Requirement::Number => match input.num {
            Some(n) if n > 0 => Detail::Number(n),
            _ => return Err(ValidationError::MissingNumber),
        },
        Requirement::Tag => match input.tag.as_deref().map(str::trim) {
            Some(tag) if !tag.is_empty() => Detail::Tag(tag.to_string()),
            _ => return Err(ValidationError::MissingTag),
        },
    };

    Ok(ValidatedInput {
        card_type: input.card_type,
        user: user.to_string(),
        repo: repo.to_string(),
        detail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardType;

    fn input(card_type: CardType) -> FormInput {
        FormInput {
            card_type,
            user: "octocat".to_string(),
            repo: "Hello-World".to_string(),
            num: None,
            tag: None,
        }
    }

    #[test]
    fn test_repository_needs_only_identity() {
        let validated = validate(&input(CardType::Repository)).unwrap();
        assert_eq!(validated.detail, Detail::None);
        assert_eq!(validated.user, "octocat");
        assert_eq!(validated.repo, "Hello-World");
    }

    #[test]
    fn test_missing_user_or_repo() {
        let mut form = input(CardType::Repository);
        form.user.clear();
        assert_eq!(validate(&form), Err(ValidationError::MissingIdentity));

        let mut form = input(CardType::Repository);
        form.repo = "  ".to_string();
        assert_eq!(validate(&form), Err(ValidationError::MissingIdentity));
    }

    #[test]
    fn test_identity_rule_wins_over_number_rule() {
        let form = FormInput::with_card_type(CardType::Issue);
        assert_eq!(validate(&form), Err(ValidationError::MissingIdentity));
    }

    #[test]
    fn test_number_types_fail_iff_number_absent() {
        for card_type in [CardType::Issue, CardType::PullRequest, CardType::Discussion] {
            let mut form = input(card_type);
            assert_eq!(validate(&form), Err(ValidationError::MissingNumber));

            form.num = Some(0);
            assert_eq!(validate(&form), Err(ValidationError::MissingNumber));

            form.num = Some(42);
            let validated = validate(&form).unwrap();
            assert_eq!(validated.detail, Detail::Number(42));
        }
    }

    #[test]
    fn test_release_fails_iff_tag_absent() {
        let mut form = input(CardType::Release);
        assert_eq!(validate(&form), Err(ValidationError::MissingTag));

        form.tag = Some("   ".to_string());
        assert_eq!(validate(&form), Err(ValidationError::MissingTag));

        form.tag = Some(" v1.0.0 ".to_string());
        let validated = validate(&form).unwrap();
        assert_eq!(validated.detail, Detail::Tag("v1.0.0".to_string()));
    }

    #[test]
    fn test_irrelevant_fields_are_ignored() {
        let mut form = input(CardType::Repository);
        form.num = Some(7);
        form.tag = Some("v2".to_string());
        assert_eq!(validate(&form).unwrap().detail, Detail::None);

        let mut form = input(CardType::Release);
        form.num = Some(7);
        assert_eq!(validate(&form), Err(ValidationError::MissingTag));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::MissingIdentity.to_string(),
            "User and repository are required"
        );
        assert_eq!(
            ValidationError::MissingNumber.to_string(),
            "Number is required for this type"
        );
        assert_eq!(
            ValidationError::MissingTag.to_string(),
            "Tag is required for releases"
        );
    }
}
