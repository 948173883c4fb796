//! Reducer-style edits over `FormInput`

use super::field::FieldId;
use crate::card::{CardType, FormInput};

/// One discrete change to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEdit {
    SetCardType(CardType),
    NextCardType,
    PrevCardType,
    PushChar(FieldId, char),
    PopChar(FieldId),
    Clear(FieldId),
}

/// Apply one edit, returning the new input. Never touches fields the edit
/// does not name, so switching card type keeps a stored number or tag.
pub fn reduce(input: FormInput, edit: FormEdit) -> FormInput {
    let mut next = input;
    match edit {
        FormEdit::SetCardType(card_type) => next.card_type = card_type,
        FormEdit::NextCardType => next.card_type = next.card_type.next(),
        FormEdit::PrevCardType => next.card_type = next.card_type.prev(),
        FormEdit::PushChar(field, c) => push_char(&mut next, field, c),
        FormEdit::PopChar(field) => pop_char(&mut next, field),
        FormEdit::Clear(field) => match field {
            FieldId::CardType => {}
            FieldId::User => next.user.clear(),
            FieldId::Repo => next.repo.clear(),
            FieldId::Number => next.num = None,
            FieldId::Tag => next.tag = None,
        },
    }
    next
}

fn push_char(input: &mut FormInput, field: FieldId, c: char) {
    match field {
        FieldId::CardType => {}
        FieldId::User => input.user.push(c),
        FieldId::Repo => input.repo.push(c),
        FieldId::Number => {
            if let Some(d) = c.to_digit(10) {
                let current = input.num.unwrap_or(0);
                // Overflowing input is dropped
                if let Some(n) = current
                    .checked_mul(10)
                    .and_then(|n| n.checked_add(u64::from(d)))
                {
                    input.num = Some(n);
                }
            }
        }
        FieldId::Tag => input.tag.get_or_insert_with(String::new).push(c),
    }
}

fn pop_char(input: &mut FormInput, field: FieldId) {
    match field {
        FieldId::CardType => {}
        FieldId::User => {
            input.user.pop();
        }
        FieldId::Repo => {
            input.repo.pop();
        }
        FieldId::Number => {
            input.num = input.num.map(|n| n / 10).filter(|n| *n > 0);
        }
        FieldId::Tag => {
            if let Some(tag) = input.tag.as_mut() {
                tag.pop();
                if tag.is_empty() {
                    input.tag = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(input: FormInput, field: FieldId, text: &str) -> FormInput {
        text.chars()
            .fold(input, |acc, c| reduce(acc, FormEdit::PushChar(field, c)))
    }

    #[test]
    fn test_typing_into_text_fields() {
        let input = type_text(FormInput::default(), FieldId::User, "octocat");
        let input = type_text(input, FieldId::Repo, "Hello-World");
        assert_eq!(input.user, "octocat");
        assert_eq!(input.repo, "Hello-World");
    }

    #[test]
    fn test_number_builds_from_digits() {
        let input = type_text(FormInput::default(), FieldId::Number, "1a2");
        assert_eq!(input.num, Some(12));
    }

    #[test]
    fn test_number_overflow_is_ignored() {
        let input = FormInput {
            num: Some(u64::MAX),
            ..Default::default()
        };
        let input = reduce(input, FormEdit::PushChar(FieldId::Number, '9'));
        assert_eq!(input.num, Some(u64::MAX));
    }

    #[test]
    fn test_pop_number_to_none() {
        let input = type_text(FormInput::default(), FieldId::Number, "42");
        let input = reduce(input, FormEdit::PopChar(FieldId::Number));
        assert_eq!(input.num, Some(4));
        let input = reduce(input, FormEdit::PopChar(FieldId::Number));
        assert_eq!(input.num, None);
    }

    #[test]
    fn test_pop_tag_to_none() {
        let input = type_text(FormInput::default(), FieldId::Tag, "v");
        assert_eq!(input.tag.as_deref(), Some("v"));
        let input = reduce(input, FormEdit::PopChar(FieldId::Tag));
        assert_eq!(input.tag, None);
    }

    #[test]
    fn test_switching_type_keeps_number_and_tag() {
        let input = type_text(FormInput::with_card_type(CardType::Issue), FieldId::Number, "5");
        let input = type_text(input, FieldId::Tag, "v1");
        let input = reduce(input, FormEdit::SetCardType(CardType::Repository));
        assert_eq!(input.card_type, CardType::Repository);
        assert_eq!(input.num, Some(5));
        assert_eq!(input.tag.as_deref(), Some("v1"));
    }

    #[test]
    fn test_cycle_card_type() {
        let input = reduce(FormInput::default(), FormEdit::NextCardType);
        assert_eq!(input.card_type, CardType::Issue);
        let input = reduce(input, FormEdit::PrevCardType);
        let input = reduce(input, FormEdit::PrevCardType);
        assert_eq!(input.card_type, CardType::Release);
    }

    #[test]
    fn test_clear_field() {
        let input = type_text(FormInput::default(), FieldId::User, "octocat");
        let input = reduce(input, FormEdit::Clear(FieldId::User));
        assert!(input.user.is_empty());
    }

    #[test]
    fn test_card_type_field_ignores_text() {
        let before = FormInput::default();
        let after = reduce(before.clone(), FormEdit::PushChar(FieldId::CardType, 'x'));
        assert_eq!(before, after);
    }
}
