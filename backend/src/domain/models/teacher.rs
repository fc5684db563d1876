use chrono::NaiveDate;
use shared::TeacherFields;

pub const MAX_NAME_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TeacherValidationError {
    #[error("Full name cannot be empty")]
    EmptyName,
    #[error("Full name cannot exceed 100 characters")]
    NameTooLong,
    #[error("Date of birth {0} is in the future")]
    DateOfBirthInFuture(NaiveDate),
    #[error("Number of classes cannot be negative")]
    NegativeNumberOfClasses,
    #[error("Age cannot be negative")]
    NegativeAge,
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

/// Check the write-time invariants of a teacher record as of `today`
pub fn validate_fields(
    fields: &TeacherFields,
    today: NaiveDate,
) -> Result<(), TeacherValidationError> {
    if fields.full_name.trim().is_empty() {
        return Err(TeacherValidationError::EmptyName);
    }
    if fields.full_name.chars().count() > MAX_NAME_LENGTH {
        return Err(TeacherValidationError::NameTooLong);
    }
    if fields.date_of_birth > today {
        return Err(TeacherValidationError::DateOfBirthInFuture(fields.date_of_birth));
    }
    if fields.number_of_classes < 0 {
        return Err(TeacherValidationError::NegativeNumberOfClasses);
    }
    if fields.age < 0 {
        return Err(TeacherValidationError::NegativeAge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn fields() -> TeacherFields {
        TeacherFields {
            full_name: "Ada Lovelace".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 12, 10).unwrap(),
            number_of_classes: 3,
            age: 33,
        }
    }

    #[test]
    fn test_valid_fields() {
        assert_eq!(validate_fields(&fields(), today()), Ok(()));
    }

    #[test]
    fn test_zero_classes_and_born_today_are_valid() {
        let fields = TeacherFields {
            number_of_classes: 0,
            date_of_birth: today(),
            age: 0,
            ..fields()
        };
        assert_eq!(validate_fields(&fields, today()), Ok(()));
    }

    #[test]
    fn test_blank_name() {
        for name in ["", "   ", "\t"] {
            let fields = TeacherFields { full_name: name.to_string(), ..fields() };
            assert_eq!(
                validate_fields(&fields, today()),
                Err(TeacherValidationError::EmptyName)
            );
        }
    }

    #[test]
    fn test_name_length_limit() {
        let at_limit = TeacherFields { full_name: "a".repeat(MAX_NAME_LENGTH), ..fields() };
        assert!(validate_fields(&at_limit, today()).is_ok());

        let over = TeacherFields { full_name: "a".repeat(MAX_NAME_LENGTH + 1), ..fields() };
        assert_eq!(
            validate_fields(&over, today()),
            Err(TeacherValidationError::NameTooLong)
        );
    }

    #[test]
    fn test_future_date_of_birth() {
        let tomorrow = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap();
        let fields = TeacherFields { date_of_birth: tomorrow, ..fields() };
        assert_eq!(
            validate_fields(&fields, today()),
            Err(TeacherValidationError::DateOfBirthInFuture(tomorrow))
        );
    }

    #[test]
    fn test_negative_numbers() {
        let fields_neg_classes = TeacherFields { number_of_classes: -1, ..fields() };
        assert_eq!(
            validate_fields(&fields_neg_classes, today()),
            Err(TeacherValidationError::NegativeNumberOfClasses)
        );

        let fields_neg_age = TeacherFields { age: -1, ..fields() };
        assert_eq!(
            validate_fields(&fields_neg_age, today()),
            Err(TeacherValidationError::NegativeAge)
        );
    }
}
