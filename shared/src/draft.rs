//! Form state for creating or editing a teacher.

use chrono::NaiveDate;

use crate::{derive_age, Teacher, TeacherFields};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// What the user has typed so far, kept as raw strings.
///
/// `age` follows the date of birth: every date edit re-derives it, so the
/// submitted record always carries an age consistent with its birth date.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TeacherDraft {
    pub full_name: String,
    pub date_of_birth: String,
    pub number_of_classes: String,
    pub age: Option<i64>,
}

impl TeacherDraft {
    /// Pre-fill from a stored record (edit form)
    pub fn from_teacher(teacher: &Teacher) -> Self {
        Self {
            full_name: teacher.full_name.clone(),
            date_of_birth: teacher.date_of_birth.format(DATE_FORMAT).to_string(),
            number_of_classes: teacher.number_of_classes.to_string(),
            age: Some(teacher.age),
        }
    }

    pub fn with_full_name(&self, value: impl Into<String>) -> Self {
        Self {
            full_name: value.into(),
            ..self.clone()
        }
    }

    pub fn with_number_of_classes(&self, value: impl Into<String>) -> Self {
        Self {
            number_of_classes: value.into(),
            ..self.clone()
        }
    }

    /// Set the date of birth and re-derive the age as of `today`.
    /// An empty or unparseable date clears the age.
    pub fn with_date_of_birth(&self, value: impl Into<String>, today: NaiveDate) -> Self {
        let date_of_birth = value.into();
        let age = parse_date(&date_of_birth).map(|dob| derive_age(dob, today));
        Self {
            date_of_birth,
            age,
            ..self.clone()
        }
    }

    /// Parse into request fields, or return a message for the user
    pub fn to_fields(&self, today: NaiveDate) -> Result<TeacherFields, String> {
        if self.full_name.trim().is_empty() {
            return Err("Please enter the teacher's name".to_string());
        }

        let date_of_birth = parse_date(&self.date_of_birth)
            .ok_or_else(|| "Please enter a date of birth in YYYY-MM-DD format".to_string())?;
        if date_of_birth > today {
            return Err("Date of birth cannot be in the future".to_string());
        }

        let number_of_classes: i64 = self
            .number_of_classes
            .trim()
            .parse()
            .map_err(|_| "Number of classes must be a whole number".to_string())?;
        if number_of_classes < 0 {
            return Err("Number of classes cannot be negative".to_string());
        }

        Ok(TeacherFields {
            full_name: self.full_name.clone(),
            date_of_birth,
            number_of_classes,
            age: self.age.unwrap_or_else(|| derive_age(date_of_birth, today)),
        })
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn filled() -> TeacherDraft {
        TeacherDraft::default()
            .with_full_name("Grace Hopper")
            .with_date_of_birth("2000-06-16", today())
            .with_number_of_classes("3")
    }

    #[test]
    fn test_date_edit_derives_age() {
        let draft = TeacherDraft::default().with_date_of_birth("2000-06-15", today());
        assert_eq!(draft.age, Some(24));

        let draft = draft.with_date_of_birth("2000-06-16", today());
        assert_eq!(draft.age, Some(23));
    }

    #[test]
    fn test_invalid_date_clears_age() {
        let draft = filled().with_date_of_birth("not-a-date", today());
        assert_eq!(draft.age, None);

        let draft = filled().with_date_of_birth("", today());
        assert_eq!(draft.age, None);
    }

    #[test]
    fn test_to_fields() {
        let fields = filled().to_fields(today()).unwrap();

        assert_eq!(fields.full_name, "Grace Hopper");
        assert_eq!(fields.date_of_birth, NaiveDate::from_ymd_opt(2000, 6, 16).unwrap());
        assert_eq!(fields.number_of_classes, 3);
        assert_eq!(fields.age, 23);
    }

    #[test]
    fn test_to_fields_rejects_bad_input() {
        assert!(filled().with_full_name("   ").to_fields(today()).is_err());
        assert!(filled().with_number_of_classes("-1").to_fields(today()).is_err());
        assert!(filled().with_number_of_classes("two").to_fields(today()).is_err());
        assert!(filled()
            .with_date_of_birth("2024-06-16", today())
            .to_fields(today())
            .is_err());
        assert!(filled()
            .with_date_of_birth("15/06/2000", today())
            .to_fields(today())
            .is_err());
    }

    #[test]
    fn test_failed_parse_leaves_draft_untouched() {
        let draft = filled().with_number_of_classes("x");
        let before = draft.clone();

        assert!(draft.to_fields(today()).is_err());
        assert_eq!(draft, before);
    }

    #[test]
    fn test_from_teacher_keeps_stored_age_until_date_changes() {
        let teacher = Teacher {
            id: "t-9".to_string(),
            full_name: "Alan Turing".to_string(),
            age: 40,
            date_of_birth: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
            number_of_classes: 2,
        };

        let draft = TeacherDraft::from_teacher(&teacher);
        assert_eq!(draft.date_of_birth, "1980-01-01");
        assert_eq!(draft.number_of_classes, "2");
        assert_eq!(draft.to_fields(today()).unwrap().age, 40);

        let redated = draft.with_date_of_birth("1980-01-01", today());
        assert_eq!(redated.to_fields(today()).unwrap().age, 44);
    }
}
