use chrono::NaiveDate;

use crate::model::{EntityId, Grade, NewGrade};
use crate::store::grade::GradeIntent;

use super::{required, FormError};

pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 100;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeField {
    Subject,
    Score,
    Date,
}

impl GradeField {
    pub const ALL: [GradeField; 3] = [GradeField::Subject, GradeField::Score, GradeField::Date];

    pub fn label(self) -> &'static str {
        match self {
            GradeField::Subject => "Subject",
            GradeField::Score => "Score",
            GradeField::Date => "Date",
        }
    }
}

/// Add/edit form for a grade of one student.
///
/// `student_id` is fixed when the form is created and never edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeForm {
    pub id: Option<EntityId>,
    pub student_id: EntityId,
    pub subject: String,
    pub score: String,
    pub grade_date: String,
}

impl GradeForm {
    /// Empty form for a new grade dated `today`.
    pub fn new(student_id: EntityId, today: NaiveDate) -> Self {
        Self {
            id: None,
            student_id,
            subject: String::new(),
            score: String::new(),
            grade_date: today.format(DATE_FORMAT).to_string(),
        }
    }

    /// Form pre-filled from an existing grade (edit mode).
    pub fn from_grade(grade: &Grade) -> Self {
        Self {
            id: Some(grade.id),
            student_id: grade.student_id,
            subject: grade.subject.clone(),
            score: grade.score.to_string(),
            grade_date: grade.grade_date.format(DATE_FORMAT).to_string(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn value(&self, field: GradeField) -> &str {
        match field {
            GradeField::Subject => &self.subject,
            GradeField::Score => &self.score,
            GradeField::Date => &self.grade_date,
        }
    }

    pub fn value_mut(&mut self, field: GradeField) -> &mut String {
        match field {
            GradeField::Subject => &mut self.subject,
            GradeField::Score => &mut self.score,
            GradeField::Date => &mut self.grade_date,
        }
    }

    /// Validate and build `Add` (no id) or `Update` (edit mode).
    pub fn submit(&self) -> Result<GradeIntent, Vec<FormError>> {
        let mut errors = Vec::new();
        let subject = required(GradeField::Subject.label(), &self.subject, &mut errors);
        let score = parse_score(&self.score, &mut errors);
        let grade_date = parse_date(&self.grade_date, &mut errors);

        let (Some(score), Some(grade_date)) = (score, grade_date) else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        let draft = NewGrade {
            student_id: self.student_id,
            subject,
            score,
            grade_date,
        };
        Ok(match self.id {
            Some(id) => GradeIntent::Update {
                grade: draft.with_id(id),
            },
            None => GradeIntent::Add { grade: draft },
        })
    }
}

fn parse_score(raw: &str, errors: &mut Vec<FormError>) -> Option<f64> {
    let field = GradeField::Score.label();
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push(FormError::Required { field });
        return None;
    }
    let Ok(score) = raw.parse::<f64>() else {
        errors.push(FormError::NotANumber { field });
        return None;
    };
    if !score.is_finite() {
        errors.push(FormError::NotANumber { field });
        return None;
    }
    if score < MIN_SCORE as f64 || score > MAX_SCORE as f64 {
        errors.push(FormError::OutOfRange {
            field,
            min: MIN_SCORE,
            max: MAX_SCORE,
        });
        return None;
    }
    Some(score)
}

fn parse_date(raw: &str, errors: &mut Vec<FormError>) -> Option<NaiveDate> {
    let field = GradeField::Date.label();
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push(FormError::Required { field });
        return None;
    }
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(FormError::InvalidDate { field });
            None
        }
    }
}
