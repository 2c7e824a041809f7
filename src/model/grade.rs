use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Entity, EntityId};

/// A persisted grade. `grade_date` is a calendar date without time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub id: EntityId,
    pub student_id: EntityId,
    pub subject: String,
    pub score: f64,
    pub grade_date: NaiveDate,
}

impl Entity for Grade {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// A grade draft. The backend assigns the id on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGrade {
    pub student_id: EntityId,
    pub subject: String,
    pub score: f64,
    pub grade_date: NaiveDate,
}

impl NewGrade {
    pub fn with_id(self, id: EntityId) -> Grade {
        Grade {
            id,
            student_id: self.student_id,
            subject: self.subject,
            score: self.score,
            grade_date: self.grade_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_date_serializes_as_iso_date() {
        let grade = Grade {
            id: 1,
            student_id: 4,
            subject: "Math".into(),
            score: 95.0,
            grade_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        };
        let json = serde_json::to_value(&grade).unwrap();
        assert_eq!(json["gradeDate"], "2024-01-10");
        assert_eq!(json["studentId"], 4);
    }

    #[test]
    fn grade_parses_backend_payload() {
        let grade: Grade = serde_json::from_str(
            r#"{"id":3,"studentId":4,"subject":"Math","score":95,"gradeDate":"2024-01-10"}"#,
        )
        .unwrap();
        assert_eq!(grade.id, 3);
        assert_eq!(grade.score, 95.0);
        assert_eq!(grade.grade_date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
    }
}
