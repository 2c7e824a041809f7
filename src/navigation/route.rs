use std::fmt;

use crate::model::EntityId;

/// Client-side navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    StudentList,
    AddStudent,
    EditStudent { id: EntityId },
    StudentGrades { student_id: EntityId },
}

impl Route {
    /// Parse a path such as `/students/4/grades`.
    ///
    /// Anything that does not match a known route redirects to the list.
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path
            .trim()
            .trim_matches('/')
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            ["students"] => Route::StudentList,
            ["students", "add"] => Route::AddStudent,
            ["students", "edit", id] => match id.parse() {
                Ok(id) => Route::EditStudent { id },
                Err(_) => Route::StudentList,
            },
            ["students", id, "grades"] => match id.parse() {
                Ok(student_id) => Route::StudentGrades { student_id },
                Err(_) => Route::StudentList,
            },
            _ => Route::StudentList,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::StudentList => "/students".to_string(),
            Route::AddStudent => "/students/add".to_string(),
            Route::EditStudent { id } => format!("/students/edit/{}", id),
            Route::StudentGrades { student_id } => format!("/students/{}/grades", student_id),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::StudentList => "Students",
            Route::AddStudent => "Add student",
            Route::EditStudent { .. } => "Edit student",
            Route::StudentGrades { .. } => "Grades",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::parse("/students"), Route::StudentList);
        assert_eq!(Route::parse("/students/add"), Route::AddStudent);
        assert_eq!(Route::parse("/students/edit/7"), Route::EditStudent { id: 7 });
        assert_eq!(
            Route::parse("/students/4/grades"),
            Route::StudentGrades { student_id: 4 }
        );
    }

    #[test]
    fn empty_and_unknown_paths_redirect_to_list() {
        assert_eq!(Route::parse(""), Route::StudentList);
        assert_eq!(Route::parse("/"), Route::StudentList);
        assert_eq!(Route::parse("/teachers"), Route::StudentList);
        assert_eq!(Route::parse("/students/edit/abc"), Route::StudentList);
    }

    #[test]
    fn path_round_trips() {
        for route in [
            Route::StudentList,
            Route::AddStudent,
            Route::EditStudent { id: 12 },
            Route::StudentGrades { student_id: 3 },
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(Route::parse("students/add/"), Route::AddStudent);
    }
}
