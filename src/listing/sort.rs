// ABOUTME: Single-column sort state for the job listing
// ABOUTME: Same column toggles ascending/descending, a new column starts ascending

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::remote::JobRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Title,
    MinSalary,
    Location,
    Category,
    WorkYear,
}

impl SortKey {
    /// Compare two records on this column. Missing salaries count as 0; other
    /// missing values sort before present ones.
    pub fn compare(self, a: &JobRecord, b: &JobRecord) -> Ordering {
        match self {
            SortKey::Id => a.job_id.cmp(&b.job_id),
            SortKey::Title => a.job_title.cmp(&b.job_title),
            SortKey::MinSalary => a.min_salary.unwrap_or(0).cmp(&b.min_salary.unwrap_or(0)),
            SortKey::Location => a.location.cmp(&b.location),
            SortKey::Category => a.job_category.cmp(&b.job_category),
            SortKey::WorkYear => a.work_year.cmp(&b.work_year),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" | "job_id" => Ok(SortKey::Id),
            "title" | "job_title" => Ok(SortKey::Title),
            "salary" | "min_salary" => Ok(SortKey::MinSalary),
            "location" => Ok(SortKey::Location),
            "category" | "job_category" => Ok(SortKey::Category),
            "year" | "work_year" => Ok(SortKey::WorkYear),
            other => Err(format!(
                "unknown sort column '{}' (expected id, title, salary, location, category, year)",
                other
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SortKey::Id => "id",
            SortKey::Title => "title",
            SortKey::MinSalary => "salary",
            SortKey::Location => "location",
            SortKey::Category => "category",
            SortKey::WorkYear => "year",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortState {
    /// Activate a column header.
    pub fn activate(&mut self, key: SortKey) {
        self.direction = if self.key == Some(key) && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.key = Some(key);
    }

    /// Ordering of two records under the active column and direction.
    /// Everything compares equal when no column is active.
    pub fn compare(&self, a: &JobRecord, b: &JobRecord) -> Ordering {
        match (self.key, self.direction) {
            (None, _) => Ordering::Equal,
            (Some(key), SortDirection::Ascending) => key.compare(a, b),
            (Some(key), SortDirection::Descending) => key.compare(b, a),
        }
    }

    /// Header marker, e.g. `salary ↑`.
    pub fn label(&self) -> Option<String> {
        self.key.map(|key| {
            let arrow = match self.direction {
                SortDirection::Ascending => '↑',
                SortDirection::Descending => '↓',
            };
            format!("{} {}", key, arrow)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::job;

    fn apply(state: &SortState, rows: &mut [&JobRecord]) {
        rows.sort_by(|a, b| state.compare(a, b));
    }

    fn ids(rows: &[&JobRecord]) -> Vec<i64> {
        rows.iter().map(|r| r.job_id).collect()
    }

    #[test]
    fn test_toggle_same_key_then_reset_on_new_key() {
        let mut state = SortState::default();
        state.activate(SortKey::MinSalary);
        assert_eq!(state.direction, SortDirection::Ascending);
        state.activate(SortKey::MinSalary);
        assert_eq!(state.direction, SortDirection::Descending);
        state.activate(SortKey::Title);
        assert_eq!(state.key, Some(SortKey::Title));
        assert_eq!(state.direction, SortDirection::Ascending);
        assert_eq!(state.label().as_deref(), Some("title ↑"));
    }

    #[test]
    fn test_second_activation_reverses_order() {
        let records = vec![
            job(1, "b", 2021, Some(300)),
            job(2, "a", 2022, Some(100)),
            job(3, "c", 2023, Some(200)),
        ];
        let mut rows: Vec<&JobRecord> = records.iter().collect();
        let mut state = SortState::default();

        state.activate(SortKey::MinSalary);
        apply(&state, &mut rows);
        let first = ids(&rows);
        assert_eq!(first, vec![2, 3, 1]);

        state.activate(SortKey::MinSalary);
        apply(&state, &mut rows);
        let mut reversed = first.clone();
        reversed.reverse();
        assert_eq!(ids(&rows), reversed);
    }

    #[test]
    fn test_missing_salary_sorts_as_zero() {
        let records = vec![
            job(1, "a", 2021, Some(10)),
            job(2, "b", 2021, None),
            job(3, "c", 2021, Some(-5)),
        ];
        let mut rows: Vec<&JobRecord> = records.iter().collect();
        let mut state = SortState::default();
        state.activate(SortKey::MinSalary);
        apply(&state, &mut rows);
        assert_eq!(ids(&rows), vec![3, 2, 1]);
    }

    #[test]
    fn test_parse_sort_key() {
        assert_eq!("salary".parse::<SortKey>(), Ok(SortKey::MinSalary));
        assert_eq!("JOB_TITLE".parse::<SortKey>(), Ok(SortKey::Title));
        assert!("colour".parse::<SortKey>().is_err());
    }
}
