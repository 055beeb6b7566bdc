//! In-memory filtering for the people directory.

use crate::models::people::{Employee, EmployeeStatus};

/// Criteria applied to the employee list. `search` is a case-insensitive
/// substring match over name, email, and employee code; the remaining
/// criteria are exact matches, disabled while `None` ("All").
#[derive(Debug, Clone, Default)]
pub struct DirectoryFilter {
    pub search: String,
    pub status: Option<EmployeeStatus>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub classification: Option<String>,
}

impl DirectoryFilter {
    pub fn matches(&self, employee: &Employee) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = employee.name.to_lowercase().contains(&needle)
                || employee.email.to_lowercase().contains(&needle)
                || employee.emp_code.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        if let Some(status) = self.status {
            if employee.status != status {
                return false;
            }
        }
        if let Some(ref role) = self.role {
            if employee.role != *role {
                return false;
            }
        }
        if let Some(ref department) = self.department {
            if employee.department != *department {
                return false;
            }
        }
        if let Some(ref classification) = self.classification {
            if employee.classification != *classification {
                return false;
            }
        }

        true
    }

    pub fn apply<'a>(&self, employees: &'a [Employee]) -> Vec<&'a Employee> {
        employees.iter().filter(|e| self.matches(e)).collect()
    }
}

/// Distinct values of one employee field, sorted, for filter dropdowns.
pub fn distinct_values<F>(employees: &[Employee], field: F) -> Vec<String>
where
    F: Fn(&Employee) -> &str,
{
    employees
        .iter()
        .map(|e| field(e).to_string())
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(name: &str, email: &str, code: &str, role: &str, status: EmployeeStatus) -> Employee {
        Employee {
            emp_code: code.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            department: "CSE".to_string(),
            classification: "ENG".to_string(),
            status,
        }
    }

    fn roster() -> Vec<Employee> {
        vec![
            employee("Aryan Rawat", "aryan@example.com", "INT-006", "Programming", EmployeeStatus::Active),
            employee("Jaspreet Kaur", "jaspreet@example.com", "INT-001", "Drafting", EmployeeStatus::Active),
            employee("try", "asing1@example.com", "Try001", "—", EmployeeStatus::Inactive),
        ]
    }

    #[test]
    fn test_empty_filter_matches_everyone() {
        let roster = roster();
        assert_eq!(DirectoryFilter::default().apply(&roster).len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let roster = roster();
        let filter = DirectoryFilter {
            search: "ARYAN".to_string(),
            ..Default::default()
        };
        let matched = filter.apply(&roster);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Aryan Rawat");
    }

    #[test]
    fn test_search_covers_code_and_email() {
        let roster = roster();
        let by_code = DirectoryFilter {
            search: "try001".to_string(),
            ..Default::default()
        };
        assert_eq!(by_code.apply(&roster).len(), 1);

        let by_email = DirectoryFilter {
            search: "jaspreet@".to_string(),
            ..Default::default()
        };
        assert_eq!(by_email.apply(&roster).len(), 1);
    }

    #[test]
    fn test_criteria_combine() {
        let roster = roster();
        let filter = DirectoryFilter {
            status: Some(EmployeeStatus::Active),
            role: Some("Drafting".to_string()),
            ..Default::default()
        };
        let matched = filter.apply(&roster);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Jaspreet Kaur");
    }

    #[test]
    fn test_status_filter() {
        let roster = roster();
        let filter = DirectoryFilter {
            status: Some(EmployeeStatus::Inactive),
            ..Default::default()
        };
        assert_eq!(filter.apply(&roster).len(), 1);
    }

    #[test]
    fn test_distinct_values_sorted() {
        let roster = roster();
        let roles = distinct_values(&roster, |e| e.role.as_str());
        assert_eq!(roles, vec!["Drafting", "Programming", "—"]);
    }
}
