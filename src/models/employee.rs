//! Employee model.
//!
//! This module defines the Employee struct representing a rostered worker
//! eligible for attendance and payroll processing.

use serde::{Deserialize, Serialize};

/// Represents an employee on the roster.
///
/// Employees are immutable reference data: they are created when the roster
/// is loaded and are never mutated or removed during a session.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Employee;
///
/// let employee = Employee::new(1, "Lee Chae-hyun", "Youngjin Pack");
/// assert_eq!(employee.id, 1);
/// assert_eq!(employee.department, "Youngjin Pack");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    /// Unique, stable identifier for the employee.
    pub id: u32,
    /// The employee's display name.
    pub name: String,
    /// The department the employee is assigned to.
    #[serde(alias = "dept")]
    pub department: String,
}

impl Employee {
    /// Creates a new employee record.
    pub fn new(id: u32, name: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": 4,
            "name": "Kim Su-bin",
            "department": "Youngjin Pack"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, 4);
        assert_eq!(employee.name, "Kim Su-bin");
        assert_eq!(employee.department, "Youngjin Pack");
    }

    #[test]
    fn test_deserialize_accepts_dept_alias() {
        let json = r#"{"id": 2, "name": "Han Seong-ung", "dept": "Youngjin Pack"}"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.department, "Youngjin Pack");
    }

    #[test]
    fn test_serialize_uses_department_field() {
        let employee = Employee::new(1, "Lee Chae-hyun", "Youngjin Pack");
        let json = serde_json::to_value(&employee).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["department"], "Youngjin Pack");
        assert!(json.get("dept").is_none());
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let json = r#"{"id": 2, "department": "Youngjin Pack"}"#;
        let result: Result<Employee, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
