//! Roster store.
//!
//! This module provides the [`Roster`] type, the fixed set of employees
//! eligible for attendance and payroll processing.

use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// An immutable roster of employees keyed by identifier.
///
/// Employees keep the order they were loaded in; lookups by identifier are
/// constant time.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Employee;
/// use payroll_engine::store::Roster;
///
/// let roster = Roster::new(vec![
///     Employee::new(1, "Lee Chae-hyun", "Youngjin Pack"),
///     Employee::new(2, "Han Seong-ung", "Youngjin Pack"),
/// ])?;
///
/// assert_eq!(roster.get(2)?.name, "Han Seong-ung");
/// assert!(roster.get(99).is_err());
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Roster {
    employees: Vec<Employee>,
    index: HashMap<u32, usize>,
}

impl Roster {
    /// Builds a roster from employees in display order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] if two employees share an id.
    pub fn new(employees: Vec<Employee>) -> EngineResult<Self> {
        let mut index = HashMap::with_capacity(employees.len());

        for (position, employee) in employees.iter().enumerate() {
            if index.insert(employee.id, position).is_some() {
                return Err(EngineError::InvalidEmployee {
                    id: employee.id,
                    message: "duplicate employee id".to_string(),
                });
            }
        }

        Ok(Self { employees, index })
    }

    /// Resolves an employee by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownEmployee`] if the id is not rostered.
    pub fn get(&self, id: u32) -> EngineResult<&Employee> {
        self.index
            .get(&id)
            .map(|&position| &self.employees[position])
            .ok_or(EngineError::UnknownEmployee { id })
    }

    /// Returns true if the id belongs to a rostered employee.
    pub fn contains(&self, id: u32) -> bool {
        self.index.contains_key(&id)
    }

    /// Returns all employees in roster order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the number of rostered employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the roster has no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
