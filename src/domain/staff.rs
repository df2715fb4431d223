//! Staff records, modeled as composition plus a capability trait rather
//! than an inheritance chain.

/// A staff record. `name` is private to this module, `age` is visible to
/// the crate, `position` is public.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    name: String,
    pub(crate) age: u32,
    pub position: String,
}

impl Employee {
    pub fn new(name: impl Into<String>, age: u32, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            position: position.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An executive holds a regular staff record plus an office number and
/// delegates to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutiveOfficer {
    pub employee: Employee,
    pub office_number: u32,
}

impl ExecutiveOfficer {
    pub fn new(employee: Employee, office_number: u32) -> Self {
        Self {
            employee,
            office_number,
        }
    }

    pub fn name(&self) -> &str {
        self.employee.name()
    }
}

pub trait Worker {
    fn work(&self) -> String;
}

impl Worker for Employee {
    fn work(&self) -> String {
        format!("{} working", self.name)
    }
}

impl Worker for ExecutiveOfficer {
    fn work(&self) -> String {
        format!(
            "{} directing from office {}",
            self.employee.name(),
            self.office_number
        )
    }
}
