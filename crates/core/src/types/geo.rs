//! Colombian administrative divisions.

use serde::{Deserialize, Serialize};

use super::id::{CityId, DepartmentId};

/// A Colombian department (first-level division).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Department {
    /// DANE department code.
    pub id: DepartmentId,
    pub name: String,
}

/// A municipality belonging to a [`Department`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    /// DANE municipality code.
    pub id: CityId,
    pub name: String,
    pub department_id: DepartmentId,
}

impl City {
    /// Whether this city belongs to the given department.
    #[must_use]
    pub fn belongs_to(&self, department_id: &DepartmentId) -> bool {
        &self.department_id == department_id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_city_serializes_department_id_in_camel_case() {
        let city = City {
            id: CityId::new("05001"),
            name: "Medellín".to_string(),
            department_id: DepartmentId::new("05"),
        };
        let json = serde_json::to_value(&city).unwrap();
        assert_eq!(json["departmentId"], "05");
        assert!(city.belongs_to(&DepartmentId::new("05")));
        assert!(!city.belongs_to(&DepartmentId::new("08")));
    }
}
