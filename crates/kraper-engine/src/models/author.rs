use serde::{Deserialize, Serialize};

/// An author entry from the questionnaire's author list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    pub email: String,
    pub department: String,
    pub institution: String,
}

impl Author {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
        institution: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            department: department.into(),
            institution: institution.into(),
        }
    }
}
