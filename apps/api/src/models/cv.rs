use serde::{Deserialize, Serialize};

/// Contact details pulled from a CV. Both fields are mandatory for extraction to succeed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
}

/// The structured view of one uploaded CV. Built once per request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvRecord {
    /// First PERSON entity found by the recognizer, if any.
    pub name: Option<String>,
    pub contact: Contact,
    pub education: Vec<String>,
    pub experience: Vec<String>,
    pub skills: Vec<String>,
}
