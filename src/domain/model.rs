use serde::{Deserialize, Serialize};

/// A person taking part in the draw. The identifier (an email) is the identity key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub id: String,
}

impl Participant {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

/// A `(giver, receiver)` pair from an earlier round, by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriorAssignment {
    pub giver: String,
    pub receiver: String,
}

impl PriorAssignment {
    pub fn new(giver: impl Into<String>, receiver: impl Into<String>) -> Self {
        Self {
            giver: giver.into(),
            receiver: receiver.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(rename = "Employee_Name")]
    pub giver_name: String,
    #[serde(rename = "Employee_EmailID")]
    pub giver_id: String,
    #[serde(rename = "Secret_Child_Name")]
    pub receiver_name: String,
    #[serde(rename = "Secret_Child_EmailID")]
    pub receiver_id: String,
}

impl Assignment {
    pub fn new(giver: &Participant, receiver: &Participant) -> Self {
        Self {
            giver_name: giver.name.clone(),
            giver_id: giver.id.clone(),
            receiver_name: receiver.name.clone(),
            receiver_id: receiver.id.clone(),
        }
    }
}

/// Inputs collected by the extract phase.
#[derive(Debug, Clone, Default)]
pub struct DrawInput {
    pub participants: Vec<Participant>,
    pub prior: Vec<PriorAssignment>,
}

/// Result of the transform phase.
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentRun {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub attempts: usize,
    pub assignments: Vec<Assignment>,
}
