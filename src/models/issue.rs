use serde::{Serialize, Deserialize};

/// Issue snapshot carried in the `data` field of an update event.
#[derive(Debug, Serialize, Deserialize)]
pub struct Issue{
    pub title: Option<String>,

    pub identifier: Option<String>,

    pub assignee: Option<Assignee>,

    pub state: Option<WorkflowState>,

    #[serde(default)]
    pub labels: Vec<Label>,

    pub project: Option<Project>,

    #[serde(rename="projectId")]
    pub project_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WorkflowState{
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Assignee{
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Label{
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Project{
    pub name: Option<String>,
}
