use crate::models::event::WebhookEvent;
use crate::models::issue::Issue;

/// Label that mutes every notification rule for an issue.
pub const SKIP_LABEL: &str = "Special";

const FALLBACK_FIELD: &str = "N/A";
const FALLBACK_ASSIGNEE: &str = "Unassigned";
const FALLBACK_PROJECT: &str = "an unnamed project";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    ApprovalRequested,
    ApprovalDone,
}

/// Static mapping from a target workflow state to the rule that fires on it.
#[derive(Debug)]
pub struct RuleDef {
    pub rule: Rule,
    pub target_state: &'static str,
    pub buttons: bool,
}

pub const RULES: &[RuleDef] = &[
    RuleDef { rule: Rule::ApprovalRequested, target_state: "In Approval", buttons: true },
    RuleDef { rule: Rule::ApprovalDone, target_state: "Done", buttons: false },
];

/// Fields pulled out of the issue snapshot for message rendering. Missing
/// fields turn into placeholders here, never into errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub title: String,
    pub identifier: String,
    pub assignee: String,
    pub project_suffix: String,
}

#[derive(Debug)]
pub struct Decision {
    pub def: &'static RuleDef,
    pub ctx: MessageContext,
}

/// Decide which notification rules fire for an inbound event.
///
/// Only `Issue`/`update` events are considered, and a rule fires only on a
/// real transition: both the prior and new state ids are known and differ.
/// Re-sent states and partial updates without a prior state id fire nothing.
pub fn classify(event: &WebhookEvent) -> Vec<Decision> {
    if event.kind.as_deref() != Some("Issue") || event.action.as_deref() != Some("update") {
        return Vec::new();
    }

    let issue = match &event.data {
        Some(issue) => issue,
        None => return Vec::new(),
    };

    if issue.labels.iter().any(|label| label.name == SKIP_LABEL) {
        return Vec::new();
    }

    let old_state_id = event
        .updated_from
        .as_ref()
        .and_then(|from| from.state_id.as_deref());
    let new_state = issue.state.as_ref();
    let new_state_id = new_state.and_then(|state| state.id.as_deref());

    let real_transition = match (old_state_id, new_state_id) {
        (Some(old), Some(new)) => old != new,
        _ => false,
    };
    if !real_transition {
        return Vec::new();
    }

    let state_name = match new_state.and_then(|state| state.name.as_deref()) {
        Some(name) => name,
        None => return Vec::new(),
    };

    let ctx = context_for(issue);

    RULES
        .iter()
        .filter(|def| def.target_state == state_name)
        .map(|def| Decision { def, ctx: ctx.clone() })
        .collect()
}

fn context_for(issue: &Issue) -> MessageContext {
    MessageContext {
        title: field_or(issue.title.as_deref(), FALLBACK_FIELD),
        identifier: field_or(issue.identifier.as_deref(), FALLBACK_FIELD),
        assignee: field_or(
            issue.assignee.as_ref().and_then(|a| a.name.as_deref()),
            FALLBACK_ASSIGNEE,
        ),
        project_suffix: project_suffix(issue),
    }
}

fn field_or(value: Option<&str>, fallback: &str) -> String {
    value.unwrap_or(fallback).to_string()
}

/// Suffix appended to every notification when the issue belongs to a project.
fn project_suffix(issue: &Issue) -> String {
    if issue.project_id.is_none() && issue.project.is_none() {
        return String::new();
    }
    let name = issue
        .project
        .as_ref()
        .and_then(|project| project.name.as_deref())
        .unwrap_or(FALLBACK_PROJECT);
    format!("\n\n📁 Project: {}", name)
}
