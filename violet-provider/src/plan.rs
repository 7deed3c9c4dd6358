//! Replace-on-change planning and drift detection.

use std::fmt;
use violet_client::{CreateWebhookInput, Webhook};

/// Webhook attributes, as named in the API payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebhookField {
    Id,
    AppId,
    Event,
    RemoteEndpoint,
    Status,
    DateCreated,
    DateLastModified,
}

impl WebhookField {
    /// All fields in payload order.
    pub const ALL: [WebhookField; 7] = [
        WebhookField::Id,
        WebhookField::AppId,
        WebhookField::Event,
        WebhookField::RemoteEndpoint,
        WebhookField::Status,
        WebhookField::DateCreated,
        WebhookField::DateLastModified,
    ];

    /// Payload name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            WebhookField::Id => "id",
            WebhookField::AppId => "app_id",
            WebhookField::Event => "event",
            WebhookField::RemoteEndpoint => "remote_endpoint",
            WebhookField::Status => "status",
            WebhookField::DateCreated => "date_created",
            WebhookField::DateLastModified => "date_last_modified",
        }
    }

    /// Whether a change to this field forces destroy-and-recreate.
    pub fn requires_replace(&self) -> bool {
        matches!(self, WebhookField::Event | WebhookField::RemoteEndpoint)
    }

    /// Whether the value is assigned by the remote side.
    pub fn is_computed(&self) -> bool {
        !self.requires_replace()
    }

    fn differs(&self, a: &Webhook, b: &Webhook) -> bool {
        match self {
            WebhookField::Id => a.id != b.id,
            WebhookField::AppId => a.app_id != b.app_id,
            WebhookField::Event => a.event != b.event,
            WebhookField::RemoteEndpoint => a.remote_endpoint != b.remote_endpoint,
            WebhookField::Status => a.status != b.status,
            WebhookField::DateCreated => a.date_created != b.date_created,
            WebhookField::DateLastModified => a.date_last_modified != b.date_last_modified,
        }
    }
}

impl fmt::Display for WebhookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action needed to move from recorded state to desired configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// Recorded state already matches.
    NoChange,
    /// Nothing recorded yet.
    Create,
    /// An immutable field changed: delete, then create.
    Replace { fields: Vec<WebhookField> },
    /// Configuration removed.
    Delete,
}

impl Plan {
    /// Whether carrying out the plan touches the remote side.
    pub fn has_changes(&self) -> bool {
        !matches!(self, Plan::NoChange)
    }
}

/// Fields of `input` that differ from the recorded webhook.
pub fn changed_fields(prior: &Webhook, input: &CreateWebhookInput) -> Vec<WebhookField> {
    let mut fields = Vec::new();
    if prior.event != input.event {
        fields.push(WebhookField::Event);
    }
    if prior.remote_endpoint != input.remote_endpoint {
        fields.push(WebhookField::RemoteEndpoint);
    }
    fields
}

/// Plan the transition from `prior` state to `desired` configuration.
///
/// `None` on either side means absent: no recorded webhook, or the
/// configuration was removed.
pub fn plan(prior: Option<&Webhook>, desired: Option<&CreateWebhookInput>) -> Plan {
    match (prior, desired) {
        (None, None) => Plan::NoChange,
        (None, Some(_)) => Plan::Create,
        (Some(_), None) => Plan::Delete,
        (Some(prior), Some(desired)) => {
            let fields = changed_fields(prior, desired);
            if fields.is_empty() {
                Plan::NoChange
            } else {
                Plan::Replace { fields }
            }
        }
    }
}

/// Differences between recorded and observed state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drift {
    pub fields: Vec<WebhookField>,
}

impl Drift {
    /// Compare recorded state against a fresh read.
    pub fn between(recorded: &Webhook, observed: &Webhook) -> Self {
        let fields = WebhookField::ALL
            .into_iter()
            .filter(|field| field.differs(recorded, observed))
            .collect();
        Self { fields }
    }

    /// No field differs.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Drift touches a field the caller configured, so the webhook must be
    /// replaced to converge.
    pub fn requires_replace(&self) -> bool {
        self.fields.iter().any(WebhookField::requires_replace)
    }
}
