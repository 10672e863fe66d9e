//! Dashboard affordances and the navigator they are routed to.
//!
//! "Open tool", the external link, "Docs" and "View audit logs" carry no
//! behaviour of their own. The session hands them to a [`Navigator`], which a
//! host application can implement to route them somewhere real.

use crate::models::ModelId;
use std::fmt;

/// An inert dashboard action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Affordance {
    /// "Open tool" on a model card.
    OpenTool(ModelId),
    /// External link icon on a model card.
    ExternalLink(ModelId),
    /// "Docs" on a model card.
    Docs(ModelId),
    /// "View audit logs" in the notice bar.
    AuditLogs,
}

impl Affordance {
    /// Short label for logs and messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::OpenTool(_) => "open-tool",
            Self::ExternalLink(_) => "external-link",
            Self::Docs(_) => "docs",
            Self::AuditLogs => "audit-logs",
        }
    }

    /// The model this affordance belongs to, if any.
    #[must_use]
    pub const fn model_id(&self) -> Option<&ModelId> {
        match self {
            Self::OpenTool(id) | Self::ExternalLink(id) | Self::Docs(id) => Some(id),
            Self::AuditLogs => None,
        }
    }
}

impl fmt::Display for Affordance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.model_id() {
            Some(id) => write!(f, "{} ({id})", self.label()),
            None => write!(f, "{}", self.label()),
        }
    }
}

/// External collaborator that receives affordances.
pub trait Navigator: fmt::Debug {
    /// Handles an affordance. Returns true if it was routed somewhere.
    fn navigate(&self, affordance: &Affordance) -> bool;
}

/// Navigator that routes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, affordance: &Affordance) -> bool {
        tracing::debug!(affordance = %affordance, "No navigator configured; ignoring");
        false
    }
}
