//! # Module Catalog
//!
//! Static content shown for each dashboard module.
//!
//! `content_for` is an exhaustive match over [`ModuleId`]; it never looks at
//! who is signed in. The `audience` on an operation is a documentation label
//! ("admin only") and is not enforced anywhere.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::ModuleId;

/// Who an endpoint is documented for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Audience {
    Everyone,
    Admin,
    SuperAdmin,
}

impl Audience {
    /// Badge text next to the operation.
    pub const fn label(self) -> &'static str {
        match self {
            Audience::Everyone => "all users",
            Audience::Admin => "admin only",
            Audience::SuperAdmin => "super-admin only",
        }
    }
}

/// One documented endpoint listed on a module page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OperationDoc {
    pub method: String,
    pub path: String,
    pub description: String,
    pub audience: Audience,
}

impl OperationDoc {
    fn new(method: &str, path: &str, description: &str, audience: Audience) -> Self {
        OperationDoc {
            method: method.to_string(),
            path: path.to_string(),
            description: description.to_string(),
            audience,
        }
    }
}

/// What the content pane renders for a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ContentDescriptor {
    pub module: ModuleId,
    pub title: String,
    pub summary: String,
    pub operations: Vec<OperationDoc>,
    pub body: String,
}

/// Sidebar / header title of a module.
pub const fn title_for(id: ModuleId) -> &'static str {
    match id {
        ModuleId::Dashboard => "IT Management Dashboard",
        ModuleId::Users => "User Management",
        ModuleId::Purchases => "Purchase Requests",
        ModuleId::Materials => "Material Requests",
        ModuleId::Stock => "Stock Management",
        ModuleId::Assets => "Asset Traceability",
        ModuleId::Chatbot => "IT Support Assistant",
    }
}

/// Returns the static descriptor for a module.
pub fn content_for(id: ModuleId) -> ContentDescriptor {
    use Audience::{Admin, Everyone, SuperAdmin};

    let (summary, operations, body) = match id {
        ModuleId::Dashboard => (
            "Overview of assets, requests, stock levels and open tickets",
            vec![OperationDoc::new(
                "GET",
                "/api/dashboard/summary",
                "Key metrics for the selected date range",
                Everyone,
            )],
            "Key metrics, allocation trends, request fulfillment, stock levels and equipment failures.",
        ),
        ModuleId::Users => (
            "Manage console accounts and roles",
            vec![
                OperationDoc::new("GET", "/api/users", "List all users", Admin),
                OperationDoc::new("POST", "/api/users", "Create a user account", SuperAdmin),
                OperationDoc::new("PUT", "/api/users/:id/role", "Change a user's role", SuperAdmin),
                OperationDoc::new("DELETE", "/api/users/:id", "Deactivate a user", SuperAdmin),
            ],
            "Create accounts, assign admin roles and deactivate users who have left.",
        ),
        ModuleId::Purchases => (
            "Request and approve hardware and software purchases",
            vec![
                OperationDoc::new("GET", "/api/purchases", "List purchase requests", Everyone),
                OperationDoc::new("POST", "/api/purchases", "Submit a purchase request", Everyone),
                OperationDoc::new(
                    "PATCH",
                    "/api/purchases/:id/approve",
                    "Approve or reject a request",
                    Admin,
                ),
            ],
            "Track purchase requests from submission through approval and delivery.",
        ),
        ModuleId::Materials => (
            "Request consumables and spare parts from IT stores",
            vec![
                OperationDoc::new("GET", "/api/material-requests", "List material requests", Everyone),
                OperationDoc::new(
                    "POST",
                    "/api/material-requests",
                    "Request materials",
                    Everyone,
                ),
                OperationDoc::new(
                    "PATCH",
                    "/api/material-requests/:id/status",
                    "Fulfil or decline a request",
                    Admin,
                ),
            ],
            "Material requests are fulfilled from stock; shortages raise a purchase request.",
        ),
        ModuleId::Stock => (
            "Inventory levels and stock movements",
            vec![
                OperationDoc::new("GET", "/api/stock", "Current stock levels", Everyone),
                OperationDoc::new("GET", "/api/stock/low", "Items below reorder level", Everyone),
                OperationDoc::new("POST", "/api/stock/movements", "Record a stock movement", Admin),
            ],
            "Monitor stock levels, record movements and spot items that need reordering.",
        ),
        ModuleId::Assets => (
            "Trace every asset from purchase to disposal",
            vec![
                OperationDoc::new("GET", "/api/assets", "List assets", Everyone),
                OperationDoc::new("GET", "/api/assets/:id/history", "Assignment history", Everyone),
                OperationDoc::new("POST", "/api/assets/:id/assign", "Assign an asset to a user", Admin),
            ],
            "Each asset keeps its assignment, maintenance and failure history.",
        ),
        ModuleId::Chatbot => (
            "Ask the IT support assistant",
            vec![OperationDoc::new(
                "POST",
                "/api/chatbot/messages",
                "Send a message to the assistant",
                Everyone,
            )],
            "The assistant is a placeholder. Messages are not processed yet.",
        ),
    };

    ContentDescriptor {
        module: id,
        title: title_for(id).to_string(),
        summary: summary.to_string(),
        operations,
        body: body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_module_has_content() {
        for id in ModuleId::ALL {
            let content = content_for(id);
            assert_eq!(content.module, id);
            assert!(!content.title.is_empty());
            assert!(!content.operations.is_empty(), "{id} has no operations");
        }
    }

    #[test]
    fn test_content_for_is_pure() {
        assert_eq!(content_for(ModuleId::Stock), content_for(ModuleId::Stock));
        assert_eq!(content_for(ModuleId::Stock).title, "Stock Management");
    }

    #[test]
    fn test_audience_is_only_a_label() {
        let users = content_for(ModuleId::Users);
        let labels: Vec<&str> = users.operations.iter().map(|op| op.audience.label()).collect();
        assert_eq!(labels[0], "admin only");
        assert_eq!(labels[1], "super-admin only");
    }
}
