//! Document Content
//!
//! The checklist rendered by the app: a review checklist for the delivery
//! backend's API endpoints.

use crate::models::{Block, ChecklistDocument, ListEntry, Section};

impl ChecklistDocument {
    /// The API endpoints review checklist
    pub fn api_endpoints() -> Self {
        Self {
            title: "API Endpoints Documentation".to_string(),
            export_file_name: "api_endpoints_documentation.md".to_string(),
            sections: vec![
                Section {
                    md_id: "api-auth".to_string(),
                    title: "Authentication".to_string(),
                    blocks: vec![
                        Block::Paragraph(
                            "All endpoints require a bearer token issued by the auth service."
                                .to_string(),
                        ),
                        Block::Code(
                            "POST /v1/auth/token\nAuthorization: Basic <client credentials>"
                                .to_string(),
                        ),
                        Block::SubHeading("Token lifecycle".to_string()),
                        Block::List(vec![
                            ListEntry::task(
                                "auth-token-ttl",
                                "Confirm access token TTL and refresh flow",
                            ),
                            ListEntry::task(
                                "auth-scopes",
                                "Agree on scope names for courier and dispatcher roles",
                            ),
                            ListEntry::plain("Clock skew tolerance is fixed at 30 seconds"),
                        ]),
                    ],
                },
                Section {
                    md_id: "api-orders".to_string(),
                    title: "Orders".to_string(),
                    blocks: vec![
                        Block::SubHeading("Creation".to_string()),
                        Block::Paragraph(
                            "Orders are created by the storefront and picked up by dispatch."
                                .to_string(),
                        ),
                        Block::Code(
                            "POST /v1/orders\n{\n  \"pickup\": \"warehouse-7\",\n  \"dropoff\": \"customer address\"\n}"
                                .to_string(),
                        ),
                        Block::List(vec![
                            ListEntry::task(
                                "orders-idempotency",
                                "Settle idempotency key semantics for retried creates",
                            ),
                            ListEntry::task(
                                "orders-validation",
                                "List required fields and their validation errors",
                            ),
                        ]),
                        Block::SubHeading("Status transitions".to_string()),
                        Block::List(vec![
                            ListEntry::task(
                                "orders-states",
                                "Confirm the state diagram covers cancellations",
                            ),
                            ListEntry::task(
                                "orders-webhooks",
                                "Decide which transitions fire a webhook",
                            ),
                        ]),
                    ],
                },
                Section {
                    md_id: "api-delivery".to_string(),
                    title: "Delivery Status".to_string(),
                    blocks: vec![
                        Block::Paragraph(
                            "Couriers report progress through the mobile client; the storefront polls."
                                .to_string(),
                        ),
                        Block::List(vec![
                            ListEntry::task(
                                "delivery-eta",
                                "Pick the ETA recalculation interval",
                            ),
                            ListEntry::task(
                                "delivery-tracking",
                                "Expose a public tracking id separate from the order id",
                            ),
                            ListEntry::plain("GPS precision is capped at street level"),
                        ]),
                    ],
                },
            ],
        }
    }
}
