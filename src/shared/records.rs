/**
 * Service Desk Records
 *
 * This module defines the three record types served by the API: catalog
 * services, confirmations, and staff reports. Each record is keyed by its
 * own identifier type so a confirmation id can never be used to look up a
 * service.
 *
 * The field names match the JSON files and wire format, including the
 * `staf` key on reports.
 */
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

record_id!(
    /// Identifier of a catalog service
    ServiceId
);
record_id!(
    /// Identifier of a confirmation
    ConfirmationId
);
record_id!(
    /// Identifier of a staff report
    ReportId
);

/// A service offered in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// A customer's confirmation of a service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub id: ConfirmationId,
    pub service_id: ServiceId,
    /// Customer identifier, owned by an external system
    pub user_id: i64,
    pub confirmed: bool,
}

/// A report filed by a staff member about a service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    /// Name of the staff member filing the report
    #[serde(rename = "staf")]
    pub staff: String,
    pub service_id: ServiceId,
    pub description: String,
}
