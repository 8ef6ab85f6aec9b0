//! Records Module
//!
//! CRUD collaborators for the three record collections. All of them sit
//! behind the session gate; none of them know anything about tokens.
//!
//! # Module Structure
//!
//! ```text
//! records/
//! ├── mod.rs      - Record trait implementations and the store bundle
//! ├── store.rs    - Generic JSON-file backed store
//! └── handlers.rs - HTTP handlers for services, confirmations, reports
//! ```
//!
//! # Files
//!
//! | Collection    | File                | JSON key        |
//! |---------------|---------------------|-----------------|
//! | services      | `services.json`     | `services`      |
//! | confirmations | `confirmation.json` | `confirmations` |
//! | reports       | `report.json`       | `reports`       |

/// Generic JSON-file record store
pub mod store;

/// HTTP handlers
pub mod handlers;

use std::path::Path;
use std::sync::Arc;

use crate::shared::{Confirmation, ConfirmationId, Report, ReportId, Service, ServiceId};
pub use store::{JsonRecordStore, Record, StoreError};

/// File name of the service collection
pub const SERVICES_FILE: &str = "services.json";
/// File name of the confirmation collection
pub const CONFIRMATIONS_FILE: &str = "confirmation.json";
/// File name of the report collection
pub const REPORTS_FILE: &str = "report.json";

impl Record for Service {
    type Id = ServiceId;
    const COLLECTION: &'static str = "services";
    const NOT_FOUND: &'static str = "Service not found";

    fn id(&self) -> ServiceId {
        self.id
    }

    fn with_id(self, id: ServiceId) -> Self {
        Self { id, ..self }
    }
}

impl Record for Confirmation {
    type Id = ConfirmationId;
    const COLLECTION: &'static str = "confirmations";
    const NOT_FOUND: &'static str = "Confirmation not found";

    fn id(&self) -> ConfirmationId {
        self.id
    }

    fn with_id(self, id: ConfirmationId) -> Self {
        Self { id, ..self }
    }
}

impl Record for Report {
    type Id = ReportId;
    const COLLECTION: &'static str = "reports";
    const NOT_FOUND: &'static str = "Report not found";

    fn id(&self) -> ReportId {
        self.id
    }

    fn with_id(self, id: ReportId) -> Self {
        Self { id, ..self }
    }
}

/// The three record stores, shared by every handler
#[derive(Debug, Clone)]
pub struct RecordStores {
    pub services: Arc<JsonRecordStore<Service>>,
    pub confirmations: Arc<JsonRecordStore<Confirmation>>,
    pub reports: Arc<JsonRecordStore<Report>>,
}

impl RecordStores {
    /// Load every collection from `data_dir`
    pub async fn load(data_dir: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            services: Arc::new(JsonRecordStore::load(data_dir.join(SERVICES_FILE)).await?),
            confirmations: Arc::new(
                JsonRecordStore::load(data_dir.join(CONFIRMATIONS_FILE)).await?,
            ),
            reports: Arc::new(JsonRecordStore::load(data_dir.join(REPORTS_FILE)).await?),
        })
    }
}
