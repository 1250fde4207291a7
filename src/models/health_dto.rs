use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Health {
    pub status: String,
    pub database: String,
    /// `local` or `remote`
    pub storage: String,
    /// Rows in the upload ledger
    pub uploads: i64,
}
