//! Database and tenant conversions
//!
//! Plain field copies. A tenant's resource name passes through unchanged in
//! both directions.

use crate::converter::Converter;
use crate::diagnostics::Diagnostics;
use chrono::{DateTime, Utc};
use sysdb_core::{Database, Tenant};
use sysdb_storage::{DatabaseRow, TenantRow};

impl<D: Diagnostics> Converter<D> {
    /// Convert a database row
    pub fn database_to_model(&self, row: &DatabaseRow) -> Database {
        let database = Database {
            id: row.id.clone(),
            name: row.name.clone(),
            tenant: row.tenant_id.clone(),
        };
        self.emit("database_to_model", Some(1), Some(1), &database);
        database
    }

    /// Convert a tenant row
    pub fn tenant_to_model(&self, row: &TenantRow) -> Tenant {
        let tenant = Tenant {
            name: row.id.clone(),
            resource_name: row.resource_name.clone(),
        };
        self.emit("tenant_to_model", Some(1), Some(1), &tenant);
        tenant
    }

    /// Convert a database into a row stamped with `ts` and `now`
    pub fn database_to_row(&self, database: &Database, ts: i64, now: DateTime<Utc>) -> DatabaseRow {
        let row = DatabaseRow {
            id: database.id.clone(),
            name: database.name.clone(),
            tenant_id: database.tenant.clone(),
            ts,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };
        self.emit("database_to_row", Some(1), Some(1), &row);
        row
    }

    /// Convert a tenant into a row stamped with `ts` and `now`
    pub fn tenant_to_row(&self, tenant: &Tenant, ts: i64, now: DateTime<Utc>) -> TenantRow {
        let row = TenantRow {
            id: tenant.name.clone(),
            ts,
            is_deleted: false,
            created_at: now,
            updated_at: now,
            last_compaction_time: 0,
            resource_name: tenant.resource_name.clone(),
        };
        self.emit("tenant_to_row", Some(1), Some(1), &row);
        row
    }
}
