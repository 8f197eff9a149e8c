mod column;
mod list;
mod user;

pub use column::{ColumnDescriptor, ColumnKindFlags, ColumnRole, ColumnType, PRIMARY_COLUMN_NAME};
pub use list::{FailureReason, ListInfo, ListMetadataEntry, initial_selection};
pub use user::{AccessToken, User};
