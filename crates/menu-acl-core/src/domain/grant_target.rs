// ============================================================================
// Menu ACL Core - Grant Target
// File: crates/menu-acl-core/src/domain/grant_target.rs
// Description: Whose grant set an editing session works on
// ============================================================================

use std::fmt;

use menu_acl_shared::{BusinessId, RoleId, StaffId};
use serde::{Deserialize, Serialize};

/// Owner of the grant set being edited. Selects both the catalog and the
/// grant source at the Permission Store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GrantTarget {
    /// Platform-wide role.
    Role { role_id: RoleId },
    /// Role defined inside one business (tenant).
    BusinessRole { business_id: BusinessId, role_id: RoleId },
    /// Permissions assigned directly to a staff member.
    Staff { staff_id: StaffId },
}

impl GrantTarget {
    pub fn kind(&self) -> &'static str {
        match self {
            GrantTarget::Role { .. } => "role",
            GrantTarget::BusinessRole { .. } => "business_role",
            GrantTarget::Staff { .. } => "staff",
        }
    }

    pub fn business_id(&self) -> Option<BusinessId> {
        match self {
            GrantTarget::BusinessRole { business_id, .. } => Some(*business_id),
            _ => None,
        }
    }
}

impl fmt::Display for GrantTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrantTarget::Role { role_id } => write!(f, "role:{}", role_id),
            GrantTarget::BusinessRole { business_id, role_id } => {
                write!(f, "business:{}/role:{}", business_id, role_id)
            }
            GrantTarget::Staff { staff_id } => write!(f, "staff:{}", staff_id),
        }
    }
}
