//! Access-control decisions as a pure function of identity, action and
//! resource. Handlers and services call [`authorize`] and act on the
//! returned [`Decision`]; nothing in here touches the store or the
//! transport.

use crate::{
    auth::claims::{Claims, Role},
    errors::{AppError, AppResult},
};

/// The authenticated principal as seen by the policy: which institute it
/// belongs to, and in what capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub principal: String,
    pub role: Role,
}

impl From<&Claims> for Identity {
    fn from(claims: &Claims) -> Self {
        Identity {
            principal: claims.sub.clone(),
            role: claims.role,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ListRooms,
    CreateRoom,
    EnrollStudent,
    CreateQuestion,
    ListQuestions,
}

/// Ownership facts about the target resource. `owning_institute` is `None`
/// for resources that do not exist yet (they are owned by the caller by
/// construction) and for listings scoped to the caller itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceRef<'a> {
    pub owning_institute: Option<&'a str>,
}

impl<'a> ResourceRef<'a> {
    pub fn none() -> Self {
        ResourceRef::default()
    }

    pub fn owned_by(institute_id: &'a str) -> Self {
        ResourceRef {
            owning_institute: Some(institute_id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    NotOwner,
    InsufficientRole,
}

impl Decision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    /// Thin adapter from a decision to the error a caller reports.
    ///
    /// `Deny(NotOwner)` maps to `NotFound` with the same message a truly
    /// absent resource produces, so an unauthorized caller cannot tell a
    /// foreign resource from a missing one. `Deny(InsufficientRole)` maps
    /// to `Forbidden`: the role gate runs before ownership is consulted
    /// and reveals nothing about the resource.
    pub fn require(self, not_found_message: &str) -> AppResult<()> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(DenyReason::NotOwner) => {
                Err(AppError::NotFound(not_found_message.to_string()))
            }
            Decision::Deny(DenyReason::InsufficientRole) => Err(AppError::Forbidden(
                "You do not have permission to perform this action".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    /// The identity's institute must own the target resource.
    InstituteScope,
    /// The identity must carry one of the allowed role claims.
    RoleGate(&'static [Role]),
}

const ENROLL_ROLES: &[Role] = &[Role::Institute, Role::Teacher];
const QUESTION_ROLES: &[Role] = &[Role::Institute, Role::Teacher];

/// Rule table per action. Rules compose with AND; evaluation order decides
/// which reason a doubly-denied request reports.
fn rules_for(action: Action) -> &'static [Rule] {
    match action {
        Action::ListRooms | Action::CreateRoom => &[Rule::InstituteScope],
        Action::EnrollStudent => &[Rule::RoleGate(ENROLL_ROLES), Rule::InstituteScope],
        Action::CreateQuestion => &[Rule::RoleGate(QUESTION_ROLES), Rule::InstituteScope],
        // Question retrieval is intentionally public by room id.
        Action::ListQuestions => &[],
    }
}

impl Rule {
    fn evaluate(&self, identity: &Identity, resource: &ResourceRef) -> Option<DenyReason> {
        match self {
            Rule::RoleGate(allowed) => {
                if allowed.contains(&identity.role) {
                    None
                } else {
                    Some(DenyReason::InsufficientRole)
                }
            }
            Rule::InstituteScope => match resource.owning_institute {
                Some(owner) if owner == identity.principal => None,
                Some(_) => Some(DenyReason::NotOwner),
                None => None,
            },
        }
    }
}

/// Evaluate every configured rule for `action`; all must pass. The first
/// failing rule's reason is returned.
pub fn authorize(identity: &Identity, action: Action, resource: &ResourceRef) -> Decision {
    for rule in rules_for(action) {
        if let Some(reason) = rule.evaluate(identity, resource) {
            return Decision::Deny(reason);
        }
    }
    Decision::Allow
}
