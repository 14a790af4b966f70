//! Permission policies for the tracker resources.
//!
//! A policy answers two questions, in order:
//!
//! 1. [`Policy::has_permission`] -- may this caller perform this kind of
//!    access on the resource at all? Evaluated before the request body is read.
//! 2. [`Policy::has_object_permission`] -- may this caller perform it on this
//!    particular, already-loaded object? Only evaluated for item routes.
//!
//! Authentication is a precondition of both; callers reaching a policy are
//! always authenticated.

use crate::error::CoreError;
use crate::types::DbId;

/// Kind of access a request performs, derived from its HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// `GET`, `HEAD`, `OPTIONS`.
    Read,
    /// Everything else (`POST`, `PUT`, `PATCH`, `DELETE`).
    Write,
}

impl Access {
    pub fn from_method(method: &str) -> Self {
        match method {
            "GET" | "HEAD" | "OPTIONS" => Access::Read,
            _ => Access::Write,
        }
    }

    pub fn is_read(self) -> bool {
        self == Access::Read
    }
}

/// The authenticated principal as seen by the policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user_id: DbId,
    pub is_admin: bool,
}

/// An object that can be the target of an object-level permission check.
pub trait PermissionTarget {
    /// The user currently responsible for the object, if any.
    fn assignee_id(&self) -> Option<DbId> {
        None
    }
}

pub trait Policy {
    /// Short name used in logs and forbidden messages.
    const NAME: &'static str;

    fn has_permission(&self, _caller: &Caller, _access: Access) -> bool {
        true
    }

    fn has_object_permission(
        &self,
        _caller: &Caller,
        _access: Access,
        _object: &dyn PermissionTarget,
    ) -> bool {
        true
    }
}

/// Reads are open to every authenticated caller; writes need the admin role.
///
/// Used for projects and sprints.
#[derive(Debug, Default, Clone, Copy)]
pub struct AdminOrReadOnly;

impl Policy for AdminOrReadOnly {
    const NAME: &'static str = "AdminOrReadOnly";

    fn has_permission(&self, caller: &Caller, access: Access) -> bool {
        access.is_read() || caller.is_admin
    }
}

/// Reads are open; writes on an existing object need the admin role or
/// being the object's assignee.
///
/// There is no request-level restriction, so creating a task only requires
/// authentication.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssigneeOrAdmin;

impl Policy for AssigneeOrAdmin {
    const NAME: &'static str = "AssigneeOrAdmin";

    fn has_object_permission(
        &self,
        caller: &Caller,
        access: Access,
        object: &dyn PermissionTarget,
    ) -> bool {
        if access.is_read() {
            return true;
        }
        caller.is_admin || object.assignee_id() == Some(caller.user_id)
    }
}

/// Request-level check, mapped to [`CoreError::Forbidden`].
pub fn check<P: Policy>(policy: &P, caller: &Caller, access: Access) -> Result<(), CoreError> {
    if policy.has_permission(caller, access) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(
            "You do not have permission to perform this action".into(),
        ))
    }
}

/// Object-level check, mapped to [`CoreError::Forbidden`].
pub fn check_object<P: Policy>(
    policy: &P,
    caller: &Caller,
    access: Access,
    object: &dyn PermissionTarget,
) -> Result<(), CoreError> {
    if policy.has_object_permission(caller, access, object) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(
            "You do not have permission to perform this action".into(),
        ))
    }
}
