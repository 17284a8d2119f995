use once_cell::sync::Lazy;
use std::{future::Future, pin::Pin, sync::Arc};
use zoo_common::{perm::ZooPermChecker, ZooAppContext};
use zoo_error::{rbac::RbacError, ZooResult};
use zoo_models::{domain::prelude::Claims, enums::common::Role, rbac::BasePermRule};
use zoo_repository::ProfileRepository;

type PermCheckFn = dyn Fn(&str, &str, Arc<Claims>) -> Pin<Box<dyn Future<Output = ZooResult<bool, RbacError>> + Send>>
    + Send
    + Sync;

static PERM_CHECKER: Lazy<Arc<ZooPermChecker>> = Lazy::new(|| Arc::new(ZooPermChecker::new()));

/// The process-wide permission checker used by the authorization middleware.
#[inline]
pub(crate) fn perm_checker() -> Arc<ZooPermChecker> {
    Arc::clone(&PERM_CHECKER)
}

/// Resolves the requester's role, consulting the context role cache first.
///
/// A user without a profile row has no role and fails every role check.
async fn resolve_role(user_id: i32) -> ZooResult<Option<Role>, RbacError> {
    let ctx = ZooAppContext::instance().map_err(|_| RbacError::Primitive)?;
    let cache = ctx.role_cache();

    if let Some(role) = cache.get(&user_id).await {
        return Ok(Some(role));
    }

    let role = ProfileRepository::find_role_by_user_id(user_id)
        .await
        .map_err(|_| RbacError::Primitive)?;

    // Only cache resolved roles; a missing profile must stay a live lookup.
    if let Some(role) = role {
        cache.insert(user_id, role).await;
    }

    Ok(role)
}

/// Creates a permission rule that passes when the requester holds any of the
/// given roles.
///
/// # Arguments
/// * `roles` - Roles to check for, at least one
///
/// # Returns
/// * `BasePermRule` - A rule resolving the requester's role through the
///   profile table (cached), or an error if the list is empty
#[inline]
pub(crate) fn has_any_role(
    roles: &'static [Role],
) -> ZooResult<BasePermRule<Box<PermCheckFn>>, RbacError> {
    if roles.is_empty() {
        return Err(RbacError::InvalidValue("Roles is empty".to_string()));
    }

    let check_fn = Box::new(move |_method: &str, _path: &str, grant: Arc<Claims>| {
        Box::pin(async move {
            let user_id = grant
                .user_id
                .parse::<i32>()
                .map_err(|e| RbacError::InvalidGrant(format!("invalid user id: {e}")))?;

            match resolve_role(user_id).await? {
                Some(role) => Ok(roles.contains(&role)),
                None => Ok(false),
            }
        }) as Pin<Box<dyn Future<Output = ZooResult<bool, RbacError>> + Send>>
    });

    Ok(BasePermRule::new(check_fn))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_role_list_is_rejected() {
        assert!(matches!(
            has_any_role(&[]),
            Err(RbacError::InvalidValue(_))
        ));
    }
}
