use crate::domain::prelude::Claims;
use std::{future::Future, pin::Pin, sync::Arc};
use zoo_error::{rbac::RbacError, ZooResult};

/// Trait defining permission rules that can be evaluated against requests
///
/// Permission rules can be combined using logical operations (AND/OR)
/// to create complex authorization policies.
pub trait PermRule: Send + Sync {
    /// Checks if the request satisfies this permission rule
    ///
    /// # Arguments
    /// * `method` - The HTTP method (e.g., "GET", "POST")
    /// * `path` - The matched route pattern
    /// * `claims` - The claims of the user
    fn check(
        &self,
        method: &str,
        path: &str,
        claims: Arc<Claims>,
    ) -> Pin<Box<dyn Future<Output = ZooResult<bool, RbacError>> + Send>>;

    /// Combines this rule with another rule using AND logic
    #[inline]
    fn and<R: PermRule + 'static>(self, rule: R) -> Box<dyn PermRule>
    where
        Self: Sized + 'static,
    {
        Box::new(CombinedPermRule {
            rules: vec![Arc::new(self), Arc::new(rule)],
            is_or: false,
        })
    }

    /// Combines this rule with another rule using OR logic
    #[inline]
    fn or<R: PermRule + 'static>(self, rule: R) -> Box<dyn PermRule>
    where
        Self: Sized + 'static,
    {
        Box::new(CombinedPermRule {
            rules: vec![Arc::new(self), Arc::new(rule)],
            is_or: true,
        })
    }
}

impl PermRule for Box<dyn PermRule> {
    #[inline]
    fn check(
        &self,
        method: &str,
        path: &str,
        claims: Arc<Claims>,
    ) -> Pin<Box<dyn Future<Output = ZooResult<bool, RbacError>> + Send>> {
        (**self).check(method, path, claims)
    }
}

/// Basic implementation of a permission rule using a closure
pub struct BasePermRule<F>
where
    F: Fn(
            &str,
            &str,
            Arc<Claims>,
        ) -> Pin<Box<dyn Future<Output = ZooResult<bool, RbacError>> + Send>>
        + Send
        + Sync,
{
    check_fn: F,
}

impl<F> BasePermRule<F>
where
    F: Fn(
            &str,
            &str,
            Arc<Claims>,
        ) -> Pin<Box<dyn Future<Output = ZooResult<bool, RbacError>> + Send>>
        + Send
        + Sync,
{
    #[inline]
    pub fn new(check_fn: F) -> Self {
        Self { check_fn }
    }
}

impl<F> PermRule for BasePermRule<F>
where
    F: Fn(
            &str,
            &str,
            Arc<Claims>,
        ) -> Pin<Box<dyn Future<Output = ZooResult<bool, RbacError>> + Send>>
        + Send
        + Sync,
{
    #[inline]
    fn check(
        &self,
        method: &str,
        path: &str,
        claims: Arc<Claims>,
    ) -> Pin<Box<dyn Future<Output = ZooResult<bool, RbacError>> + Send>> {
        (self.check_fn)(method, path, claims)
    }
}

/// A rule that combines multiple permission rules using logical operations
pub struct CombinedPermRule {
    rules: Vec<Arc<dyn PermRule>>,
    is_or: bool,
}

impl PermRule for CombinedPermRule {
    #[inline]
    fn check(
        &self,
        method: &str,
        path: &str,
        claims: Arc<Claims>,
    ) -> Pin<Box<dyn Future<Output = ZooResult<bool, RbacError>> + Send>> {
        let rules = self.rules.clone();
        let is_or = self.is_or;
        let method = method.to_string();
        let path = path.to_string();
        Box::pin(async move {
            if is_or {
                for rule in &rules {
                    if rule.check(&method, &path, claims.clone()).await? {
                        return Ok(true);
                    }
                }
                Ok(false)
            } else {
                for rule in &rules {
                    if !rule.check(&method, &path, claims.clone()).await? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(
        value: bool,
    ) -> BasePermRule<
        impl Fn(
                &str,
                &str,
                Arc<Claims>,
            ) -> Pin<Box<dyn Future<Output = ZooResult<bool, RbacError>> + Send>>
            + Send
            + Sync,
    > {
        BasePermRule::new(move |_m: &str, _p: &str, _c: Arc<Claims>| {
            Box::pin(async move { Ok(value) })
                as Pin<Box<dyn Future<Output = ZooResult<bool, RbacError>> + Send>>
        })
    }

    fn claims() -> Arc<Claims> {
        Arc::new(Claims::new(
            "test".to_string(),
            "1".to_string(),
            "tester".to_string(),
            60,
        ))
    }

    #[tokio::test]
    async fn or_passes_when_any_rule_passes() {
        let rule = fixed(false).or(fixed(true));
        assert!(rule.check("GET", "/x", claims()).await.unwrap());
    }

    #[tokio::test]
    async fn and_requires_all_rules() {
        let rule = fixed(true).and(fixed(false));
        assert!(!rule.check("GET", "/x", claims()).await.unwrap());

        let rule = fixed(true).and(fixed(true));
        assert!(rule.check("GET", "/x", claims()).await.unwrap());
    }
}
