use actix_web::http::Method;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use zoo_error::{rbac::RbacError, ZooResult};
use zoo_models::{domain::prelude::Claims, rbac::PermRule};

type BoxedPermRule = Box<dyn PermRule>;

/// Permission checker for API routes
///
/// Manages the registration and evaluation of permission rules for different API endpoints.
#[derive(Default)]
pub struct ZooPermChecker {
    rules: Arc<RwLock<HashMap<(String, String), BoxedPermRule>>>,
}

impl ZooPermChecker {
    /// Creates a new permission checker with an empty rule set
    #[inline]
    pub fn new() -> Self {
        Self {
            rules: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Registers a permission rule for a specific HTTP method and path
    ///
    /// # Arguments
    /// * `method` - The HTTP method (e.g., "GET", "POST")
    /// * `path` - The route pattern to protect
    /// * `rule` - The permission rule to apply
    ///
    /// # Returns
    /// * `ZooResult<()>` - Ok if registration was successful, or Error if key already exists
    #[inline]
    pub async fn register<R: PermRule + 'static>(
        &self,
        method: Method,
        path: String,
        rule: R,
    ) -> ZooResult<(), RbacError> {
        let key = (method.as_str().to_string(), path);
        let mut rules = self.rules.write().await;

        // Check for duplicate key
        if rules.contains_key(&key) {
            return Err(RbacError::RuleExists {
                method: key.0.clone(),
                path: key.1.clone(),
            });
        }

        rules.insert(key, Box::new(rule));
        Ok(())
    }

    /// Checks if a request passes the registered permission rules
    ///
    /// Routes with no registered rule are allowed by default.
    ///
    /// # Arguments
    /// * `method` - The HTTP method (e.g., "GET", "POST")
    /// * `path` - The matched route pattern
    /// * `claims` - The claims of the user
    ///
    /// # Returns
    /// * `ZooResult<bool>` - True if permission is granted, False otherwise
    #[inline]
    pub async fn check(
        &self,
        method: &str,
        path: &str,
        claims: Arc<Claims>,
    ) -> ZooResult<bool, RbacError> {
        let key = (method.to_string(), path.to_string());

        if let Some(rule) = self.rules.read().await.get(&key) {
            return rule.check(method, path, claims).await;
        }

        // default allowed
        Ok(true)
    }
}
