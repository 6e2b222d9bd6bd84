//! User API seam and its HTTP implementation.

mod error;
mod http;

use std::future::Future;
use std::sync::Arc;

use crate::model::UserRecord;

pub use error::ApiError;
pub use http::HttpUserApi;

/// Remote operations the coordinator depends on.
///
/// Futures must be `Send` so handlers can run on the multi-threaded runtime.
pub trait UserApi: Send + Sync + 'static {
    fn fetch_user(&self, name: &str)
        -> impl Future<Output = Result<UserRecord, ApiError>> + Send;

    fn change_user_alias(
        &self,
        target_user: &str,
        alias: &str,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}

impl<T: UserApi> UserApi for Arc<T> {
    fn fetch_user(&self, name: &str)
        -> impl Future<Output = Result<UserRecord, ApiError>> + Send {
        (**self).fetch_user(name)
    }

    fn change_user_alias(
        &self,
        target_user: &str,
        alias: &str,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        (**self).change_user_alias(target_user, alias)
    }
}
