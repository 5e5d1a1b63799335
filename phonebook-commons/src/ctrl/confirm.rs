use futures::future::LocalBoxFuture;

/// Asks the user to approve a destructive action.
pub trait Confirmation {
    fn confirm(&self, message: &str) -> LocalBoxFuture<'static, bool>;
}
