use crate::utils::error::Result;
use async_trait::async_trait;

/// A capability that returns recent messages as text for a window of `hours`.
///
/// `Err` means the call itself faulted. A returned string may still flag a
/// failure by containing the `"Error"` marker; the probe decides that.
#[async_trait]
pub trait MessageSource: Send + Sync {
    async fn get_recent_messages(&self, hours: f64) -> Result<String>;
}

#[async_trait]
impl<T: MessageSource + ?Sized> MessageSource for Box<T> {
    async fn get_recent_messages(&self, hours: f64) -> Result<String> {
        (**self).get_recent_messages(hours).await
    }
}

/// Adapts a plain function so tests and callers can inject a capability inline.
pub struct FnSource<F>(pub F);

#[async_trait]
impl<F> MessageSource for FnSource<F>
where
    F: Fn(f64) -> Result<String> + Send + Sync,
{
    async fn get_recent_messages(&self, hours: f64) -> Result<String> {
        (self.0)(hours)
    }
}
