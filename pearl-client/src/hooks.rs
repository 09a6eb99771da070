//! Injected host collaborators
//!
//! The browser-side collaborators of the original portal (router,
//! toast display, inactivity timer) are modeled as traits the host
//! application implements. All hooks are fire-and-forget: the client
//! consumes no return value from them.

use async_trait::async_trait;

/// Route requested when a result code signals an invalid session
pub const LOGIN_ROUTE: &str = "/login?need=login";

/// Route requested by the diagnostic redirect on transport failures
pub const ERROR_ROUTE: &str = "/Code500";

/// Client-side navigation, e.g. a SPA router or window manager
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn navigate(&self, route: &str);
}

/// User-facing success/error notification, e.g. a toast display
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Activity reporting for the host's inactivity/session timer
///
/// Called once per standard API call, regardless of outcome.
pub trait ActivityHook: Send + Sync {
    fn on_activity(&self);
}

/// Navigator that ignores all navigation requests
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

#[async_trait]
impl Navigator for NoopNavigator {
    async fn navigate(&self, _route: &str) {}
}

/// Notifier that drops all notifications
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn success(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// Activity hook that ignores activity
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopActivity;

impl ActivityHook for NoopActivity {
    fn on_activity(&self) {}
}
