//! User-facing notification sinks.

use tokio::sync::mpsc;

/// Fire-and-forget sink for transient error messages.
pub trait Notifier: Send + Sync + 'static {
    fn error(&self, message: &str);
}

/// Writes notifications to the log on the `notify` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn error(&self, message: &str) {
        tracing::error!(target: "notify", "{}", message);
    }
}

/// A message routed to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

/// Forwards notifications to a UI loop over a channel.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn error(&self, message: &str) {
        // Nobody listening is not our problem.
        let _ = self.sender.send(Notification {
            message: message.to_string(),
        });
    }
}

impl<T: Notifier> Notifier for std::sync::Arc<T> {
    fn error(&self, message: &str) {
        (**self).error(message)
    }
}
