//! Console notifier — prints outcomes for the user.

use std::future::Future;

use wordclock_app::ports::{Notification, NotificationLevel, Notifier};

/// Prints information to stdout and errors to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) -> impl Future<Output = ()> + Send {
        match notification.level {
            NotificationLevel::Info => println!("{}", notification.text),
            NotificationLevel::Error => eprintln!("error: {}", notification.text),
        }
        async {}
    }
}
