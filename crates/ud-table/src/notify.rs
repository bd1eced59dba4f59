use log::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Injectable notification sink for user-facing messages (toasts in a
/// browser shell, log lines in the CLI). Keeps the controller free of any
/// ambient global; tests inject a recording double.
pub trait Notifier {
    fn notify(&self, severity: Severity, message: &str);
}

/// Production notifier: forwards to the log facade.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => info!("{message}"),
            Severity::Error => error!("{message}"),
        }
    }
}
