/// Target used for events that should be rendered as a positive status line.
pub const SUCCESS_TARGET: &str = "scanvenger::success";

/// Target used for raw terminal output routed through the logger.
pub const PRINT_TARGET: &str = "scanvenger::print";

/// Logs a success message. Rendered with the `[+]` marker by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "scanvenger::success", $($arg)*)
    };
}
