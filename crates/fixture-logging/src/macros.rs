//! ---
//! fx_section: "02-ambient"
//! fx_subsection: "module"
//! fx_type: "source"
//! fx_scope: "code"
//! fx_description: "Structured logging context and macros."
//! fx_version: "v0.1.0"
//! fx_owner: "tbd"
//! ---

#[doc(hidden)]
#[macro_export]
macro_rules! __fx_event {
    ($level:expr, $ctx:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        tracing::event!(
            $level,
            entity = ctx.entity.unwrap_or(""),
            operation = ctx.operation.unwrap_or(""),
            config = ctx.config.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
}

/// Emit an informational log enriched with fixture context.
#[macro_export]
macro_rules! fx_info {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__fx_event!(tracing::Level::INFO, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__fx_event!(tracing::Level::INFO, $crate::LogContext::default(), $($arg)+)
    };
}

/// Emit a debug log enriched with fixture context.
#[macro_export]
macro_rules! fx_debug {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__fx_event!(tracing::Level::DEBUG, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__fx_event!(tracing::Level::DEBUG, $crate::LogContext::default(), $($arg)+)
    };
}

/// Emit an error log enriched with fixture context.
#[macro_export]
macro_rules! fx_error {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__fx_event!(tracing::Level::ERROR, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__fx_event!(tracing::Level::ERROR, $crate::LogContext::default(), $($arg)+)
    };
}
