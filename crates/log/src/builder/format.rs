//! Format layer creation macros

/// Macro to reduce duplication in format layer creation
///
/// Applies every display option except the timer, which the builder sets
/// afterwards because turning it off changes the layer's type.
macro_rules! create_fmt_layer {
    ($format:ident, $display:expr, $writer:expr) => {{
        tracing_subscriber::fmt::layer()
            .$format()
            .with_writer($writer)
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
            .with_thread_ids($display.thread_ids)
            .with_thread_names($display.thread_names)
    }};
}

/// Macro for JSON format (has additional options)
macro_rules! create_json_layer {
    ($display:expr, $writer:expr) => {{
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer($writer)
            .with_current_span(true)
            .with_span_list($display.span_list)
            .flatten_event($display.flatten)
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
            .with_thread_ids($display.thread_ids)
            .with_thread_names($display.thread_names)
    }};
}

/// Attaches the timer (or removes timestamps) and installs the subscriber.
macro_rules! install_layer {
    ($layer:expr, $timer:expr, $filter:expr, $scoped:expr) => {
        match $timer {
            Some(timer) => install($filter, $layer.with_timer(timer), $scoped),
            None => install($filter, $layer.without_time(), $scoped),
        }
    };
}
