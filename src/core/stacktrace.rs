//! Call-stack capture for `with_stack_trace`
//!
//! Produces newline-joined `file:line function` entries. Frames belonging
//! to the capture machinery itself are dropped so the first reported
//! frame is the caller's.

/// Capture the current call stack, skipping `skip` caller frames beyond
/// the capture machinery's own.
#[must_use]
pub fn capture_stack_trace(skip: usize) -> String {
    let bt = backtrace::Backtrace::new();
    let mut lines = Vec::new();
    let mut seen_self = false;

    for frame in bt.frames() {
        for symbol in frame.symbols() {
            let name = symbol
                .name()
                .map(|n| n.to_string())
                .unwrap_or_else(|| "<unknown>".to_string());

            if !seen_self {
                if name.contains("capture_stack_trace") {
                    seen_self = true;
                }
                continue;
            }

            lines.push(format_frame(&name, symbol));
        }
    }

    // Symbol names may be unavailable (stripped binary); fall back to
    // every frame that resolved a source location.
    if lines.is_empty() {
        for frame in bt.frames() {
            for symbol in frame.symbols() {
                if symbol.filename().is_some() {
                    let name = symbol
                        .name()
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| "<unknown>".to_string());
                    lines.push(format_frame(&name, symbol));
                }
            }
        }
    }

    lines
        .into_iter()
        .skip(skip)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_frame(name: &str, symbol: &backtrace::BacktraceSymbol) -> String {
    match (symbol.filename(), symbol.lineno()) {
        (Some(file), Some(line)) => format!("{}:{} {}", file.display(), line, name),
        _ => name.to_string(),
    }
}
