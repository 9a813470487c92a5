//! Human-readable console sink
//!
//! The `readable` output mode: `[timestamp] [LEVEL] caller - message
//! key=value ...`, with colored levels. Error, panic and fatal records go
//! to stderr, everything else to stdout.

use super::Sink;
use crate::core::error::Result;
use crate::core::field::FieldValue;
use crate::core::level::Level;
use crate::core::timestamp::TimeSource;
use colored::Colorize;

pub struct ConsoleSink {
    use_colors: bool,
    time: TimeSource,
}

impl ConsoleSink {
    pub fn new(time: TimeSource) -> Self {
        Self {
            use_colors: true,
            time,
        }
    }

    pub fn with_colors(time: TimeSource, use_colors: bool) -> Self {
        Self { use_colors, time }
    }

    fn format_line(
        &self,
        level: Level,
        message: &str,
        caller: &str,
        fields: &[(String, FieldValue)],
    ) -> String {
        let level_str = if self.use_colors {
            format!("{:5}", level.as_str().to_uppercase())
                .color(level.color_code())
                .to_string()
        } else {
            format!("{:5}", level.as_str().to_uppercase())
        };

        let mut line = format!(
            "[{}] [{}] {} - {}",
            self.time.now(),
            level_str,
            caller,
            message
        );

        for (key, value) in fields {
            line.push_str(&format!(" {}={}", key, value));
        }

        line
    }
}

impl Sink for ConsoleSink {
    fn log(
        &self,
        level: Level,
        message: &str,
        caller: &str,
        fields: &[(String, FieldValue)],
    ) -> Result<()> {
        let output = self.format_line(level, message, caller, fields);

        match level {
            Level::Error | Level::Panic | Level::Fatal => eprintln!("{}", output),
            _ => println!("{}", output),
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        use std::io::Write;
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_without_colors() {
        let sink = ConsoleSink::with_colors(
            TimeSource::Fixed("2023-11-09T14:48:14.803+0700".to_string()),
            false,
        );

        let fields = vec![
            ("app_name".to_string(), FieldValue::from("sampleApp")),
            ("alert".to_string(), FieldValue::Int(1)),
        ];
        let line = sink.format_line(Level::Warn, "disk almost full", "svc/main.rs:42", &fields);

        assert_eq!(
            line,
            "[2023-11-09T14:48:14.803+0700] [WARN ] svc/main.rs:42 - disk almost full app_name=sampleApp alert=1"
        );
    }

    #[test]
    fn test_colored_line_keeps_content() {
        let sink = ConsoleSink::new(TimeSource::Fixed("t".to_string()));
        let line = sink.format_line(Level::Info, "up", "a/b.rs:1", &[]);
        assert!(line.contains("up"));
        assert!(line.contains("a/b.rs:1"));
    }
}
