//! Operator-facing banners written by the version checker.
//!
//! Each banner is a block of lines framed by asterisks. Every line is a
//! separate record on the sink so log prefixes stay aligned.

use super::sink::DiagnosticSink;

const BANNER_RULE: &str = "************************************************************";

/// Lines of the Nashorn feature limitation notice.
pub const LIMITATION_NOTICE: &[&str] = &[
    BANNER_RULE,
    "* PlotSquared uses Nashorn for the internal scripting engine.",
    "* Within Java 15, Nashorn has been removed from Java.",
    "* Until we add a suitable workaround, you should stick to Java 11",
    "* to use all features of PlotSquared.",
    BANNER_RULE,
];

/// Build the lines of the outdated-runtime warning for `version`.
pub fn outdated_lines(version: &str) -> Vec<String> {
    vec![
        BANNER_RULE.to_string(),
        "* WARNING - YOU ARE RUNNING AN OUTDATED VERSION OF JAVA.".to_string(),
        "* PLOTSQUARED WILL STOP BEING COMPATIBLE WITH THIS VERSION OF".to_string(),
        "* JAVA WHEN MINECRAFT 1.17 IS RELEASED.".to_string(),
        "*".to_string(),
        "* Please update the version of Java to 11.".to_string(),
        "*".to_string(),
        format!("* Current Java version: {}", version),
        BANNER_RULE.to_string(),
    ]
}

/// Write the outdated-runtime warning naming `version`.
///
/// `version` is the raw string as the runtime reported it, not the parsed
/// major number.
pub fn notify(version: &str, sink: &mut dyn DiagnosticSink) {
    for line in outdated_lines(version) {
        sink.error(&line);
    }
}

/// Write the scripting engine limitation notice.
pub fn notify_limitation(sink: &mut dyn DiagnosticSink) {
    for line in LIMITATION_NOTICE {
        sink.error(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::sink::MockSink;

    #[test]
    fn notify_names_raw_version() {
        let mut sink = MockSink::new();
        notify("1.8.0_271", &mut sink);
        assert_eq!(sink.lines().len(), 9);
        assert_eq!(sink.lines()[7], "* Current Java version: 1.8.0_271");
    }

    #[test]
    fn notify_frames_block_with_rules() {
        let mut sink = MockSink::new();
        notify("8", &mut sink);
        let lines = sink.lines();
        assert_eq!(lines.first().map(String::as_str), Some(BANNER_RULE));
        assert_eq!(lines.last().map(String::as_str), Some(BANNER_RULE));
        assert_eq!(BANNER_RULE.len(), 60);
    }

    #[test]
    fn notify_with_empty_version_keeps_label() {
        let mut sink = MockSink::new();
        notify("", &mut sink);
        assert!(sink
            .lines()
            .contains(&"* Current Java version: ".to_string()));
    }

    #[test]
    fn limitation_notice_mentions_nashorn() {
        let mut sink = MockSink::new();
        notify_limitation(&mut sink);
        assert_eq!(sink.lines().len(), 6);
        assert!(sink.has_line_containing("Nashorn has been removed"));
        assert!(!sink.has_line_containing("OUTDATED"));
    }
}
