//! Notifications
//!
//! Components get a [`Notifier`] handed in at construction instead of
//! reaching for a page-global toast function.

/// Toast severity, mapped to a banner color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Info,
    Error,
}

impl Severity {
    /// Severity of a bridge `{status, message}` report
    pub fn from_status(status: &str) -> Self {
        match status {
            "success" => Severity::Success,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "bg-success",
            Severity::Info => "bg-info",
            Severity::Error => "bg-danger",
        }
    }
}

/// Sink for user-facing messages. Messages may contain HTML markup.
pub trait Notifier {
    fn notify(&self, severity: Severity, message: &str);

    fn success(&self, message: &str) {
        self.notify(Severity::Success, message);
    }

    fn info(&self, message: &str) {
        self.notify(Severity::Info, message);
    }

    fn error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }
}

/// Escape text for interpolation into toast markup
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Hüte & Mützen"), "Hüte &amp; Mützen");
        assert_eq!(escape_html("<img src=x onerror=\"a()\">"), "&lt;img src=x onerror=&quot;a()&quot;&gt;");
    }

    #[test]
    fn test_severity_from_status() {
        assert_eq!(Severity::from_status("success"), Severity::Success);
        assert_eq!(Severity::from_status("error"), Severity::Error);
        assert_eq!(Severity::from_status("warning"), Severity::Info);
    }
}
