//! Custom panic hook for structured crash reports.
//!
//! The engine is total over its inputs, so a panic here means a bug. The
//! report names the innermost tracing span (usually `compare_facilities`)
//! and where the panic happened.

use std::panic::PanicHookInfo;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const WIDTH: usize = 76;

/// Install the custom panic hook. Call early in `main()`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    eprintln!();
    print_rule('╔', '╗');
    print_line("CARECOMPARE CRASH REPORT");
    print_rule('╠', '╣');
    print_line(&format!("Version: {VERSION}"));
    print_line(&format!("Platform: {}", std::env::consts::OS));
    print_rule('╠', '╣');
    print_line(&format!("PANIC: {}", extract_panic_message(info)));
    if let Some(location) = info.location() {
        print_line(&format!(
            "Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        ));
    }
    if let Some(metadata) = Span::current().metadata() {
        print_line(&format!("Span: {}", metadata.name()));
    }
    print_rule('╠', '╣');
    if std::env::var("RUST_BACKTRACE").is_ok() {
        print_line("STACK TRACE:");
        print_rule('╚', '╝');
        eprintln!();
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        print_line("Run with RUST_BACKTRACE=1 for stack trace");
        print_rule('╚', '╝');
    }
}

fn print_rule(left: char, right: char) {
    eprintln!("{left}{}{right}", "═".repeat(WIDTH + 2));
}

fn print_line(text: &str) {
    eprintln!("║ {:<width$} ║", truncate(text, WIDTH), width = WIDTH);
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("this is a long string", 10), "this is...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("Hôpital Saint-Éloi", 8), "Hôpit...");
    }
}
