use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "sample_doc=info";
const VERBOSE_DIRECTIVE: &str = "sample_doc=debug,info";

/// Picks the filter directive used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool, configured: Option<&str>) -> String {
    if verbose {
        return VERBOSE_DIRECTIVE.to_string();
    }
    match configured {
        Some(level) if !level.trim().is_empty() => format!("sample_doc={}", level.trim()),
        _ => DEFAULT_DIRECTIVE.to_string(),
    }
}

// stdout carries the fixture report, so logs go to stderr.
pub fn init_cli_logger(verbose: bool, configured: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, configured)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false, None), "sample_doc=info");
        assert_eq!(default_directive(true, Some("warn")), "sample_doc=debug,info");
        assert_eq!(default_directive(false, Some("warn")), "sample_doc=warn");
        assert_eq!(default_directive(false, Some("  ")), "sample_doc=info");
    }
}
