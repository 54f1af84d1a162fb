#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Binary entry: mounts the dashboard in the browser; natively it only explains how to serve it.

#[cfg(target_arch = "wasm32")]
fn main() {
    taskflow_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn serve_hint(config: &taskflow_ui::core::config::SiteConfig) -> String {
    format!(
        "{} runs in the browser. Serve it with `trunk serve` from crates/taskflow-ui; it mounts into `#{}`.\n",
        config.brand, config.root_element_id
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::Write;
    use taskflow_ui::core::config::SiteConfig;

    let config = SiteConfig::load().unwrap_or_default();
    std::io::stderr().lock().write_all(serve_hint(&config).as_bytes())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use taskflow_ui::core::config::SiteConfig;

    #[test]
    fn hint_names_brand_and_mount_point() {
        let hint = serve_hint(&SiteConfig::default());
        assert!(hint.starts_with("TaskFlow Pro runs in the browser."));
        assert!(hint.contains("`#root`"));
        assert!(hint.contains("trunk serve"));
    }

    #[test]
    fn native_main_completes() -> std::io::Result<()> {
        main()
    }
}
