//! `resolve` command: resolve a single import edge.

use anyhow::Result;

use crate::debug;
use crate::resolver::{Resolution, ResolveContext, ResolveRequest, resolve};

/// Resolve `source` (imported from `origin`) and print the outcome.
pub fn run_resolve(
    source: &str,
    origin: Option<&str>,
    hook: bool,
    context: &ResolveContext,
) -> Result<()> {
    let request = match origin {
        Some(origin) => ResolveRequest::with_origin(source, origin),
        None => ResolveRequest::new(source),
    };
    let resolution = resolve(&request, context);
    debug!("resolve"; "{} -> {:?}", source, resolution);

    println!("{}", render(&resolution, hook)?);
    Ok(())
}

/// Text form, or the bundler hook value as compact JSON.
fn render(resolution: &Resolution, hook: bool) -> Result<String> {
    if hook {
        Ok(serde_json::to_string(&resolution.to_hook_value())?)
    } else {
        Ok(resolution.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;

    fn context() -> ResolveContext {
        let mut config = test_config();
        config.resolve.excludes = vec!["chrome://resources/skip.js".to_string()];
        ResolveContext::from_config(&config)
    }

    fn resolve_and_render(source: &str, origin: Option<&str>, hook: bool) -> String {
        let request = match origin {
            Some(origin) => ResolveRequest::with_origin(source, origin),
            None => ResolveRequest::new(source),
        };
        render(&resolve(&request, &context()), hook).unwrap()
    }

    #[test]
    fn test_render_text() {
        assert_eq!(
            resolve_and_render("chrome://resources/js/cr.m.js", None, false),
            "unhandled"
        );
        assert_eq!(
            resolve_and_render("//brave-resources/skip.js", None, false),
            "external chrome://resources/skip.js"
        );
        assert_eq!(
            resolve_and_render(
                "./util",
                Some("/src/brave/ui/webui/resources/sub/page.ts"),
                false
            ),
            "/src/brave/ui/webui/resources/sub/util"
        );
    }

    #[test]
    fn test_render_hook_json() {
        assert_eq!(
            resolve_and_render("chrome://resources/js/cr.m.js", None, true),
            "null"
        );
        assert_eq!(
            resolve_and_render("chrome://brave-resources/skip.js", None, true),
            r#"{"id":"chrome://resources/skip.js","external":true}"#
        );
        assert_eq!(
            resolve_and_render("//brave-resources/page/app.js", None, true),
            r#""/gen/brave/ui/webui/resources/page/app.js""#
        );
    }

    #[test]
    fn test_run_resolve() {
        let context = context();
        assert!(run_resolve("//brave-resources/a.css", None, true, &context).is_ok());
        assert!(run_resolve("./a", Some("/elsewhere/b.ts"), false, &context).is_ok());
    }
}
