//! Path resolution command

use anyhow::Result;
use tracing::info;
use waypoint_core::{Resolution, Router};

/// Resolve each path against the route table
pub fn resolve_command(router: &Router, paths: &[String]) -> Result<()> {
    info!(count = paths.len(), "Resolving paths");

    for path in paths {
        println!("{}", describe_resolution(path, &router.resolve(path)));
    }

    Ok(())
}

/// One output line: `path -> View(Name) [RouteName]` or `path -> redirect /`
pub fn describe_resolution(path: &str, resolution: &Resolution<'_>) -> String {
    let route_name = resolution
        .route()
        .and_then(|route| route.name.as_deref())
        .map(|name| format!(" [{name}]"))
        .unwrap_or_default();
    let shown = if path.is_empty() { "\"\"" } else { path };
    format!("{shown} -> {resolution}{route_name}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_core::{BuildProfile, SiteConfig};

    fn router() -> Router {
        Router::new(
            SiteConfig::default()
                .router_config(BuildProfile::Development)
                .unwrap(),
        )
    }

    #[test]
    fn test_describe_view_and_redirect() {
        let router = router();
        assert_eq!(
            describe_resolution("/admin", &router.resolve("/admin")),
            "/admin -> View(AdminDashboard) [Admin]"
        );
        assert_eq!(
            describe_resolution("/unknown/x", &router.resolve("/unknown/x")),
            "/unknown/x -> redirect /"
        );
        assert_eq!(
            describe_resolution("", &router.resolve("")),
            "\"\" -> View(SignupForm) [Home]"
        );
    }
}
