//! Public routing surface.
//!
//! Five navigable paths plus a legacy redirect and a catch-all.
//! Dashboard panel selection is in-memory UI state and never appears
//! in the path; the only query parameter with meaning is `package` on
//! the contact page.

/// A resolved route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Services,
    Contact {
        /// Package name carried over from the services page, if any.
        package: Option<String>,
    },
    Dashboard,
    NotFound,
}

/// Resolve a request path (with optional query string) to a route.
///
/// `/overview` is the legacy dashboard path and resolves to
/// [`Route::Dashboard`].
pub fn resolve(path: &str) -> Route {
    let (path, query) = match path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (path, None),
    };
    let path = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };

    match path {
        "" | "/" => Route::Home,
        "/services" => Route::Services,
        "/contact" => Route::Contact {
            package: query
                .and_then(|q| query_param(q, "package"))
                // The services page hyphenates the package name before
                // linking here.
                .map(|v| v.replace('-', " ")),
        },
        "/overview" | "/dashboard" => Route::Dashboard,
        _ => Route::NotFound,
    }
}

fn query_param(query: &str, key: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key && !v.is_empty()).then(|| v.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_paths() {
        assert_eq!(resolve("/"), Route::Home);
        assert_eq!(resolve(""), Route::Home);
        assert_eq!(resolve("/services"), Route::Services);
        assert_eq!(resolve("/contact"), Route::Contact { package: None });
        assert_eq!(resolve("/dashboard"), Route::Dashboard);
    }

    #[test]
    fn test_legacy_overview_path_lands_on_dashboard() {
        assert_eq!(resolve("/overview"), Route::Dashboard);
    }

    #[test]
    fn test_unknown_paths_fall_through() {
        assert_eq!(resolve("/pricing"), Route::NotFound);
        assert_eq!(resolve("/dashboard/projects"), Route::NotFound);
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        assert_eq!(resolve("/services/"), Route::Services);
    }

    #[test]
    fn test_contact_package_parameter() {
        assert_eq!(
            resolve("/contact?package=Quad-Plus"),
            Route::Contact {
                package: Some("Quad Plus".to_string()),
            },
        );
        assert_eq!(
            resolve("/contact?utm=x&package=Luxury-Plus"),
            Route::Contact {
                package: Some("Luxury Plus".to_string()),
            },
        );
        assert_eq!(resolve("/contact?package="), Route::Contact { package: None });
    }
}
