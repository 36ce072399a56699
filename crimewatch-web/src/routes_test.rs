//! Tests for the routing system
//!
//! Validates route definitions, the shareable report deep link, and which
//! navigation items each kind of session sees.

#[cfg(test)]
mod tests {
    use crate::routes::{AdminRoute, AppRoute, MainRoute, NavRoute, main_nav_routes};
    use yew_router::Routable;

    /// Tests main route paths
    #[test]
    fn test_main_route_paths() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(MainRoute::Search.to_path(), "/search");
        assert_eq!(MainRoute::Submit.to_path(), "/submit");
        assert_eq!(MainRoute::Profile.to_path(), "/profile");
        assert_eq!(MainRoute::AdminRoot.to_path(), "/admin");
    }

    /// Tests the shareable deep link round-trips its report id
    #[test]
    fn test_report_deep_link() {
        let route = MainRoute::Report {
            report_id: "7c9e6679-7425-40de-944b-e07fc1f90ae7".to_string(),
        };
        assert_eq!(
            route.to_path(),
            "/report/7c9e6679-7425-40de-944b-e07fc1f90ae7"
        );

        let recognized = MainRoute::recognize("/report/7c9e6679-7425-40de-944b-e07fc1f90ae7");
        assert_eq!(recognized, Some(route));
    }

    /// Tests unknown paths fall through to the not-found route
    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(
            MainRoute::recognize("/no-such-page"),
            Some(MainRoute::NotFound)
        );
    }

    /// Tests admin route paths
    #[test]
    fn test_admin_route_paths() {
        assert_eq!(AdminRoute::CrimeTypes.to_path(), "/admin");
        assert_eq!(AdminRoute::Reports.to_path(), "/admin/reports");
        assert_eq!(
            AdminRoute::recognize("/admin/reports"),
            Some(AdminRoute::Reports)
        );
    }

    /// Tests a regular session sees no admin entry in the nav
    #[test]
    fn test_member_nav_has_no_admin() {
        let routes = main_nav_routes(false);
        assert_eq!(
            routes,
            vec![
                AppRoute::Main(MainRoute::Home),
                AppRoute::Main(MainRoute::Search),
                AppRoute::Main(MainRoute::Submit),
                AppRoute::Main(MainRoute::Profile),
            ]
        );
    }

    /// Tests an admin session additionally sees the admin entry
    #[test]
    fn test_admin_nav_includes_admin() {
        let routes = main_nav_routes(true);
        assert_eq!(routes.len(), 5);
        assert_eq!(
            routes.last(),
            Some(&AppRoute::Main(MainRoute::AdminRoot))
        );
    }

    /// Tests nav metadata for the items the header renders
    #[test]
    fn test_nav_titles() {
        assert_eq!(MainRoute::Home.title(), "Home");
        assert_eq!(MainRoute::Search.title(), "Search");
        assert_eq!(MainRoute::Submit.title(), "Report");
        assert_eq!(MainRoute::Profile.title(), "Profile");
        assert_eq!(AdminRoute::CrimeTypes.title(), "Crime types");
        assert_eq!(AdminRoute::Reports.title(), "Moderation");
    }

    /// Tests route conversions into the shared AppRoute type
    #[test]
    fn test_app_route_conversions() {
        assert_eq!(
            AppRoute::from(MainRoute::Home),
            AppRoute::Main(MainRoute::Home)
        );
        assert_eq!(
            AppRoute::from(AdminRoute::Reports),
            AppRoute::Admin(AdminRoute::Reports)
        );
        assert_eq!(AppRoute::default(), AppRoute::Main(MainRoute::Home));
    }
}
