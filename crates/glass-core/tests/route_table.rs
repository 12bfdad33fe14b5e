//! End-to-end navigation through the storefront route table.

use glass_core::config::ADMIN_ACCESS_KEY;
use glass_core::{Location, Navigation, Params, RouteError, Router, View, build_router};

fn router() -> Router {
    build_router().expect("route table compiles")
}

fn go(path: &str) -> Navigation {
    router()
        .navigate(&Location::parse(path), None)
        .expect("navigation settles")
}

#[test]
fn unknown_paths_fall_through_to_not_found() {
    for path in ["/bogus/xyz", "/dashboard/nope", "/admin/dashboard/extra", "/products"] {
        let nav = go(path);
        assert_eq!(nav.route.name, Some("not_found"), "{path}");
        assert_eq!(nav.route.view, View::NotFound);
        assert!(!nav.is_redirected());
    }
    assert_eq!(go("/bogus/xyz").route.param("pathMatch"), Some("bogus/xyz"));
}

#[test]
fn root_and_auth_pages() {
    assert_eq!(go("/").route.name, Some("welcome_page"));
    assert_eq!(go("/login").route.view, View::CustomerLogin);
    assert_eq!(go("/signup").route.view, View::CustomerRegister);
    assert_eq!(go("/login/").route.view, View::CustomerLogin);
}

#[test]
fn admin_login_with_key_proceeds() {
    let nav = go(&format!("/admin-login?key={ADMIN_ACCESS_KEY}"));
    assert_eq!(nav.route.name, Some("admin_login"));
    assert_eq!(nav.route.view, View::AdminLogin);
    assert!(!nav.is_redirected());
}

#[test]
fn admin_login_default_key() {
    if option_env!("GLASS_ADMIN_KEY").is_none() {
        assert_eq!(go("/admin-login?key=my-secret-key").route.view, View::AdminLogin);
    }
}

#[test]
fn admin_login_without_key_redirects_home() {
    for path in ["/admin-login", "/admin-login?key=wrong", "/admin-login?other=1"] {
        let nav = go(path);
        assert_eq!(nav.route.name, Some("welcome_page"), "{path}");
        assert_eq!(nav.route.path, "/");
        assert_eq!(nav.redirected_from, Some(Location::parse(path)));
    }
}

#[test]
fn customer_area_defaults_to_home() {
    let nav = go("/dashboard");
    assert_eq!(nav.route.path, "/dashboard/home");
    assert_eq!(nav.route.view, View::Home);
    assert_eq!(nav.route.matched, vec![View::CustomerDashboard, View::Home]);
    assert!(nav.is_redirected());
}

#[test]
fn customer_children() {
    let cases = [
        ("/dashboard/home", "home", View::Home),
        ("/dashboard/doors", "doors", View::Doors),
        ("/dashboard/windows", "windows", View::Windows),
        ("/dashboard/others", "others", View::Others),
        ("/dashboard/track-order", "track order", View::TrackOrder),
        ("/dashboard/user-profile", "user profile", View::ViewUserProfile),
        ("/dashboard/feedback", "feedback rating", View::CustomerFeedbackRating),
    ];
    for (path, name, view) in cases {
        let nav = go(path);
        assert_eq!(nav.route.name, Some(name), "{path}");
        assert_eq!(nav.route.matched, vec![View::CustomerDashboard, view]);
    }
}

#[test]
fn product_detail_resolves_at_root_inside_customer_layout() {
    let nav = go("/product/doors/7");
    assert_eq!(nav.route.name, Some("product detail"));
    assert_eq!(nav.route.param("category"), Some("doors"));
    assert_eq!(nav.route.param("product_id"), Some("7"));
    assert_eq!(
        nav.route.matched,
        vec![View::CustomerDashboard, View::ProductDetail]
    );

    assert_eq!(go("/dashboard/product/doors/7").route.view, View::NotFound);
}

#[test]
fn admin_area_defaults_to_dashboard() {
    let nav = go("/admin");
    assert_eq!(nav.route.path, "/admin/dashboard");
    assert_eq!(nav.route.name, Some("dashboard"));
    assert_eq!(
        nav.route.matched,
        vec![View::AdminDashboard, View::MainDashboard]
    );
}

#[test]
fn admin_children() {
    let cases = [
        ("/admin/recent-activities", View::RecentActivity),
        ("/admin/product-management", View::ProductManagement),
        ("/admin/order-management", View::OrderManagement),
        ("/admin/view-feedback", View::AdminFeedbackRating),
    ];
    for (path, view) in cases {
        assert_eq!(go(path).route.view, view, "{path}");
    }
}

#[test]
fn product_editor_routes() {
    let add = go("/products/add");
    assert_eq!(add.route.view, View::AddUpdateProduct);
    assert_eq!(add.route.view_props(), None);

    let update = go("/products/update/42");
    assert_eq!(update.route.view, View::AddUpdateProduct);
    assert_eq!(
        update.route.view_props().and_then(|p| p.get("id")),
        Some("42")
    );
}

#[test]
fn lookup_by_name() {
    let router = router();
    let record = router.by_name("product detail").expect("record exists");
    assert_eq!(record.name(), Some("product detail"));
    assert_eq!(record.pattern(), "/product/:category/:product_id");

    let child = router.by_name("track order").expect("record exists");
    assert_eq!(child.pattern(), "/dashboard/track-order");

    assert!(router.by_name("missing").is_none());
}

#[test]
fn named_hrefs() {
    let router = router();
    let params: Params = [("category", "windows"), ("product_id", "12")]
        .into_iter()
        .collect();
    assert_eq!(
        router.href("product detail", &params).unwrap(),
        "/product/windows/12"
    );
    assert_eq!(
        router.href("track order", &Params::new()).unwrap(),
        "/dashboard/track-order"
    );
    assert_eq!(router.href("welcome_page", &Params::new()).unwrap(), "/");
    assert!(matches!(
        router.href("product detail", &Params::new()),
        Err(RouteError::MissingParam { .. })
    ));
}
