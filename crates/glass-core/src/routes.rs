//! The storefront route table.
//!
//! | Path | Name | View |
//! |---|---|---|
//! | `/admin-login?key=…` | `admin_login` | [`View::AdminLogin`] (guarded) |
//! | `/:pathMatch(.*)*` | `not_found` | [`View::NotFound`] |
//! | `/` | `welcome_page` | [`View::WelcomePage`] |
//! | `/login`, `/signup` | `login`, `signup` | customer auth |
//! | `/dashboard/*` | `customer dashboard` | customer area, defaults to `home` |
//! | `/product/:category/:product_id` | `product detail` | inside the customer layout |
//! | `/admin/*` | `admin` | admin area, defaults to `dashboard` |
//! | `/products/add`, `/products/update/:id` | — | [`View::AddUpdateProduct`] |

use crate::config::{ADMIN_ACCESS_KEY, ADMIN_KEY_PARAM, ADMIN_LOGIN_FALLBACK};
use crate::error::RouteError;
use crate::route::{RouteEntry, Router, SharedKeyGuard};

/// Every page the router can mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    NotFound,
    WelcomePage,
    CustomerLogin,
    CustomerRegister,
    /// Customer area layout.
    CustomerDashboard,
    Home,
    Doors,
    Windows,
    Others,
    TrackOrder,
    ViewUserProfile,
    CustomerFeedbackRating,
    ProductDetail,
    AdminLogin,
    /// Admin area layout.
    AdminDashboard,
    MainDashboard,
    RecentActivity,
    ProductManagement,
    OrderManagement,
    AdminFeedbackRating,
    AddUpdateProduct,
}

impl View {
    /// Human-readable page title.
    pub fn title(self) -> &'static str {
        match self {
            Self::NotFound => "Page Not Found",
            Self::WelcomePage => "Welcome",
            Self::CustomerLogin => "Log In",
            Self::CustomerRegister => "Sign Up",
            Self::CustomerDashboard => "My Dashboard",
            Self::Home => "Home",
            Self::Doors => "Doors",
            Self::Windows => "Windows",
            Self::Others => "Other Products",
            Self::TrackOrder => "Track Order",
            Self::ViewUserProfile => "My Profile",
            Self::CustomerFeedbackRating => "Feedback",
            Self::ProductDetail => "Product Details",
            Self::AdminLogin => "Admin Login",
            Self::AdminDashboard => "Admin",
            Self::MainDashboard => "Dashboard",
            Self::RecentActivity => "Recent Activities",
            Self::ProductManagement => "Product Management",
            Self::OrderManagement => "Order Management",
            Self::AdminFeedbackRating => "Customer Feedback",
            Self::AddUpdateProduct => "Product Editor",
        }
    }

    /// Product category listed by a catalog page.
    pub fn category(self) -> Option<&'static str> {
        match self {
            Self::Doors => Some("doors"),
            Self::Windows => Some("windows"),
            Self::Others => Some("others"),
            _ => None,
        }
    }
}

/// Declare the storefront routes.
pub fn route_table() -> Vec<RouteEntry> {
    vec![
        RouteEntry::named("admin_login", "/admin-login", View::AdminLogin).with_guard(
            SharedKeyGuard::new(ADMIN_KEY_PARAM, ADMIN_ACCESS_KEY, ADMIN_LOGIN_FALLBACK),
        ),
        RouteEntry::named("not_found", "/:pathMatch(.*)*", View::NotFound),
        RouteEntry::named("welcome_page", "/", View::WelcomePage),
        RouteEntry::named("login", "/login", View::CustomerLogin),
        RouteEntry::named("signup", "/signup", View::CustomerRegister),
        RouteEntry::named("customer dashboard", "/dashboard", View::CustomerDashboard)
            .with_redirect("/dashboard/home")
            .with_children(vec![
                RouteEntry::named("home", "home", View::Home),
                RouteEntry::named("doors", "doors", View::Doors),
                RouteEntry::named("windows", "windows", View::Windows),
                RouteEntry::named("others", "others", View::Others),
                RouteEntry::named("track order", "track-order", View::TrackOrder),
                RouteEntry::named("user profile", "user-profile", View::ViewUserProfile),
                RouteEntry::named("feedback rating", "feedback", View::CustomerFeedbackRating),
                // Absolute: resolves at the root, rendered inside the customer layout.
                RouteEntry::named(
                    "product detail",
                    "/product/:category/:product_id",
                    View::ProductDetail,
                ),
            ]),
        RouteEntry::named("admin", "/admin", View::AdminDashboard)
            .with_redirect("/admin/dashboard")
            .with_children(vec![
                RouteEntry::named("dashboard", "dashboard", View::MainDashboard),
                RouteEntry::named("recent activities", "recent-activities", View::RecentActivity),
                RouteEntry::named(
                    "product management",
                    "product-management",
                    View::ProductManagement,
                ),
                RouteEntry::named("order management", "order-management", View::OrderManagement),
                RouteEntry::named("view feedback", "view-feedback", View::AdminFeedbackRating),
            ]),
        RouteEntry::new("/products/add", View::AddUpdateProduct),
        RouteEntry::new("/products/update/:id", View::AddUpdateProduct).with_props(),
    ]
}

/// Compile [`route_table`] into a [`Router`].
pub fn build_router() -> Result<Router, RouteError> {
    Router::new(route_table())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_compiles() {
        let router = build_router().unwrap();
        assert_eq!(router.records().len(), 22);
    }

    #[test]
    fn test_categories() {
        assert_eq!(View::Doors.category(), Some("doors"));
        assert_eq!(View::Windows.category(), Some("windows"));
        assert_eq!(View::Others.category(), Some("others"));
        assert_eq!(View::TrackOrder.category(), None);
    }
}
