//! Route groups mounted under `/api`.
//!
//! Each group is a sub-router nested at its own prefix. Paths under a
//! prefix that no group route matches fall through to the global 404.

use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// The named route groups of the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteGroup {
    Auth,
    Rides,
    Users,
    Bookings,
    Payments,
    Payouts,
    Webhooks,
    Receipts,
}

impl RouteGroup {
    /// All groups, in mount order.
    pub const ALL: [RouteGroup; 8] = [
        RouteGroup::Auth,
        RouteGroup::Rides,
        RouteGroup::Users,
        RouteGroup::Bookings,
        RouteGroup::Payments,
        RouteGroup::Payouts,
        RouteGroup::Webhooks,
        RouteGroup::Receipts,
    ];

    /// Group name, also used as the document collection name.
    pub fn name(self) -> &'static str {
        match self {
            RouteGroup::Auth => "auth",
            RouteGroup::Rides => "rides",
            RouteGroup::Users => "users",
            RouteGroup::Bookings => "bookings",
            RouteGroup::Payments => "payments",
            RouteGroup::Payouts => "payouts",
            RouteGroup::Webhooks => "webhooks",
            RouteGroup::Receipts => "receipts",
        }
    }

    /// Mount point, e.g. `/api/rides`.
    pub fn prefix(self) -> &'static str {
        match self {
            RouteGroup::Auth => "/api/auth",
            RouteGroup::Rides => "/api/rides",
            RouteGroup::Users => "/api/users",
            RouteGroup::Bookings => "/api/bookings",
            RouteGroup::Payments => "/api/payments",
            RouteGroup::Payouts => "/api/payouts",
            RouteGroup::Webhooks => "/api/webhooks",
            RouteGroup::Receipts => "/api/receipts",
        }
    }

    /// Singular resource name used in error messages ("Ride not found").
    pub fn resource(self) -> &'static str {
        match self {
            RouteGroup::Auth => "Auth resource",
            RouteGroup::Rides => "Ride",
            RouteGroup::Users => "User",
            RouteGroup::Bookings => "Booking",
            RouteGroup::Payments => "Payment",
            RouteGroup::Payouts => "Payout",
            RouteGroup::Webhooks => "Webhook event",
            RouteGroup::Receipts => "Receipt",
        }
    }

    /// Sub-router serving this group.
    pub fn router(self) -> Router<AppState> {
        match self {
            RouteGroup::Auth => handlers::auth::router(),
            collection => handlers::documents::router(collection),
        }
    }
}

/// Router with every group nested at its prefix.
pub fn api_router() -> Router<AppState> {
    RouteGroup::ALL
        .into_iter()
        .fold(Router::new(), |router, group| {
            router.nest(group.prefix(), group.router())
        })
}
