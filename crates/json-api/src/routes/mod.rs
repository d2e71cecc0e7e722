//! Route groups mounted under fixed path prefixes.

use rustc_hash::FxHashMap;
use salvo::Router;

/// The eleven independently developed route groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Mount {
    Auth,
    Users,
    Catalog,
    Cart,
    Orders,
    Payments,
    Invoices,
    Dispatch,
    Tracking,
    Refunds,
    Reports,
}

impl Mount {
    /// Mount order.
    pub(crate) const ALL: [Self; 11] = [
        Self::Auth,
        Self::Users,
        Self::Catalog,
        Self::Cart,
        Self::Orders,
        Self::Payments,
        Self::Invoices,
        Self::Dispatch,
        Self::Tracking,
        Self::Refunds,
        Self::Reports,
    ];

    /// Path segment the group is mounted under, without the leading slash.
    pub(crate) const fn segment(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Users => "users",
            Self::Catalog => "catalog",
            Self::Cart => "cart",
            Self::Orders => "orders",
            Self::Payments => "payments",
            Self::Invoices => "invoices",
            Self::Dispatch => "dispatch",
            Self::Tracking => "tracking",
            Self::Refunds => "refunds",
            Self::Reports => "reports",
        }
    }

    pub(crate) fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mount| mount.segment() == segment)
    }
}

/// One router per mount, supplied by whoever owns that group.
#[derive(Debug)]
pub(crate) struct RouteGroups {
    groups: FxHashMap<Mount, Router>,
}

impl RouteGroups {
    /// Every group mounted with no routes; all of their paths answer not found.
    pub(crate) fn unpopulated() -> Self {
        Self {
            groups: FxHashMap::default(),
        }
    }

    /// Replace the routes of one group. Paths are relative to the group prefix.
    #[must_use]
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "the binary mounts every group unpopulated")
    )]
    pub(crate) fn with(mut self, mount: Mount, router: Router) -> Self {
        self.groups.insert(mount, router);
        self
    }

    /// Nest every group under its prefix, in [`Mount::ALL`] order.
    pub(crate) fn into_routers(mut self) -> impl Iterator<Item = Router> {
        Mount::ALL.into_iter().map(move |mount| {
            let group = self.groups.remove(&mount).unwrap_or_else(Router::new);

            Router::with_path(mount.segment()).push(group)
        })
    }
}
