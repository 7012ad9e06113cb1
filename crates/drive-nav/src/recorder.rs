//! After-each hook that records the session marker.

use tracing::debug;

use crate::context::NavigationContext;
use crate::error::NavigationError;
use crate::session;
use crate::table::ResolvedRoute;

/// Why a navigation did not end on its target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationFailure {
    /// The guard cancelled the target.
    Aborted,
    /// The target is the current location.
    Duplicated,
    /// Resolution or redirect following failed.
    Error(NavigationError),
}

/// Records every finished navigation into the session marker.
#[derive(Clone, Copy, Debug, Default)]
pub struct PostNavigationRecorder;

impl PostNavigationRecorder {
    pub fn new() -> Self {
        Self
    }

    /// Overwrite the session marker with `to`'s href.
    ///
    /// Runs for successful, aborted and failed navigations alike; `failure`
    /// is only logged.
    // TODO: decide whether aborted navigations should keep the previous
    // marker once the breadcrumb behavior for cancelled landings is settled.
    pub fn after_each(
        &self,
        to: &ResolvedRoute,
        from: &ResolvedRoute,
        failure: Option<&NavigationFailure>,
        ctx: &mut NavigationContext<'_>,
    ) {
        if let Some(failure) = failure {
            debug!(from = %from.full_path, to = %to.full_path, ?failure, "navigation did not complete");
        }
        session::record(&mut *ctx.session, to.href());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breadcrumb::Breadcrumb;
    use crate::session::MemorySession;
    use crate::table::RouteTable;

    fn record(to: &str, failure: Option<&NavigationFailure>, session: &mut MemorySession) {
        let table = RouteTable::drive();
        let to = table.resolve(to).unwrap();
        let mut trail: Vec<Breadcrumb> = Vec::new();
        let mut ctx = NavigationContext::new(&false, session, &mut trail);
        PostNavigationRecorder::new().after_each(&to, &ResolvedRoute::start(), failure, &mut ctx);
    }

    #[test]
    fn test_records_success() {
        let mut session = MemorySession::new();
        record("/file/abc", None, &mut session);
        assert_eq!(session::marker(&session), "/file/abc");
    }

    #[test]
    fn test_records_regardless_of_failure() {
        let failures = [
            NavigationFailure::Aborted,
            NavigationFailure::Duplicated,
            NavigationFailure::Error(NavigationError::NotFound("/x".to_string())),
        ];
        for failure in &failures {
            let mut session = MemorySession::with_marker("/home");
            record("/file/abc", Some(failure), &mut session);
            assert_eq!(session::marker(&session), "/file/abc");
        }
    }

    #[test]
    fn test_records_full_path_with_query() {
        let mut session = MemorySession::new();
        record("/folder/f1?sort=name", None, &mut session);
        assert_eq!(session::marker(&session), "/folder/f1?sort=name");
    }
}
