//! File locking through the Temporary files lock app (`X-User-Lock: 1`).

use std::fmt;
use std::path::Path;

use crate::config::OwConfig;
use crate::error::OwError;
use crate::webdav::{DavClient, DavRequest, Method, Transport};

use super::files_url_for;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockAction {
    Lock,
    Unlock,
}

impl LockAction {
    fn method(self) -> Method {
        match self {
            LockAction::Lock => Method::Lock,
            LockAction::Unlock => Method::Unlock,
        }
    }
}

impl fmt::Display for LockAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockAction::Lock => f.write_str("lock"),
            LockAction::Unlock => f.write_str("unlock"),
        }
    }
}

/// Places or removes a user lock on `path`. The server owns the lock state.
pub fn lock_or_unlock<T: Transport>(
    cfg: &OwConfig,
    client: &DavClient<'_, T>,
    path: &Path,
    action: LockAction,
) -> Result<(), OwError> {
    let url = files_url_for(cfg, path)?;
    let request = DavRequest::new(action.method(), url).header("X-User-Lock", "1");

    match client.send(&request) {
        Ok(_) => Ok(()),
        Err(OwError::Rejected {
            method,
            url,
            status,
            body,
        }) => Err(OwError::LockRejected {
            action: action.to_string(),
            method,
            url,
            status,
            body,
        }),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::fixture::SyncDir;
    use crate::webdav::testing::FakeTransport;

    #[test]
    fn lock_sends_user_lock_header() {
        let sync = SyncDir::new();
        let path = sync.file("Shared/plan.ods");
        let t = FakeTransport::with(vec![(200, "")]);
        let creds = sync.credentials();

        lock_or_unlock(&sync.cfg, &DavClient::new(&t, &creds), &path, LockAction::Lock).unwrap();

        let requests = t.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Lock);
        assert_eq!(requests[0].header_value("X-User-Lock"), Some("1"));
        assert!(requests[0].body.is_none());
        assert_eq!(
            requests[0].url,
            "http://cloud.test/remote.php/dav/files/admin/Shared/plan.ods"
        );
    }

    #[test]
    fn unlock_uses_unlock_method() {
        let sync = SyncDir::new();
        let path = sync.file("plan.ods");
        let t = FakeTransport::with(vec![(204, "")]);
        let creds = sync.credentials();

        lock_or_unlock(&sync.cfg, &DavClient::new(&t, &creds), &path, LockAction::Unlock).unwrap();
        assert_eq!(t.methods(), vec![Method::Unlock]);
    }

    #[test]
    fn rejection_mentions_lock_app() {
        let sync = SyncDir::new();
        let path = sync.file("plan.ods");
        let t = FakeTransport::with(vec![(405, "Method not allowed")]);
        let creds = sync.credentials();

        let err = lock_or_unlock(&sync.cfg, &DavClient::new(&t, &creds), &path, LockAction::Lock)
            .unwrap_err();
        assert!(matches!(err, OwError::LockRejected { status: 405, .. }));
        let msg = err.to_string();
        assert!(msg.contains("Temporary files lock"));
        assert!(msg.contains("LOCK http://cloud.test/remote.php/dav/files/admin/plan.ods"));
        assert!(msg.contains("Method not allowed"));
    }
}
