use super::*;
use crate::state::session::{SESSION_KEY, SessionRecord};
use crate::util::guard::LOGIN_PATH;
use crate::util::storage::MemoryStorage;

/// Run `f` with a logged-in, loading context over `storage`.
fn with_context(storage: &Arc<MemoryStorage>, f: impl FnOnce(AppContext)) {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = AppContext::new(storage.clone());
        ctx.session.update(|s| {
            s.login(SessionRecord::new("u-1", "tok-abc"));
            s.set_loading(true);
        });
        f(ctx);
    });
}

fn current_notice_id(ctx: AppContext) -> Option<u64> {
    ctx.notices.with_untracked(|n| n.current().map(|notice| notice.id))
}

#[test]
fn force_relogin_clears_session_and_loading_and_redirects() {
    let storage = Arc::new(MemoryStorage::new());
    with_context(&storage, |ctx| {
        let target = ctx.handle_api_error(&ApiError::ForceRelogin);

        assert_eq!(target, Some(LOGIN_PATH));
        ctx.session.with_untracked(|s| {
            assert!(!s.session().is_authenticated());
            assert!(!s.loading());
        });
        assert_eq!(storage.get(SESSION_KEY), None);
        let kind = ctx.notices.with_untracked(|n| n.current().map(|notice| notice.kind));
        assert_eq!(kind, Some(NoticeKind::Error));
    });
}

#[test]
fn unauthorized_clears_session_and_redirects() {
    let storage = Arc::new(MemoryStorage::new());
    with_context(&storage, |ctx| {
        assert_eq!(ctx.handle_api_error(&ApiError::Unauthorized), Some(LOGIN_PATH));
        assert!(ctx.session.with_untracked(|s| !s.session().is_authenticated()));
    });
}

#[test]
fn server_error_clears_loading_but_keeps_session() {
    let storage = Arc::new(MemoryStorage::new());
    with_context(&storage, |ctx| {
        let target = ctx.handle_api_error(&ApiError::Server("boom".to_owned()));

        assert_eq!(target, None);
        ctx.session.with_untracked(|s| {
            assert!(s.session().is_authenticated());
            assert!(!s.loading());
        });
        assert!(storage.get(SESSION_KEY).is_some());
        assert!(current_notice_id(ctx).is_some());
    });
}

#[test]
fn invalid_credentials_clears_loading_without_toast() {
    let storage = Arc::new(MemoryStorage::new());
    with_context(&storage, |ctx| {
        let target = ctx.handle_api_error(&ApiError::InvalidCredentials);

        assert_eq!(target, None);
        assert!(!ctx.session.with_untracked(SessionStore::loading));
        assert_eq!(current_notice_id(ctx), None);
    });
}

#[test]
fn report_api_error_leaves_session_state_alone() {
    let storage = Arc::new(MemoryStorage::new());
    with_context(&storage, |ctx| {
        assert_eq!(ctx.report_api_error(&ApiError::Unauthorized), Some(LOGIN_PATH));
        ctx.session.with_untracked(|s| {
            assert!(s.session().is_authenticated());
            assert!(s.loading());
        });
        assert!(current_notice_id(ctx).is_some());
    });
}

#[test]
fn sign_out_removes_persisted_record_and_loading() {
    let storage = Arc::new(MemoryStorage::new());
    with_context(&storage, |ctx| {
        assert!(storage.get(SESSION_KEY).is_some());

        ctx.sign_out();

        assert_eq!(storage.get(SESSION_KEY), None);
        assert_eq!(ctx.access_token_untracked(), None);
        assert!(!ctx.session.with_untracked(SessionStore::loading));
    });
}
