use super::*;

#[test]
fn fresh_store_reads_empty_session() {
    let store = MemorySessionStore::default();
    assert_eq!(store.get(), Session::default());
}

#[test]
fn set_records_token_and_login_time_together() {
    let store = MemorySessionStore::default();
    store.set("abc", 1_000);
    assert_eq!(
        store.get(),
        Session {
            token: Some("abc".to_owned()),
            login_time_ms: Some(1_000),
        }
    );
}

#[test]
fn clear_removes_both_fields() {
    let store = MemorySessionStore::default();
    store.set("abc", 1_000);
    store.clear();
    assert_eq!(store.get(), Session::default());
}

#[test]
fn clear_is_idempotent() {
    let store = MemorySessionStore::default();
    store.set("abc", 1_000);
    store.clear();
    let after_once = store.get();
    store.clear();
    assert_eq!(store.get(), after_once);
    assert_eq!(store.get(), Session::default());
}
