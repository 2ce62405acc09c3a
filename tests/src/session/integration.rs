use std::sync::Arc;
use std::time::Duration;

use domcart_common::domain::Domain;
use domcart_common::error::{CartError, CheckError, NoChange};
use domcart_common::status::{Availability, Status};
use domcart_core::cart::Resolution;
use domcart_core::checker::MockChecker;
use domcart_core::session::Session;

use crate::doubles::{BrokenClipboard, ManualChecker, PanickingChecker, RecordingClipboard};

fn domain(s: &str) -> Domain {
    Domain::parse(s).unwrap()
}

fn manual_session() -> (Session, Arc<ManualChecker>, RecordingClipboard) {
    let checker = ManualChecker::new();
    let clipboard = RecordingClipboard::default();
    let session = Session::new(5, checker.clone(), Box::new(clipboard.clone()));
    (session, checker, clipboard)
}

#[tokio::test]
async fn results_apply_in_completion_order() {
    let (mut session, checker, _) = manual_session();
    session.add("first.com").unwrap();
    session.add("second.app").unwrap();
    assert_eq!(session.pending(), 2);

    checker.answer("second.app", Ok(true)).await;
    let resolution = session.settle().await.unwrap();
    assert!(matches!(
        resolution,
        Resolution::Applied { ref domain, availability: Availability::Available, .. }
            if domain.as_str() == "second.app"
    ));
    assert_eq!(session.cart().status(&domain("first.com")), Some(Status::Pending));

    checker.answer("first.com", Ok(false)).await;
    session.settle().await.unwrap();
    assert_eq!(session.cart().status(&domain("first.com")), Some(Status::Unavailable));
    assert_eq!(session.pending(), 0);
    assert!(session.settle().await.is_none());
}

#[tokio::test]
async fn removed_domain_does_not_come_back() {
    let (mut session, checker, _) = manual_session();
    session.add("gone.com").unwrap();
    session.remove("gone.com").unwrap();

    checker.answer("gone.com", Ok(true)).await;
    let resolution = session.settle().await.unwrap();

    assert!(matches!(resolution, Resolution::Stale { .. }));
    assert!(session.cart().is_empty());
    assert_eq!(session.cart().status(&domain("gone.com")), None);
}

#[tokio::test]
async fn re_added_domain_waits_for_its_own_check() {
    let (mut session, checker, _) = manual_session();
    session.add("again.xyz").unwrap();
    session.remove("again.xyz").unwrap();
    session.add("AGAIN.xyz").unwrap();

    checker.answer("again.xyz", Ok(true)).await;
    assert!(matches!(session.settle().await, Some(Resolution::Stale { .. })));
    assert_eq!(session.cart().status(&domain("again.xyz")), Some(Status::Pending));

    checker.answer("again.xyz", Ok(false)).await;
    assert!(matches!(
        session.settle().await,
        Some(Resolution::Applied { availability: Availability::Unavailable, failure: None, .. })
    ));
    assert_eq!(session.cart().status(&domain("again.xyz")), Some(Status::Unavailable));
}

#[tokio::test]
async fn failed_check_is_closed_and_pruned() {
    let (mut session, checker, _) = manual_session();
    session.add("ok.com").unwrap();
    session.add("flaky.com").unwrap();

    checker.answer("ok.com", Ok(true)).await;
    checker
        .answer(
            "flaky.com",
            Err(CheckError {
                domain: "flaky.com".into(),
                reason: "registry timeout".into(),
            }),
        )
        .await;

    let resolutions = session.drain().await;
    assert_eq!(resolutions.len(), 2);
    assert!(resolutions.iter().any(|r| matches!(
        r,
        Resolution::Applied { failure: Some(_), availability: Availability::Unavailable, .. }
    )));
    assert_eq!(session.cart().status(&domain("flaky.com")), Some(Status::Unavailable));

    assert_eq!(session.remove_unavailable().unwrap(), 1);
    assert_eq!(session.cart().domains(), &[domain("ok.com")]);
    assert!(matches!(
        session.remove_unavailable(),
        Err(CartError::NoChange(NoChange::NothingUnavailable))
    ));
}

#[tokio::test]
async fn duplicate_add_keeps_one_entry_and_one_check() {
    let (mut session, _checker, _) = manual_session();
    session.add("same.com").unwrap();
    assert!(matches!(session.add("Same.COM"), Err(CartError::Duplicate(_))));
    assert_eq!(session.cart().len(), 1);
    assert_eq!(session.pending(), 1);
}

#[tokio::test]
async fn copy_all_writes_joined_list() {
    let (mut session, _checker, clipboard) = manual_session();

    assert!(matches!(session.copy_all(), Err(CartError::EmptyCart)));
    assert!(clipboard.writes.lock().unwrap().is_empty());

    session.add("b.com").unwrap();
    session.add("a.app").unwrap();
    assert_eq!(session.copy_all().unwrap(), 2);
    assert_eq!(*clipboard.writes.lock().unwrap(), vec!["b.com, a.app".to_string()]);
}

#[tokio::test]
async fn clipboard_failure_is_distinct_from_empty_cart() {
    let checker = ManualChecker::new();
    let mut session = Session::new(5, checker, Box::new(BrokenClipboard));

    assert!(matches!(session.copy_all(), Err(CartError::EmptyCart)));
    session.add("a.com").unwrap();
    assert!(matches!(session.copy_all(), Err(CartError::ClipboardFailure(_))));
}

#[tokio::test]
async fn trim_to_target_then_purchase() {
    let checker = Arc::new(MockChecker::new(Duration::ZERO, 1.0, Some(42)));
    let mut session = Session::new(5, checker, Box::new(RecordingClipboard::default()));

    for d in ["a.com", "ab.com", "abc.xyz", "super-long-name.app", "x.com", "zz.app", "q.xyz"] {
        session.add(d).unwrap();
    }
    assert!(matches!(session.purchase(), Err(CartError::NotReady { have: 7, need: 5 })));

    session.drain().await;
    assert!(session.cart().entries().all(|(_, s)| s == Status::Available));

    let dropped = session.keep_best().unwrap();
    let dropped: Vec<&str> = dropped.iter().map(Domain::as_str).collect();
    assert_eq!(dropped, ["q.xyz", "abc.xyz"]);
    assert_eq!(session.progress().percent, 100.0);
    assert_eq!(session.purchase().unwrap(), 5);
}

#[tokio::test]
async fn panicking_checker_still_settles_as_unavailable() {
    let mut session = Session::new(
        5,
        Arc::new(PanickingChecker),
        Box::new(RecordingClipboard::default()),
    );
    session.add("boom.com").unwrap();

    let resolutions = tokio::time::timeout(Duration::from_secs(5), session.drain())
        .await
        .expect("drain must not hang on a panicking checker");

    assert_eq!(resolutions.len(), 1);
    assert!(matches!(
        resolutions[0],
        Resolution::Applied { failure: Some(_), availability: Availability::Unavailable, .. }
    ));
    assert_eq!(session.pending(), 0);
    assert_eq!(session.cart().status(&domain("boom.com")), Some(Status::Unavailable));
}

#[tokio::test]
async fn surrounding_whitespace_is_trimmed_before_validation() {
    let (mut session, _checker, _) = manual_session();
    assert_eq!(session.add(" padded.com ").unwrap().as_str(), "padded.com");
    assert!(matches!(session.add("   "), Err(CartError::EmptyInput)));
}
