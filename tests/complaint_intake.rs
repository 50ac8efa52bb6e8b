mod common;

use common::{controller, signed_in, signed_in_with, FixedClassifier, SequenceClassifier};
use nirakshak::portal::intake::{ComplaintStatus, Priority};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

#[test]
fn blank_text_is_ignored() {
    let mut portal = signed_in();
    portal.set_draft("   ".into());
    for text in ["", "   ", "\t\n"] {
        assert!(portal.submit_complaint(text).is_none());
    }
    assert!(portal.complaints().is_empty());
    assert!(portal.banner().is_none());
    assert!(portal.error().is_none());
    // Draft is not touched by a no-op submission.
    assert_eq!(portal.draft(), "   ");
}

#[test]
fn submission_prepends_pending_complaint() {
    let mut portal = signed_in();
    portal.set_draft("pothole on 5th".into());

    let filed = portal
        .submit_complaint("pothole on 5th")
        .expect("complaint filed");

    assert_eq!(portal.complaints().len(), 1);
    let first = portal.complaints().get(0).unwrap();
    assert_eq!(first, &filed);
    assert_eq!(first.text, "pothole on 5th");
    assert_eq!(first.status, ComplaintStatus::Pending);
    assert!(Priority::ALL.contains(&first.priority));
    assert!(!first.date.is_empty());
    assert!(portal.draft().is_empty());
    assert_eq!(portal.banner(), Some(first.priority));
}

#[test]
fn text_is_stored_untrimmed() {
    let mut portal = signed_in();
    let filed = portal.submit_complaint("  streetlight out  ").unwrap();
    assert_eq!(filed.text, "  streetlight out  ");
}

#[test]
fn complaints_are_newest_first() {
    let mut portal = signed_in_with(Box::new(SequenceClassifier::new(vec![
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ])));

    let texts = ["garbage not collected", "water leakage", "power cut", "open drain"];
    for text in texts {
        portal.submit_complaint(text).unwrap();
    }

    let stored: Vec<_> = portal.complaints().iter().map(|c| c.text.as_str()).collect();
    assert_eq!(
        stored,
        vec!["open drain", "power cut", "water leakage", "garbage not collected"]
    );
    assert_eq!(portal.complaints().latest().unwrap().priority, Priority::Critical);
    assert_eq!(portal.banner(), Some(Priority::Critical));

    let ids: Vec<u64> = portal.complaints().iter().map(|c| c.id).collect();
    assert!(ids.windows(2).all(|pair| pair[0] > pair[1]), "ids {ids:?}");
}

#[test]
fn classifier_decides_priority() {
    let mut portal = signed_in_with(Box::new(FixedClassifier(Priority::Critical)));
    let filed = portal.submit_complaint("fallen electric pole").unwrap();
    assert_eq!(filed.priority, Priority::Critical);
}

#[test]
fn duplicate_complaints_are_both_kept() {
    let mut portal = signed_in();
    portal.submit_complaint("same text").unwrap();
    portal.submit_complaint("same text").unwrap();
    assert_eq!(portal.complaints().len(), 2);
}

#[test]
fn submission_requires_a_signed_in_user() {
    let mut portal = controller();
    assert!(portal.submit_complaint("not signed in").is_none());
    assert!(portal.complaints().is_empty());
}

#[test]
fn enter_on_dashboard_submits_draft() {
    let mut portal = signed_in();
    portal.set_draft("broken footpath".into());
    portal.submit_active_form();
    assert_eq!(portal.complaints().len(), 1);
    assert!(portal.draft().is_empty());
}

#[test]
fn banner_stays_without_runtime() {
    let mut portal = signed_in_with(Box::new(FixedClassifier(Priority::Low)));
    portal.set_banner_notifier(Arc::new(|_| {}));
    portal.submit_complaint("no timer here").unwrap();
    assert_eq!(portal.banner(), Some(Priority::Low));
}

// -- banner auto-clear with paused tokio time --------------------------------

type Fired = Arc<Mutex<Vec<u64>>>;

fn record_expiries(portal: &mut nirakshak::portal::PortalController) -> Fired {
    let fired: Fired = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&fired);
    portal.set_banner_notifier(Arc::new(move |generation| sink.lock().push(generation)));
    fired
}

/// Deliver whatever the timer reported, the way the UI loop does.
fn deliver(portal: &mut nirakshak::portal::PortalController, fired: &Fired) {
    let generations: Vec<u64> = fired.lock().drain(..).collect();
    for generation in generations {
        portal.expire_banner(generation);
    }
}

#[tokio::test(start_paused = true)]
async fn banner_clears_after_timeout() {
    let mut portal = signed_in_with(Box::new(FixedClassifier(Priority::High)));
    let fired = record_expiries(&mut portal);
    assert_eq!(portal.banner_timeout(), Duration::from_secs(5));

    portal.submit_complaint("sewage overflow").unwrap();
    tokio::time::sleep(Duration::from_secs(4)).await;
    deliver(&mut portal, &fired);
    assert_eq!(portal.banner(), Some(Priority::High));

    tokio::time::sleep(Duration::from_secs(2)).await;
    deliver(&mut portal, &fired);
    assert_eq!(portal.banner(), None);
    // The complaint itself is untouched.
    assert_eq!(portal.complaints().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn newer_submission_outlives_older_timer() {
    let mut portal = signed_in_with(Box::new(SequenceClassifier::new(vec![
        Priority::Low,
        Priority::Critical,
    ])));
    let fired = record_expiries(&mut portal);

    portal.submit_complaint("first").unwrap();
    tokio::time::sleep(Duration::from_secs(3)).await;
    portal.submit_complaint("second").unwrap();

    // First timer would have fired at t=5s.
    tokio::time::sleep(Duration::from_secs(3)).await;
    deliver(&mut portal, &fired);
    assert_eq!(portal.banner(), Some(Priority::Critical));

    // Second timer fires at t=8s.
    tokio::time::sleep(Duration::from_secs(3)).await;
    deliver(&mut portal, &fired);
    assert_eq!(portal.banner(), None);
}

#[tokio::test(start_paused = true)]
async fn logout_cancels_pending_clear() {
    let mut portal = signed_in_with(Box::new(FixedClassifier(Priority::Medium)));
    let fired = record_expiries(&mut portal);

    portal.submit_complaint("stray cattle").unwrap();
    tokio::time::sleep(Duration::from_secs(2)).await;
    portal.logout();
    assert_eq!(portal.banner(), None);

    portal.login("again@example.com", "pw").unwrap();
    portal.submit_complaint("new session").unwrap();

    // Old timer (t=5s) must not clear the new banner (scheduled at t=2s).
    tokio::time::sleep(Duration::from_secs(4)).await;
    deliver(&mut portal, &fired);
    assert_eq!(portal.banner(), Some(Priority::Medium));

    tokio::time::sleep(Duration::from_secs(2)).await;
    deliver(&mut portal, &fired);
    assert_eq!(portal.banner(), None);
}
