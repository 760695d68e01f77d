//! Store behavior: registration, lookup, duplicate rejection.

use std::any::Any;
use std::sync::Arc;

use harbor::{Capabilities, Harbor, HarborConfig, HarborError};

fn harbor() -> Harbor {
    Harbor::new(HarborConfig::default())
}

#[test]
fn register_then_get_returns_same_instance() {
    let harbor = harbor();
    let svc: Arc<dyn Any + Send + Sync> = Arc::new(42u32);

    harbor
        .register("answer", svc.clone(), Capabilities::new())
        .unwrap();

    let got = harbor.get("answer").unwrap();
    assert!(Arc::ptr_eq(&got, &svc));
    assert_eq!(*got.downcast::<u32>().unwrap(), 42);
}

#[test]
fn duplicate_name_is_rejected_and_original_kept() {
    let harbor = harbor();
    let original: Arc<dyn Any + Send + Sync> = Arc::new(String::from("original"));

    harbor
        .register("db", original.clone(), Capabilities::new())
        .unwrap();

    let err = harbor
        .register("db", Arc::new(String::from("impostor")), Capabilities::new())
        .unwrap_err();
    assert!(matches!(err, HarborError::DuplicateName { ref name } if name == "db"));
    assert_eq!(err.as_label(), "duplicate_name");

    let kept = harbor.get("db").unwrap();
    assert!(Arc::ptr_eq(&kept, &original));
}

#[test]
fn get_on_unregistered_name_fails() {
    let harbor = harbor();

    let err = harbor.get("ghost").unwrap_err();
    assert!(matches!(err, HarborError::NotFound { ref name } if name == "ghost"));
    assert_eq!(err.as_label(), "not_found");

    assert!(harbor.get_opt("ghost").is_none());
}

#[test]
fn names_are_sorted_and_contains_reflects_registrations() {
    let harbor = harbor();
    harbor
        .register("zeta", Arc::new(()), Capabilities::new())
        .unwrap();
    harbor
        .register("alpha", Arc::new(()), Capabilities::new())
        .unwrap();

    assert_eq!(harbor.names(), vec!["alpha".to_string(), "zeta".to_string()]);
    assert!(harbor.contains("alpha"));
    assert!(!harbor.contains("omega"));
}
