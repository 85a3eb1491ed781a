use clausewise::domain::{StoragePath, UserId};

use crate::helpers::user;

#[test]
fn given_filename_with_separators_when_building_path_then_owner_prefix_is_kept() {
    let alice = user("alice");

    let path = StoragePath::new(&alice, "../etc/passwd");

    assert!(path.as_str().starts_with("alice/"));
    assert!(path.as_str().ends_with("_.._etc_passwd"));
    assert_eq!(path.as_str().matches('/').count(), 1);
    assert!(path.is_owned_by(&alice));
}

#[test]
fn given_raw_path_when_checking_owner_then_only_first_segment_counts() {
    let path = StoragePath::from_raw("alice/123_lease.pdf");

    assert!(path.is_owned_by(&user("alice")));
    assert!(!path.is_owned_by(&user("ali")));
    assert!(!StoragePath::from_raw("alice").is_owned_by(&user("alice")));
}

#[test]
fn given_user_id_that_could_escape_its_prefix_when_parsing_then_it_is_refused() {
    assert!(UserId::parse("bob/x").is_none());
    assert!(UserId::parse("bob\\x").is_none());
    assert!(UserId::parse("..").is_none());
    assert!(UserId::parse("   ").is_none());
    assert!(UserId::parse("bob\n").is_some());
    assert!(UserId::parse("bo\u{7}b").is_none());

    let bob = UserId::parse(" bob ").unwrap();
    assert_eq!(bob.as_str(), "bob");
    assert!(StoragePath::new(&bob, "lease.pdf").is_owned_by(&bob));
}
