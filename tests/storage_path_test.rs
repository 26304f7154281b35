use semporna::domain::{StoragePath, UserId};

#[test]
fn given_owner_and_file_name_when_creating_path_then_format_is_owner_slash_millis_name() {
    let owner = UserId::new();
    let path = StoragePath::for_upload(owner, "visit.mp3", 1700000000000);

    let expected = format!("{}/1700000000000_visit.mp3", owner.as_uuid());
    assert_eq!(path.as_str(), expected);
}

#[test]
fn given_file_name_with_spaces_and_symbols_when_creating_path_then_they_become_underscores() {
    let owner = UserId::new();
    let path = StoragePath::for_upload(owner, "salon visit (tuesday).mp3", 42);

    let expected = format!("{}/42_salon_visit__tuesday_.mp3", owner.as_uuid());
    assert_eq!(path.as_str(), expected);
}

#[test]
fn given_non_ascii_file_name_when_creating_path_then_characters_are_replaced() {
    let owner = UserId::new();
    let path = StoragePath::for_upload(owner, "デモ音声.mp3", 42);

    let expected = format!("{}/42_____.mp3", owner.as_uuid());
    assert_eq!(path.as_str(), expected);
}

#[test]
fn given_two_uploads_at_different_times_when_creating_paths_then_paths_differ() {
    let owner = UserId::new();

    let first = StoragePath::for_upload(owner, "visit.mp3", 1000);
    let second = StoragePath::for_upload(owner, "visit.mp3", 2000);

    assert_ne!(first, second);
}

#[test]
fn given_storage_path_when_displayed_then_matches_as_str() {
    let owner = UserId::new();
    let path = StoragePath::for_upload(owner, "visit.mp3", 1000);

    assert_eq!(format!("{}", path), path.as_str());
}
