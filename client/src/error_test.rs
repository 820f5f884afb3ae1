use super::*;

#[test]
fn disposed_message_names_store() {
    let err = StoreError::Disposed("session");
    assert_eq!(err.to_string(), "session store used outside its active lifetime");
}

#[test]
fn empty_message_display() {
    assert_eq!(StoreError::EmptyMessage.to_string(), "toast message must not be empty");
}

#[test]
fn corrupt_session_wraps_serde_error() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err = StoreError::from(serde_err);
    assert!(matches!(err, StoreError::CorruptSession(_)));
    assert!(err.to_string().starts_with("persisted session is corrupt: "));
}

#[test]
fn slot_write_names_key_and_reason() {
    let err = StoreError::SlotWrite {
        key: "k".to_owned(),
        reason: "quota exceeded".to_owned(),
    };
    assert_eq!(err.to_string(), "could not write slot k: quota exceeded");
}
