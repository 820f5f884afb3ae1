use super::*;

#[test]
fn toast_class_uses_severity_modifier() {
    assert_eq!(toast_class(Severity::Success), "toast toast--success");
    assert_eq!(toast_class(Severity::Error), "toast toast--error");
    assert_eq!(toast_class(Severity::Warning), "toast toast--warning");
    assert_eq!(toast_class(Severity::Info), "toast toast--info");
}
