use super::*;

#[test]
fn greeting_uses_display_name() {
    assert_eq!(greeting(Some(&demo_identity())), "Welcome back, Demo Household");
}

#[test]
fn greeting_without_identity() {
    assert_eq!(greeting(None), "Welcome");
}
