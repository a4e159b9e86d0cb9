use super::*;

#[test]
fn welcome_line_greets_submitted_id() {
    assert_eq!(welcome_line("STU001"), "Welcome back, STU001");
    assert_eq!(welcome_line("ADM001"), "Welcome back, ADM001");
}
