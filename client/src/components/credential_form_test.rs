use super::*;

#[test]
fn email_label_names_role() {
    assert_eq!(email_label(Role::Student), "Student Email");
    assert_eq!(email_label(Role::Faculty), "Faculty Email");
    assert_eq!(email_label(Role::Admin), "Admin Email");
}
