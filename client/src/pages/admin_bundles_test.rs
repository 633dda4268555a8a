use session::ApiError;

use super::*;

fn bundle(id: &str) -> Bundle {
    Bundle {
        id: id.to_owned(),
        title: None,
        name: None,
        slug: None,
        profile_image_url: None,
        links_count: None,
        theme: None,
        user: None,
        created_at: None,
    }
}

#[test]
fn owner_page_is_a_single_page() {
    let page = owner_page(vec![bundle("1"), bundle("2")]);
    assert_eq!(page.total, 2);
    assert_eq!((page.current_page, page.last_page), (1, 1));
}

#[test]
fn delete_failure_reads_ack() {
    assert_eq!(delete_failure(&Ok(Ack { success: true, message: None })), None);
    assert_eq!(
        delete_failure(&Ok(Ack { success: false, message: Some("Bundle not found".to_owned()) })),
        Some("Bundle not found".to_owned())
    );
    assert_eq!(delete_failure(&Ok(Ack::default())), Some("Failed to delete bundle.".to_owned()));
}

#[test]
fn delete_failure_uses_server_message() {
    let err = ApiError::Status { status: 403, message: Some("Forbidden".to_owned()) };
    assert_eq!(delete_failure(&Err(err)), Some("Forbidden".to_owned()));
    assert_eq!(delete_failure(&Err(ApiError::Unavailable)), Some("Failed to delete bundle.".to_owned()));
}
