//! PostgreSQL integration tests for album membership edits.
//!
//! Run with `ASSETHUB_TEST_DATABASE_URL=postgres://... cargo test -- --ignored`.

mod helpers;

use assethub_core::error::ErrorKind;
use assethub_core::types::pagination::PageRequest;
use assethub_entity::bulk::{BulkIdErrorReason, BulkIdsDto};
use assethub_service::AuthContext;

#[tokio::test]
#[ignore = "requires ASSETHUB_TEST_DATABASE_URL"]
async fn test_add_reports_per_id_results() {
    let t = helpers::TestDb::new().await;
    let owner = t.create_user().await;
    let stranger = t.create_user().await;
    let album = t.create_album(owner).await;
    let mine = t.create_asset(owner, 2).await;
    let other = t.create_asset(owner, 1).await;
    let foreign = t.create_asset(stranger, 1).await;
    let service = t.album_service();
    let auth = AuthContext::user(owner);

    let results = service
        .add_assets(&auth, BulkIdsDto::new(album, [mine, mine, foreign, other]))
        .await
        .expect("add should succeed");

    let reasons: Vec<_> = results.iter().map(|r| r.error).collect();
    assert_eq!(
        reasons,
        vec![
            None,
            Some(BulkIdErrorReason::Duplicate),
            Some(BulkIdErrorReason::NoPermission),
            None,
        ]
    );
    assert_eq!(t.album_asset_count(album).await, 2);
    assert_eq!(t.album_thumbnail(album).await, Some(mine));

    let again = service
        .add_assets(&auth, BulkIdsDto::new(album, [mine, other]))
        .await
        .expect("second add should succeed");
    assert!(again.iter().all(|r| r.error == Some(BulkIdErrorReason::Duplicate)));
    assert_eq!(t.album_asset_count(album).await, 2);

    t.db.close().await;
}

#[tokio::test]
#[ignore = "requires ASSETHUB_TEST_DATABASE_URL"]
async fn test_partner_assets_can_be_added() {
    let t = helpers::TestDb::new().await;
    let owner = t.create_user().await;
    let partner = t.create_user().await;
    t.create_partner(partner, owner).await;
    let album = t.create_album(owner).await;
    let shared = t.create_asset(partner, 1).await;

    let results = t
        .album_service()
        .add_assets(&AuthContext::user(owner), BulkIdsDto::new(album, [shared]))
        .await
        .expect("add should succeed");

    assert!(results[0].success);
    t.db.close().await;
}

#[tokio::test]
#[ignore = "requires ASSETHUB_TEST_DATABASE_URL"]
async fn test_remove_moves_cover_and_lists_newest_first() {
    let t = helpers::TestDb::new().await;
    let owner = t.create_user().await;
    let album = t.create_album(owner).await;
    let oldest = t.create_asset(owner, 30).await;
    let middle = t.create_asset(owner, 20).await;
    let newest = t.create_asset(owner, 10).await;
    let service = t.album_service();
    let auth = AuthContext::user(owner);

    service
        .add_assets(&auth, BulkIdsDto::new(album, [oldest, middle, newest]))
        .await
        .expect("add should succeed");
    assert_eq!(t.album_thumbnail(album).await, Some(oldest));

    let removed = service
        .remove_assets(&auth, BulkIdsDto::new(album, [oldest, oldest]))
        .await
        .expect("remove should succeed");
    assert!(removed[0].success);
    assert_eq!(removed[1].error, Some(BulkIdErrorReason::NotFound));
    assert_eq!(t.album_thumbnail(album).await, Some(newest));

    let page = service
        .get_assets(&auth, album, PageRequest::new(0, 1))
        .await
        .expect("listing should succeed");
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, newest);
    assert!(page.has_next_page);

    t.db.close().await;
}

#[tokio::test]
#[ignore = "requires ASSETHUB_TEST_DATABASE_URL"]
async fn test_viewer_is_rejected_and_editor_allowed() {
    let t = helpers::TestDb::new().await;
    let owner = t.create_user().await;
    let viewer = t.create_user().await;
    let editor = t.create_user().await;
    let album = t.create_album(owner).await;
    t.share_album(album, viewer, "viewer").await;
    t.share_album(album, editor, "editor").await;
    let viewer_asset = t.create_asset(viewer, 1).await;
    let editor_asset = t.create_asset(editor, 1).await;
    let service = t.album_service();

    let err = service
        .add_assets(&AuthContext::user(viewer), BulkIdsDto::new(album, [viewer_asset]))
        .await
        .expect_err("viewer must not add");
    assert!(err.is(ErrorKind::Authorization));

    let results = service
        .add_assets(&AuthContext::user(editor), BulkIdsDto::new(album, [editor_asset]))
        .await
        .expect("editor add should succeed");
    assert!(results[0].success);

    t.db.close().await;
}

#[tokio::test]
#[ignore = "requires ASSETHUB_TEST_DATABASE_URL"]
async fn test_concurrent_adds_leave_one_row_per_asset() {
    let t = helpers::TestDb::new().await;
    let owner = t.create_user().await;
    let album = t.create_album(owner).await;
    let a = t.create_asset(owner, 1).await;
    let b = t.create_asset(owner, 2).await;
    let service = t.album_service();
    let auth = AuthContext::user(owner);

    let (left, right) = tokio::join!(
        service.add_assets(&auth, BulkIdsDto::new(album, [a, b])),
        service.add_assets(&auth, BulkIdsDto::new(album, [b, a])),
    );
    left.expect("left add should succeed");
    right.expect("right add should succeed");

    assert_eq!(t.album_asset_count(album).await, 2);
    t.db.close().await;
}
