mod common;

use std::sync::Arc;

use common::{FakeApi, vendors};
use vendor_admin::models::ApprovalStatus;
use vendor_admin::services::{ListController, ListQuery, StatusFilter};
use vendor_admin::store::VendorStore;
use vendor_admin::views::table;

fn controller(api: Arc<FakeApi>) -> (ListController, Arc<VendorStore>) {
    let store = Arc::new(VendorStore::new());
    (ListController::new(api, store.clone()), store)
}

fn pending_query(search: &str) -> ListQuery {
    ListQuery::default()
        .with_search(search)
        .with_status(StatusFilter::Only(ApprovalStatus::Pending))
}

#[tokio::test]
async fn full_page_requests_one_extra_row_and_reports_next() {
    let api = Arc::new(FakeApi::with_vendors(vendors(11, ApprovalStatus::Pending)));
    let (controller, _) = controller(api.clone());

    let page = controller.load_query(pending_query("raj")).await.unwrap();

    let request = api.last_list_request();
    assert_eq!(request.limit, 11);
    assert_eq!(request.offset, 0);
    assert_eq!(request.search, "raj");
    assert_eq!(request.status, Some(ApprovalStatus::Pending));

    assert_eq!(page.vendors.len(), 10);
    assert!(page.has_next_page);

    let controls = table::pagination(&page).unwrap();
    assert_eq!(controls.previous_page, None);
    assert_eq!(controls.next_page, Some(2));
}

#[tokio::test]
async fn short_page_shows_all_rows_and_no_next_control() {
    let api = Arc::new(FakeApi::with_vendors(vendors(3, ApprovalStatus::Pending)));
    let (controller, _) = controller(api);

    let page = controller.load_query(pending_query("raj")).await.unwrap();

    assert_eq!(page.vendors.len(), 3);
    assert!(!page.has_next_page);
    assert_eq!(table::pagination(&page), None);
}

#[tokio::test]
async fn page_two_offsets_by_page_size() {
    let api = Arc::new(FakeApi::with_vendors(vendors(15, ApprovalStatus::Pending)));
    let (controller, _) = controller(api.clone());

    let page = controller.goto_page(2).await.unwrap();

    assert_eq!(api.last_list_request().offset, 10);
    assert_eq!(page.current_page, 2);
    assert_eq!(page.vendors.len(), 5);
    assert!(!page.has_next_page);

    let controls = table::pagination(&page).unwrap();
    assert_eq!(controls.previous_page, Some(1));
    assert_eq!(controls.next_page, None);
}

#[tokio::test]
async fn backend_error_degrades_to_an_empty_page() {
    let api = Arc::new(FakeApi::with_vendors(vendors(5, ApprovalStatus::Pending)));
    api.fail_transport();
    let (controller, store) = controller(api);

    let page = controller.load().await.unwrap();

    assert!(page.vendors.is_empty());
    assert!(!page.has_next_page);
    assert!(store.vendors().is_empty());
}

#[tokio::test]
async fn loaded_page_is_published_to_the_store() {
    let api = Arc::new(FakeApi::with_vendors(vendors(4, ApprovalStatus::Approved)));
    let (controller, store) = controller(api);

    let page = controller.load().await.unwrap();

    let held = store.vendors();
    assert_eq!(held.len(), 4);
    assert_eq!(held[0].id, page.vendors[0].id);
}

#[tokio::test(start_paused = true)]
async fn search_resets_to_the_first_page() {
    let api = Arc::new(FakeApi::with_vendors(vendors(25, ApprovalStatus::Pending)));
    let (controller, _) = controller(api.clone());

    controller.goto_page(3).await.unwrap();
    assert_eq!(api.last_list_request().offset, 20);

    controller.search_input("raj").await.unwrap();

    let request = api.last_list_request();
    assert_eq!(request.offset, 0);
    assert_eq!(request.search, "raj");
    assert_eq!(controller.query().page, 1);
}

#[tokio::test(start_paused = true)]
async fn rapid_keystrokes_collapse_to_one_request() {
    let api = Arc::new(FakeApi::with_vendors(vendors(5, ApprovalStatus::Pending)));
    let (controller, _) = controller(api.clone());

    let (first, second, third) = tokio::join!(
        controller.search_input("r"),
        controller.search_input("ra"),
        controller.search_input("raj"),
    );

    assert!(first.is_none());
    assert!(second.is_none());
    assert!(third.is_some());

    assert_eq!(api.list_calls(), 1);
    assert_eq!(api.last_list_request().search, "raj");
    assert_eq!(controller.query().search, "raj");
}

#[tokio::test(start_paused = true)]
async fn a_stale_response_never_clobbers_a_newer_page() {
    let api = Arc::new(FakeApi::with_vendors(vendors(35, ApprovalStatus::Pending)));
    api.list_delays_ms.lock().unwrap().extend([100, 10]);
    let (controller, store) = controller(api);

    let query = ListQuery::default();
    let (slow, fast) = tokio::join!(
        controller.load_query(query.with_page(2)),
        controller.load_query(query.with_page(3)),
    );

    assert!(slow.is_none());
    assert_eq!(fast.unwrap().current_page, 3);

    let settled = controller.page();
    assert_eq!(settled.current_page, 3);
    assert_eq!(settled.vendors[0].id, store.vendors()[0].id);
    assert_eq!(settled.vendors[0].id, "v20");
}
