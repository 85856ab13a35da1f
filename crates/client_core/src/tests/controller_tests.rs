use super::*;

fn size(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).expect("non-zero page size")
}

fn tags(names: &[&str]) -> Vec<TagRecord> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| TagRecord::new(*name, 1000 - i as u64))
        .collect()
}

#[test]
fn starts_idle_with_no_generation() {
    let controller = RemoteListController::default();
    assert_eq!(controller.state(), &FetchState::Idle);
    assert_eq!(controller.issued_generation(), 0);
    assert_eq!(controller.snapshot().generation, 0);
}

#[test]
fn fetch_enters_loading_and_carries_current_parameters() {
    let mut controller = RemoteListController::default();
    let ticket = controller.fetch();
    assert_eq!(ticket.generation, 1);
    assert_eq!(ticket.parameters, QueryParameters::default());
    assert!(controller.state().is_loading());
}

#[test]
fn page_index_change_issues_request_for_next_page_number() {
    let mut controller = RemoteListController::default();
    for page_index in [1u32, 7, 250] {
        let ticket = controller
            .set_page_index(page_index)
            .expect("changed page index refetches");
        assert_eq!(ticket.parameters.page_index, page_index);
        assert_eq!(ticket.parameters.page_number(), u64::from(page_index) + 1);
    }
}

#[test]
fn unchanged_values_do_not_refetch() {
    let mut controller = RemoteListController::default();
    assert!(controller.set_page_index(0).is_none());
    assert!(controller.set_page_size(size(10)).is_none());
    assert!(controller.set_sort_field(SortField::Popular).is_none());
    assert!(controller.set_sort_order(SortOrder::Desc).is_none());
    assert_eq!(controller.issued_generation(), 0);
    assert_eq!(controller.state(), &FetchState::Idle);
}

#[test]
fn page_size_change_returns_to_first_page() {
    let mut controller = RemoteListController::default();
    controller.set_page_index(4).expect("page change");
    let ticket = controller.set_page_size(size(50)).expect("size change");
    assert_eq!(ticket.parameters.page_index, 0);
    assert_eq!(ticket.parameters.page_size.get(), 50);
}

#[test]
fn sort_changes_keep_current_page() {
    let mut controller = RemoteListController::default();
    controller.set_page_index(3).expect("page change");

    let ticket = controller.set_sort_field(SortField::Name).expect("field");
    assert_eq!(ticket.parameters.page_index, 3);
    assert_eq!(ticket.parameters.sort_field, SortField::Name);

    let ticket = controller.set_sort_order(SortOrder::Asc).expect("order");
    assert_eq!(ticket.parameters.page_index, 3);
    assert_eq!(ticket.parameters.sort_order, SortOrder::Asc);
}

#[test]
fn success_stores_items_in_response_order() {
    let mut controller = RemoteListController::default();
    let ticket = controller.fetch();
    let items = vec![
        TagRecord::new("zig", 5),
        TagRecord::new("ada", 900),
        TagRecord::new("rust", 40),
    ];
    assert!(controller.settle(ticket.generation, Ok(items.clone())));
    assert_eq!(controller.state(), &FetchState::Success(items));
}

#[test]
fn failures_collapse_to_generic_user_message() {
    let errors = [
        FetchError::Network("dns error".into()),
        FetchError::Response {
            status: 500,
            detail: Some("internal_error: boom".into()),
        },
        FetchError::Parse("expected `,` at line 1".into()),
    ];

    for err in errors {
        let mut controller = RemoteListController::default();
        let ticket = controller.fetch();
        assert!(controller.settle(ticket.generation, Err(err)));
        assert_eq!(
            controller.state(),
            &FetchState::Failure(USER_FAILURE_MESSAGE.to_string())
        );
    }
}

#[test]
fn loading_clears_previous_failure() {
    let mut controller = RemoteListController::default();
    let ticket = controller.fetch();
    controller.settle(ticket.generation, Err(FetchError::Network("reset".into())));
    assert!(controller.state().failure_message().is_some());

    controller.set_page_index(1).expect("page change");
    assert_eq!(controller.state(), &FetchState::Loading);
}

#[test]
fn superseded_response_arriving_last_is_discarded() {
    let mut controller = RemoteListController::default();
    let first = controller.fetch();
    let second = controller.set_page_index(1).expect("page change");

    assert!(controller.settle(second.generation, Ok(tags(&["second"]))));
    assert!(!controller.settle(first.generation, Ok(tags(&["first"]))));

    assert_eq!(controller.state(), &FetchState::Success(tags(&["second"])));
}

#[test]
fn superseded_response_arriving_first_does_not_interrupt_loading() {
    let mut controller = RemoteListController::default();
    let first = controller.fetch();
    let second = controller.set_sort_field(SortField::Name).expect("sort change");

    assert!(!controller.settle(first.generation, Err(FetchError::Network("late".into()))));
    assert_eq!(controller.state(), &FetchState::Loading);

    assert!(controller.settle(second.generation, Ok(Vec::new())));
    assert_eq!(controller.state(), &FetchState::Success(Vec::new()));
}

#[test]
fn empty_page_is_success_not_failure() {
    let mut controller = RemoteListController::default();
    let ticket = controller.fetch();
    controller.settle(ticket.generation, Ok(Vec::new()));
    assert_eq!(controller.state(), &FetchState::Success(Vec::new()));
}
