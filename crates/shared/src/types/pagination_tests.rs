use super::*;
use rstest::rstest;

#[test]
fn test_page_request_default() {
    let request = PageRequest::default();
    assert_eq!(request.page, 1);
    assert_eq!(request.per_page, 10);
}

#[test]
fn test_page_request_new_clamps_to_one() {
    let request = PageRequest::new(0, 0);
    assert_eq!(request.page, 1);
    assert_eq!(request.per_page, 1);
}

#[test]
fn test_page_request_offset() {
    assert_eq!(PageRequest::new(1, 20).offset(), 0);
    assert_eq!(PageRequest::new(2, 20).offset(), 20);
    assert_eq!(PageRequest::new(3, 10).offset(), 20);
}

#[test]
fn test_page_request_limit() {
    assert_eq!(PageRequest::new(1, 50).limit(), 50);
}

#[test]
fn test_third_page_of_twenty_three_records() {
    let request = PageRequest::new(3, 10);
    assert_eq!(request.window(), 20..30);

    let records: Vec<u32> = (0..23).collect();
    assert_eq!(request.slice(&records), &[20, 21, 22]);

    let meta = PageMeta::new(request, 23);
    assert_eq!(meta.total_pages, 3);
    assert!(meta.has_previous());
    assert!(!meta.has_next());
}

#[test]
fn test_slice_past_the_end_is_empty() {
    let records = [1, 2, 3];
    assert!(PageRequest::new(5, 10).slice(&records).is_empty());
}

#[rstest]
#[case(0, 10, 0)]
#[case(1, 10, 1)]
#[case(10, 10, 1)]
#[case(11, 10, 2)]
#[case(25, 10, 3)]
fn test_total_pages(#[case] total: u64, #[case] per_page: u32, #[case] expected: u32) {
    assert_eq!(total_pages(total, per_page), expected);
}

#[test]
fn test_page_response_new() {
    let data = vec![1, 2, 3];
    let response = PageResponse::new(data.clone(), PageRequest::new(1, 10), 3);

    assert_eq!(response.data, data);
    assert_eq!(response.meta.page, 1);
    assert_eq!(response.meta.per_page, 10);
    assert_eq!(response.meta.total, 3);
    assert_eq!(response.meta.total_pages, 1);
}

#[test]
fn test_page_response_map_keeps_meta() {
    let response = PageResponse::new(vec![1, 2], PageRequest::new(2, 2), 4).map(|n| n * 10);
    assert_eq!(response.data, vec![10, 20]);
    assert_eq!(response.meta.total_pages, 2);
}

#[rstest]
#[case(1, 1, None)]
#[case(1, 3, Some(1..=3))]
#[case(1, 10, Some(1..=5))]
#[case(5, 10, Some(3..=7))]
#[case(9, 10, Some(6..=10))]
#[case(10, 10, Some(6..=10))]
fn test_visible_pages(
    #[case] page: u32,
    #[case] total_pages: u32,
    #[case] expected: Option<RangeInclusive<u32>>,
) {
    let meta = PageMeta {
        page,
        per_page: 10,
        total: u64::from(total_pages) * 10,
        total_pages,
    };
    assert_eq!(meta.visible_pages(5), expected);
}

#[test]
fn test_visible_pages_with_huge_window_shows_every_page() {
    let meta = PageMeta {
        page: 3,
        per_page: 10,
        total: 70,
        total_pages: 7,
    };
    assert_eq!(meta.visible_pages(u32::MAX), Some(1..=7));
    assert_eq!(meta.visible_pages(u32::MAX - 1), Some(1..=7));
}

#[test]
fn test_visible_pages_clamps_page_past_the_end() {
    let meta = PageMeta {
        page: 20,
        per_page: 10,
        total: 100,
        total_pages: 10,
    };
    assert_eq!(meta.visible_pages(5), Some(6..=10));
}
