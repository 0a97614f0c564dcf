use super::*;

#[test]
fn page_label_reports_position_and_total() {
    let pagination = Pagination { page: 2, pages: 5, total: 48, ..Pagination::default() };
    assert_eq!(page_label(&pagination), "Page 2 of 5 · 48 total");
}

#[test]
fn page_label_never_reports_zero_pages() {
    let pagination = Pagination { page: 1, pages: 0, total: 0, ..Pagination::default() };
    assert_eq!(page_label(&pagination), "Page 1 of 1 · 0 total");
}
