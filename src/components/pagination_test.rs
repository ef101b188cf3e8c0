use super::*;

#[test]
fn window_centers_on_the_current_page() {
    assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
}

#[test]
fn window_clamps_at_the_start() {
    assert_eq!(page_window(0, 10), vec![0, 1, 2]);
    assert_eq!(page_window(1, 10), vec![0, 1, 2, 3]);
}

#[test]
fn window_clamps_at_the_end() {
    assert_eq!(page_window(9, 10), vec![7, 8, 9]);
}

#[test]
fn window_is_empty_without_pages() {
    assert!(page_window(0, 0).is_empty());
}

#[test]
fn single_page_window_is_just_that_page() {
    assert_eq!(page_window(0, 1), vec![0]);
}
