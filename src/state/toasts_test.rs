use super::*;

#[test]
fn push_queues_in_order() {
    let mut toasts = ToastState::default();
    toasts.push(ToastKind::Success, "saved");
    toasts.push(ToastKind::Error, "failed");
    assert_eq!(toasts.items.len(), 2);
    assert_eq!(toasts.items[0].message, "saved");
    assert_eq!(toasts.items[1].kind, ToastKind::Error);
}

#[test]
fn push_returns_unique_ids() {
    let mut toasts = ToastState::default();
    let a = toasts.push(ToastKind::Info, "one");
    let b = toasts.push(ToastKind::Info, "two");
    assert_ne!(a, b);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut toasts = ToastState::default();
    let first = toasts.push(ToastKind::Info, "one");
    toasts.push(ToastKind::Warning, "two");
    toasts.dismiss(&first);
    assert_eq!(toasts.items.len(), 1);
    assert_eq!(toasts.items[0].message, "two");
}

#[test]
fn dismissing_twice_is_harmless() {
    let mut toasts = ToastState::default();
    let id = toasts.push(ToastKind::Info, "one");
    toasts.dismiss(&id);
    toasts.dismiss(&id);
    assert!(toasts.items.is_empty());
}

#[test]
fn kind_maps_to_css_suffix() {
    assert_eq!(ToastKind::Success.class_suffix(), "success");
    assert_eq!(ToastKind::Error.class_suffix(), "error");
    assert_eq!(ToastKind::Warning.class_suffix(), "warning");
    assert_eq!(ToastKind::Info.class_suffix(), "info");
}
