mod common;

use common::catalog;
use picker_core::{Country, DefaultBackend, PickerConfig, PickerController, PickerError};

#[test]
fn sectioned_view_with_preferred() {
    let cfg = PickerConfig::default().with_preferred("Preferred", &["NG", "GH"]);
    let picker = PickerController::new(&catalog(), cfg).unwrap();

    assert_eq!(picker.number_of_sections(), 5);
    assert_eq!(picker.title_for_header(0).unwrap(), Some("Preferred"));
    assert_eq!(picker.number_of_rows(0).unwrap(), 2);
    assert_eq!(picker.country_for_row(0, 0).unwrap().code(), "NG");
    assert_eq!(picker.section_index_titles().unwrap(), ["A", "C", "G", "N"]);
    assert_eq!(picker.section_for_index_title("G").unwrap(), 3);
}

#[test]
fn stale_fast_scroll_title_after_reload() {
    let mut picker = PickerController::new(&catalog(), PickerConfig::default()).unwrap();
    let strip: Vec<String> = picker.section_index_titles().unwrap().to_vec();
    assert!(strip.contains(&"A".to_string()));

    let smaller: picker_core::Catalog<DefaultBackend> = catalog()
        .countries()
        .iter()
        .filter(|c| !c.name().starts_with('A'))
        .cloned()
        .collect();
    picker.reload(&smaller, PickerConfig::default()).unwrap();

    assert!(matches!(
        picker.section_for_index_title("A"),
        Err(PickerError::TitleNotFound(_))
    ));
}

#[test]
fn selecting_a_search_result_notifies_and_ends_search() {
    let mut picker = PickerController::new(&catalog(), PickerConfig::default()).unwrap();
    picker.update_search("Ch");
    assert_eq!(picker.number_of_rows(0).unwrap(), 1);

    let mut picked: Vec<String> = Vec::new();
    let mut handler = |c: &Country<DefaultBackend>| picked.push(c.code().to_string());
    let chosen = picker.select(0, 0, &mut handler).unwrap();

    assert_eq!(chosen.name(), "China");
    assert_eq!(picked, ["CN"]);
    assert!(!picker.is_search_mode());
}

#[test]
fn selecting_out_of_range_fails_without_notifying() {
    let mut picker = PickerController::new(&catalog(), PickerConfig::default()).unwrap();
    let mut calls = 0;
    let mut handler = |_: &Country<DefaultBackend>| calls += 1;
    let err = picker.select(0, 9, &mut handler).unwrap_err();
    assert!(matches!(err, PickerError::IndexOutOfRange { section: 0, row: 9 }));
    assert_eq!(calls, 0);
}

#[test]
fn checkmark_follows_host_selection() {
    let picker = PickerController::new(&catalog(), PickerConfig::default()).unwrap();
    let selected = picker.country_for_row(1, 1).unwrap().clone();
    assert!(picker.cell(1, 1, Some(&selected)).unwrap().checked);
    assert!(!picker.cell(1, 0, Some(&selected)).unwrap().checked);
    assert!(!picker.cell(1, 1, None).unwrap().checked);
}

#[test]
fn preferred_only_picker_searches_preferred() {
    let cfg = PickerConfig::default()
        .with_preferred("Preferred", &["NG"])
        .show_only_preferred(true);
    let mut picker = PickerController::new(&catalog(), cfg).unwrap();
    assert_eq!(picker.number_of_sections(), 1);
    assert!(picker.section_index_titles().unwrap().is_empty());

    picker.update_search("Nig");
    let found: Vec<_> = picker.search_results().iter().map(|c| c.name()).collect();
    assert_eq!(found, ["Nigeria"]);
}

#[test]
fn cancel_search_restores_sectioned_view() {
    let mut picker = PickerController::new(&catalog(), PickerConfig::default()).unwrap();
    picker.update_search("C");
    assert_eq!(picker.number_of_sections(), 1);
    assert!(picker.section_index_titles().is_none());

    picker.cancel_search();
    assert!(!picker.is_search_mode());
    assert!(picker.search_results().is_empty());
    assert_eq!(picker.number_of_sections(), 4);
    assert_eq!(picker.section_index_titles().unwrap(), ["A", "C", "G", "N"]);
}
