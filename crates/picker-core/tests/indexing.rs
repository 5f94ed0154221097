mod common;

use common::{catalog, country, names};
use picker_core::{DefaultCountry, PickerError, SectionIndex};

#[test]
fn every_country_lands_in_exactly_one_bucket() {
    let catalog = catalog();
    let index = SectionIndex::build(catalog.countries(), &[], None, false);

    let mut indexed: Vec<_> = index.rows().map(|(_, _, c)| c.code()).collect();
    let mut input: Vec<_> = catalog.countries().iter().map(|c| c.code()).collect();
    indexed.sort_unstable();
    input.sort_unstable();
    assert_eq!(indexed, input);
}

#[test]
fn buckets_and_titles_are_sorted() {
    let index = SectionIndex::build(catalog().countries(), &[], None, false);

    assert_eq!(index.titles(), ["A", "C", "G", "N"]);
    for title in index.titles() {
        let bucket = index.bucket(title).unwrap();
        assert!(bucket.windows(2).all(|w| w[0].name() <= w[1].name()));
    }
    assert_eq!(names(index.bucket("C").unwrap()), ["Canada", "China", "Cuba"]);
}

#[test]
fn lowercase_names_share_the_uppercase_bucket() {
    let countries = [country("chad", "TD"), country("Cyprus", "CY")];
    let index = SectionIndex::build(&countries, &[], None, false);
    assert_eq!(index.titles(), ["C"]);
    // Byte order: uppercase sorts before lowercase.
    assert_eq!(names(index.bucket("C").unwrap()), ["Cyprus", "chad"]);
}

#[test]
fn preferred_section_comes_first_verbatim() {
    let preferred = vec![country("Nigeria", "NG"), country("Angola", "AO")];
    let index = SectionIndex::build(catalog().countries(), &preferred, Some("Preferred"), false);

    assert_eq!(index.section_for_title("Preferred").unwrap(), 0);
    assert_eq!(index.title_at(0).unwrap(), "Preferred");
    // Host order is kept, not re-sorted.
    assert_eq!(names(index.section(0).unwrap()), ["Nigeria", "Angola"]);
    assert_eq!(&index.titles()[1..], ["A", "C", "G", "N"]);
}

#[test]
fn preferred_title_overrides_same_named_bucket() {
    let preferred = vec![country("Ghana", "GH")];
    let index = SectionIndex::build(catalog().countries(), &preferred, Some("C"), false);

    assert_eq!(index.title_at(0).unwrap(), "C");
    assert_eq!(index.bucket("C").unwrap(), preferred.as_slice());
    assert_eq!(index.titles().iter().filter(|t| *t == "C").count(), 1);
}

#[test]
fn fast_scroll_titles_never_include_preferred() {
    let preferred = vec![country("Nigeria", "NG")];
    let index = SectionIndex::build(catalog().countries(), &preferred, Some("★"), false);
    assert_eq!(index.titles()[0], "★");
    assert_eq!(index.section_index_titles(), ["A", "C", "G", "N"]);

    let plain = SectionIndex::build(catalog().countries(), &[], Some("★"), false);
    assert_eq!(plain.section_index_titles(), plain.titles());
}

#[test]
fn show_only_preferred_skips_general_sections() {
    let preferred = vec![country("Nigeria", "NG")];
    let index = SectionIndex::build(catalog().countries(), &preferred, Some("Preferred"), true);
    assert_eq!(index.titles(), ["Preferred"]);
    assert!(index.section_index_titles().is_empty());

    let none = SectionIndex::<picker_core::DefaultBackend>::build(
        catalog().countries(),
        &[],
        Some("Preferred"),
        true,
    );
    assert!(none.is_empty());
}

#[test]
fn counts_and_rows() {
    let index = SectionIndex::build(catalog().countries(), &[], None, false);
    assert_eq!(index.section_count(), 4);
    assert_eq!(index.row_count(1).unwrap(), 3);
    assert_eq!(index.country_at(3, 1).unwrap().name(), "Nigeria");
}

#[test]
fn unknown_title_is_recoverable() {
    let index = SectionIndex::build(catalog().countries(), &[], None, false);
    match index.section_for_title("Z") {
        Err(PickerError::TitleNotFound(title)) => assert_eq!(title, "Z"),
        other => panic!("expected TitleNotFound, got {other:?}"),
    }
}

#[test]
fn rebuilding_is_deterministic() {
    let catalog = catalog();
    let preferred: Vec<DefaultCountry> = vec![country("Ghana", "GH")];
    let a = SectionIndex::build(catalog.countries(), &preferred, Some("Preferred"), false);
    let b = SectionIndex::build(catalog.countries(), &preferred, Some("Preferred"), false);
    assert_eq!(a, b);
    assert_eq!(a.titles(), b.titles());
    assert_eq!(
        a.rows().map(|(s, r, c)| (s, r, c.code())).collect::<Vec<_>>(),
        b.rows().map(|(s, r, c)| (s, r, c.code())).collect::<Vec<_>>()
    );
}
