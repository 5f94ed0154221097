#![allow(dead_code)]

use picker_core::{Catalog, DefaultBackend, DefaultCountry};

pub fn country(name: &str, code: &str) -> DefaultCountry {
    DefaultCountry::new(name, code, "")
}

/// A small shuffled catalog spanning several letters.
pub fn catalog() -> Catalog<DefaultBackend> {
    Catalog::new(vec![
        DefaultCountry::new("Cuba", "CU", "+53"),
        DefaultCountry::new("Nigeria", "NG", "+234"),
        DefaultCountry::new("Canada", "CA", "+1"),
        DefaultCountry::new("Ghana", "GH", "+233"),
        DefaultCountry::new("China", "CN", "+86"),
        DefaultCountry::new("Niger", "NE", "+227"),
        DefaultCountry::new("Angola", "AO", "+244"),
        DefaultCountry::new("Algeria", "DZ", "+213"),
    ])
}

pub fn names<'a, I>(countries: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a DefaultCountry>,
{
    countries.into_iter().map(|c| c.name()).collect()
}
