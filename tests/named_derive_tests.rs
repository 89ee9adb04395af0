//! Integration tests for the Named derive macro.

use std::cmp::Ordering;

use rstest::rstest;
use sortkit::collections::SortedSet;
use sortkit::comparable::Comparable;
use sortkit::named::Named;

// =============================================================================
// Test Types
// =============================================================================

#[derive(Debug, Clone, Named)]
struct Country {
    name: String,
    population: u64,
}

impl Country {
    fn new(name: &str, population: u64) -> Self {
        Self {
            name: name.to_string(),
            population,
        }
    }
}

#[derive(Debug, Clone, Named)]
struct Tag(u32, #[named] &'static str);

#[derive(Debug, Clone, Named)]
#[named(equals = Account::same_number)]
struct Account {
    #[named]
    holder: String,
    number: u32,
}

impl Account {
    fn new(holder: &str, number: u32) -> Self {
        Self {
            holder: holder.to_string(),
            number,
        }
    }

    fn same_number(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

#[derive(Debug, Clone, Named)]
struct Labelled<T> {
    name: String,
    payload: T,
}

// =============================================================================
// Name Field Selection
// =============================================================================

#[rstest]
fn test_derive_reads_name_field() {
    let country = Country::new("Österreich", 9_000_000);
    assert_eq!(country.name(), "Österreich");
    assert_eq!(country.population, 9_000_000);
}

#[rstest]
fn test_derive_reads_marked_tuple_field() {
    let tag = Tag(1, "rust");
    assert_eq!(tag.name(), "rust");
    assert_eq!(tag.0, 1);
}

#[rstest]
fn test_derive_reads_marked_named_field() {
    let account = Account::new("Ada", 7);
    assert_eq!(account.name(), "Ada");
}

#[rstest]
fn test_derive_supports_generic_types() {
    let left = Labelled {
        name: "alpha".to_string(),
        payload: 1_u8,
    };
    let right = Labelled {
        name: "ALPHA".to_string(),
        payload: 2_u8,
    };

    assert!(left.equals(&right));
    assert_eq!(left.payload + right.payload, 3);
}

// =============================================================================
// Comparison
// =============================================================================

#[rstest]
#[case("Zürich", "zurich", Ordering::Equal)]
#[case("Ångström", "angstrom", Ordering::Equal)]
#[case("apple", "Banana", Ordering::Less)]
#[case("éclair", "dough", Ordering::Greater)]
fn test_compare_to_ignores_case_and_accents(
    #[case] left: &str,
    #[case] right: &str,
    #[case] expected: Ordering,
) {
    let left = Country::new(left, 0);
    let right = Country::new(right, 0);
    assert_eq!(left.compare_to(&right), expected);
}

#[rstest]
#[case("France", "FRANCE", true)]
#[case("Curaçao", "curacao", true)]
#[case("France", "Spain", false)]
#[case("", "", false)]
#[case("   ", "   ", false)]
fn test_equals_uses_names(#[case] left: &str, #[case] right: &str, #[case] expected: bool) {
    assert_eq!(
        Country::new(left, 0).equals(&Country::new(right, 1)),
        expected
    );
}

#[rstest]
fn test_equals_override_replaces_name_equality() {
    let first = Account::new("Ada", 7);
    let same_holder = Account::new("ada", 8);
    let same_number = Account::new("Grace", 7);

    assert!(!first.equals(&same_holder));
    assert!(first.equals(&same_number));
    assert_eq!(first.compare_to(&same_holder), Ordering::Equal);
    assert_eq!(first.compare_to(&same_number), Ordering::Less);
}

// =============================================================================
// SortedSet Integration
// =============================================================================

#[rstest]
fn test_named_elements_in_sorted_set() {
    let mut countries = SortedSet::new();
    countries
        .add(Country::new("Norway", 5))
        .add(Country::new("austria", 9))
        .add(Country::new("Åland", 0))
        .add(Country::new("NORWAY", 6));

    let names: Vec<&str> = countries.iter().map(Named::name).collect();
    assert_eq!(names, vec!["Åland", "austria", "Norway"]);
    assert_eq!(countries.iter().last().map(|country| country.population), Some(5));
}

#[rstest]
fn test_blank_names_are_never_merged() {
    let mut countries = SortedSet::new();
    countries.add(Country::new("", 1)).add(Country::new("", 2));

    assert_eq!(countries.size(), 2);
    assert!(!countries.has(&Country::new("", 1)));
}

#[rstest]
fn test_override_keeps_accounts_with_shared_holder() {
    let mut accounts: SortedSet<Account> = [
        Account::new("Grace", 2),
        Account::new("Ada", 1),
        Account::new("ada", 3),
    ]
    .into_iter()
    .collect();

    let numbers: Vec<u32> = accounts.iter().map(|account| account.number).collect();
    assert_eq!(numbers, vec![3, 1, 2]);
    assert!(accounts.has(&Account::new("someone else", 3)));

    accounts.add(Account::new("ADA", 3));
    assert_eq!(accounts.size(), 3);
}
