use rstest::rstest;

use comment_search::{Capability, CoreError, ParameterRegistry, SortDirection};

use crate::support::catalog;

#[test]
fn every_registered_parameter_round_trips_by_id_and_name() {
    let catalog = catalog();
    let registry = catalog.registry();

    assert_eq!(registry.len(), 13);
    for parameter in registry.parameters() {
        assert_eq!(registry.by_id(parameter.id()), Some(parameter));
        assert_eq!(registry.by_name(parameter.name()), Some(parameter));
    }
}

#[rstest]
#[case(1, "academic_year")]
#[case(2, "course_code")]
#[case(3, "study_year")]
#[case(6, "teacher.KOD")]
#[case(12, "content")]
fn catalog_ids_are_stable(#[case] id: u32, #[case] name: &str) {
    let catalog = catalog();
    assert_eq!(catalog.registry().by_id(id).map(|p| p.name()), Some(name));
}

#[test]
fn ids_are_assigned_from_one_in_registration_order() {
    let mut registry = ParameterRegistry::new();
    let first = registry.register_filterable("first").unwrap();
    let second = registry.register_retrievable("second").unwrap();

    assert_eq!(first.id(), 1);
    assert_eq!(second.id(), 2);
}

#[test]
fn duplicate_name_is_rejected_and_tables_stay_consistent() {
    let mut registry = ParameterRegistry::new();
    let original = registry.register_filterable("course_code").unwrap();

    let error = registry.register_retrievable("course_code").unwrap_err();
    assert!(matches!(error, CoreError::DuplicateParameter { ref name } if name == "course_code"));

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.by_id(2), None);
    assert_eq!(registry.by_name("course_code"), Some(original.parameter()));
}

#[rstest]
#[case("")]
#[case("course code")]
#[case("a]OR[b")]
fn invalid_names_are_rejected(#[case] name: &str) {
    let mut registry = ParameterRegistry::new();
    assert!(matches!(
        registry.register_filterable(name),
        Err(CoreError::InvalidInput(_))
    ));
    assert!(registry.is_empty());
}

#[test]
fn capability_narrowing() {
    let catalog = catalog();
    let registry = catalog.registry();

    assert_eq!(catalog.content.capability(), Capability::RetrieveOnly);
    assert!(catalog.content.as_filterable().is_none());
    assert!(registry.filterable_by_id(catalog.content.id()).is_none());

    assert!(registry.filterable_by_id(catalog.course_code.id()).is_some());
    assert!(catalog.course_code.parameter().as_sortable().is_none());

    assert_eq!(catalog.academic_year.to_filterable().name(), "academic_year");
}

#[rstest]
#[case("academic_year", true)]
#[case("course_code", false)]
#[case("content", false)]
#[case("unknown", false)]
fn sortable_lookup_by_name(#[case] name: &str, #[case] sortable: bool) {
    let catalog = catalog();
    let result = catalog.registry().sortable_by_name(name);
    if sortable {
        assert_eq!(result.unwrap().name(), name);
    } else {
        assert!(matches!(result, Err(CoreError::NotSortable { .. })));
    }
}

#[test]
fn sort_directions_have_their_own_id_space() {
    assert_eq!(SortDirection::Asc.id(), 1);
    assert_eq!(SortDirection::Desc.id(), 2);
    assert_eq!(SortDirection::from_id(2), Some(SortDirection::Desc));
    assert_eq!(SortDirection::from_id(3), None);
    assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
    assert!("ascending".parse::<SortDirection>().is_err());
}
