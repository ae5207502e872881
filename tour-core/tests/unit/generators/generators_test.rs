use super::*;

#[test]
fn can_generate_regular_n_gon() {
    let country = regular_n_gon(6, 10.).unwrap();

    assert_eq!(country.n_depots(), 1);
    assert_eq!(country.n_settlements(), 6);
    assert_eq!(country.regions(), vec![DEFAULT_REGION]);

    let depot = &country.depots()[0];
    country.settlements().iter().for_each(|settlement| {
        assert!((depot.distance_to(settlement) - 10.).abs() < 1E-9);
    });
}

#[test]
fn can_space_n_gon_settlements_evenly() {
    let country = regular_n_gon(4, 10.).unwrap();
    let settlements = country.settlements();

    for idx in 0..settlements.len() {
        let next = &settlements[(idx + 1) % settlements.len()];
        assert!((settlements[idx].distance_to(next) - 200_f64.sqrt()).abs() < 1E-9);
    }
}

#[test]
fn can_generate_n_gon_without_settlements() {
    let country = regular_n_gon(0, 10.).unwrap();

    assert_eq!(country.locations().len(), 1);
}

#[test]
fn can_reject_negative_n_gon_radius() {
    assert!(matches!(regular_n_gon(3, -1.), Err(TourError::Validation { field: "radius", .. })));
}

#[test]
fn can_generate_reproducible_random_country() {
    let first = random_country(20, 3, 4, 100., 42).unwrap();
    let second = random_country(20, 3, 4, 100., 42).unwrap();

    assert_eq!(first.n_settlements(), 20);
    assert_eq!(first.n_depots(), 3);
    assert!(first.regions().len() <= 4);
    assert!(first.locations().iter().zip(second.locations().iter()).all(|(a, b)| {
        a == b && a.position() == b.position()
    }));
    assert!(first.locations().iter().all(|location| match *location.position() {
        Position::Polar { r, .. } => r <= 100.,
        Position::Cartesian { .. } => false,
    }));
}

#[test]
fn can_reject_random_country_without_regions() {
    assert!(matches!(random_country(2, 1, 0, 10., 0), Err(TourError::Validation { field: "regions", .. })));
}
