use super::*;

// -----------------------------------------------------------------------
// fixtures
// -----------------------------------------------------------------------

const REFERENCE: Coordinate = Coordinate::new(40.0, -73.0);

fn make_place(id: &str, name: &str, address: &str, lat_lon: Option<(f64, f64)>) -> RawPlace {
    RawPlace {
        id: Some(id.to_owned()),
        name: Some(name.to_owned()),
        address: Some(address.to_owned()),
        latitude: lat_lon.map(|(lat, _)| lat),
        longitude: lat_lon.map(|(_, lon)| lon),
        categories: Vec::new(),
        phone: None,
        website: None,
    }
}

fn names(restaurants: &[Restaurant]) -> Vec<&str> {
    restaurants.iter().map(|r| r.name.as_str()).collect()
}

// -----------------------------------------------------------------------
// normalize_place
// -----------------------------------------------------------------------

#[test]
fn normalize_place_computes_distance_when_coordinates_present() {
    let place = make_place("p1", "Joe's Pizza", "1 Main St", Some((40.01, -73.0)));
    let r = normalize_place(place, REFERENCE).unwrap();
    let expected = haversine_miles(REFERENCE, Coordinate::new(40.01, -73.0));
    assert!((r.distance_miles.unwrap() - expected).abs() < 1e-12);
    assert_eq!(r.latitude, Some(40.01));
    assert_eq!(r.longitude, Some(-73.0));
}

#[test]
fn normalize_place_missing_coordinates_leaves_distance_unknown() {
    let place = make_place("p1", "Joe's Pizza", "1 Main St", None);
    let r = normalize_place(place, REFERENCE).unwrap();
    assert!(r.distance_miles.is_none());
    assert!(r.latitude.is_none());
}

#[test]
fn normalize_place_colocated_distance_is_zero_not_unknown() {
    let place = make_place("p1", "Joe's Pizza", "1 Main St", Some((40.0, -73.0)));
    let r = normalize_place(place, REFERENCE).unwrap();
    assert_eq!(r.distance_miles, Some(0.0));
}

#[test]
fn normalize_place_half_coordinate_is_dropped() {
    let mut place = make_place("p1", "Joe's Pizza", "1 Main St", Some((40.01, -73.0)));
    place.longitude = None;
    let r = normalize_place(place, REFERENCE).unwrap();
    assert!(r.distance_miles.is_none());
    assert!(r.latitude.is_none());
    assert!(r.longitude.is_none());
}

#[test]
fn normalize_place_non_finite_coordinate_is_dropped() {
    let place = make_place("p1", "Joe's Pizza", "1 Main St", Some((f64::NAN, -73.0)));
    let r = normalize_place(place, REFERENCE).unwrap();
    assert!(r.distance_miles.is_none());
}

#[test]
fn normalize_place_error_when_name_missing() {
    let mut place = make_place("p1", "Joe's Pizza", "1 Main St", None);
    place.name = None;
    let err = normalize_place(place, REFERENCE).unwrap_err();
    let PlacesError::MalformedRecord { id, reason } = err else {
        panic!("expected MalformedRecord, got {err:?}");
    };
    assert_eq!(id, "p1");
    assert!(reason.contains("name"));
}

#[test]
fn normalize_place_error_when_address_blank() {
    let place = make_place("p1", "Joe's Pizza", "   ", None);
    let err = normalize_place(place, REFERENCE).unwrap_err();
    assert!(
        matches!(err, PlacesError::MalformedRecord { ref reason, .. } if reason.contains("address"))
    );
}

#[test]
fn normalize_place_classifies_categories() {
    let mut place = make_place("p1", "Joe's Pizza", "1 Main St", None);
    place.categories = vec![
        "catering.restaurant".to_owned(),
        "catering.restaurant.pizza".to_owned(),
    ];
    let r = normalize_place(place, REFERENCE).unwrap();
    assert_eq!(r.categories, vec!["Pizza"]);
    assert_eq!(r.icon, "pizza");
}

#[test]
fn normalize_place_keeps_display_address_and_cleans_key() {
    let place = make_place("p1", "Joe's Pizza", "Joe's Pizza, 1 Main St", None);
    let r = normalize_place(place, REFERENCE).unwrap();
    assert_eq!(r.address, "Joe's Pizza, 1 Main St");
    assert_eq!(r.cleaned_address, "1 Main St");
}

#[test]
fn normalize_place_derives_id_when_missing() {
    let mut place = make_place("p1", "Joe's Pizza", "1 Main St", None);
    place.id = None;
    let a = normalize_place(place.clone(), REFERENCE).unwrap();
    let b = normalize_place(place, REFERENCE).unwrap();
    assert_eq!(a.id.len(), 64, "SHA-256 hex is 64 chars");
    assert_eq!(a.id, b.id, "derived id must be deterministic");
}

#[test]
fn normalize_place_blank_phone_becomes_none() {
    let mut place = make_place("p1", "Joe's Pizza", "1 Main St", None);
    place.phone = Some(String::new());
    place.website = Some("https://joes.example".to_owned());
    let r = normalize_place(place, REFERENCE).unwrap();
    assert!(r.phone.is_none());
    assert_eq!(r.website.as_deref(), Some("https://joes.example"));
}

// -----------------------------------------------------------------------
// normalize_places
// -----------------------------------------------------------------------

#[test]
fn normalize_places_empty_input_is_empty() {
    assert!(normalize_places(Vec::new(), REFERENCE).is_empty());
}

#[test]
fn normalize_places_dedups_name_prefixed_address() {
    let mut first = make_place("p1", "Joe's Pizza", "Joe's Pizza, 1 Main St", Some((40.01, -73.0)));
    first.categories = vec!["catering.restaurant.pizza".to_owned()];
    let second = make_place("p2", "Joe's Pizza", "1 Main St", Some((40.01, -73.0)));

    let out = normalize_places(vec![first, second], REFERENCE);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "p1", "first record wins");
    assert_eq!(out[0].cleaned_address, "1 Main St");
    assert_eq!(out[0].categories, vec!["Pizza"]);
    let d = out[0].distance_miles.unwrap();
    assert!((d - 0.69).abs() < 0.01, "got {d}");
}

#[test]
fn normalize_places_same_name_different_address_both_kept() {
    let out = normalize_places(
        vec![
            make_place("p1", "Joe's Pizza", "1 Main St", Some((40.01, -73.0))),
            make_place("p2", "Joe's Pizza", "9 Oak Ave", Some((40.02, -73.0))),
        ],
        REFERENCE,
    );
    assert_eq!(out.len(), 2);
}

#[test]
fn normalize_places_dedup_is_case_sensitive_on_name() {
    let out = normalize_places(
        vec![
            make_place("p1", "Joe's Pizza", "1 Main St", None),
            make_place("p2", "JOE'S PIZZA", "1 Main St", None),
        ],
        REFERENCE,
    );
    assert_eq!(out.len(), 2);
}

#[test]
fn normalize_places_sorts_by_distance_with_unknown_last() {
    let out = normalize_places(
        vec![
            make_place("p1", "No Coords", "5 Nowhere Rd", None),
            make_place("p2", "Far", "2 Far St", Some((40.2, -73.0))),
            make_place("p3", "Near", "1 Near St", Some((40.01, -73.0))),
            make_place("p4", "Middle", "3 Mid St", Some((40.1, -73.0))),
        ],
        REFERENCE,
    );
    assert_eq!(names(&out), vec!["Near", "Middle", "Far", "No Coords"]);
}

#[test]
fn normalize_places_ties_keep_input_order() {
    let out = normalize_places(
        vec![
            make_place("p1", "Unknown A", "1 A St", None),
            make_place("p2", "Same B", "2 B St", Some((40.05, -73.0))),
            make_place("p3", "Unknown C", "3 C St", None),
            make_place("p4", "Same D", "4 D St", Some((40.05, -73.0))),
        ],
        REFERENCE,
    );
    assert_eq!(names(&out), vec!["Same B", "Same D", "Unknown A", "Unknown C"]);
}

#[test]
fn normalize_places_drops_malformed_records() {
    let mut nameless = make_place("p1", "x", "1 Main St", Some((40.01, -73.0)));
    nameless.name = None;
    let out = normalize_places(
        vec![nameless, make_place("p2", "Kept", "2 Main St", None)],
        REFERENCE,
    );
    assert_eq!(names(&out), vec!["Kept"]);
}

#[test]
fn normalize_places_output_has_unique_dedup_keys() {
    let input: Vec<RawPlace> = (0..20)
        .map(|i| {
            let name = format!("Venue {}", i % 4);
            let address = if i % 2 == 0 {
                format!("{name}, {} Main St", i % 3)
            } else {
                format!("{} Main St", i % 3)
            };
            let lat = 40.0 + f64::from(i) * 0.001;
            make_place(&format!("p{i}"), &name, &address, Some((lat, -73.0)))
        })
        .collect();

    let out = normalize_places(input, REFERENCE);

    let mut keys = HashSet::new();
    for r in &out {
        assert!(
            keys.insert((r.name.clone(), r.cleaned_address.clone())),
            "duplicate key for {}",
            r.name
        );
    }
    let ids: HashSet<_> = out.iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids.len(), out.len());
}

#[test]
fn normalize_places_repeated_provider_id_gets_derived_id() {
    let out = normalize_places(
        vec![
            make_place("dup", "Alpha", "1 A St", Some((40.01, -73.0))),
            make_place("dup", "Beta", "2 B St", Some((40.02, -73.0))),
        ],
        REFERENCE,
    );

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].id, "dup", "first holder keeps the provider id");
    assert_eq!(out[1].id, derived_id("Beta", "2 B St"));
    assert_ne!(out[0].id, out[1].id);
}

#[test]
fn normalize_places_is_deterministic() {
    let input = vec![
        make_place("p1", "Joe's Pizza", "Joe's Pizza, 1 Main St", Some((40.01, -73.0))),
        make_place("p2", "Joe's Pizza", "1 Main St", None),
        make_place("p3", "Taqueria", "2 Elm St", None),
        make_place("p4", "Diner", "3 Oak St", Some((39.99, -73.01))),
    ];
    let a = normalize_places(input.clone(), REFERENCE);
    let b = normalize_places(input, REFERENCE);
    assert_eq!(a, b);
}

#[test]
fn normalize_places_distance_matches_coordinates() {
    let out = normalize_places(
        vec![
            make_place("p1", "A", "1 A St", Some((40.3, -72.8))),
            make_place("p2", "B", "2 B St", Some((39.7, -73.4))),
        ],
        REFERENCE,
    );
    for r in &out {
        let expected = haversine_miles(REFERENCE, r.coordinate().unwrap());
        assert!((r.distance_miles.unwrap() - expected).abs() < 1e-12);
    }
}

#[test]
fn compare_distance_orders_unknown_last() {
    assert_eq!(compare_distance(Some(1.0), None), Ordering::Less);
    assert_eq!(compare_distance(None, Some(1.0)), Ordering::Greater);
    assert_eq!(compare_distance(None, None), Ordering::Equal);
    assert_eq!(compare_distance(Some(0.0), Some(0.5)), Ordering::Less);
}
