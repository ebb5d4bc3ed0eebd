use roostmap::compute::bucket::dedupe;
use roostmap::compute::classify::classify;
use roostmap::{
    CATCH_ALL_LABEL, Coordinate, CoordinateSelector, OccurrenceRecord, Region, RoostError, select,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn manaus() -> Region {
    Region::new("Manaus", -3.4, -2.8, -60.2, -59.4)
}

fn amazonas() -> Region {
    Region::new("Amazonas", -6.5, 0.5, -66.5, -56.0)
}

/// Deterministic pseudo-random coordinates around the Amazon basin.
fn scattered_records(n: usize) -> Vec<OccurrenceRecord> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let a = (state >> 11) as f64 / (1u64 << 53) as f64;
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let b = (state >> 11) as f64 / (1u64 << 53) as f64;
            // Snap to a coarse grid so duplicates are common.
            let lat = ((-12.0 + a * 14.0) * 20.0).round() / 20.0;
            let lon = ((-70.0 + b * 20.0) * 20.0).round() / 20.0;
            OccurrenceRecord::at(lat, lon)
        })
        .collect()
}

#[test]
fn test_worked_example() {
    init_logging();
    let records = vec![
        OccurrenceRecord::at(-3.0, -59.8),
        OccurrenceRecord::at(-3.0, -59.8),
        OccurrenceRecord::at(-10.0, -55.0),
    ];
    let regions = vec![manaus()];
    let selector = CoordinateSelector::new(&regions, 8, CATCH_ALL_LABEL).unwrap();

    let buckets = selector.buckets(&records);
    assert_eq!(
        buckets.get("Manaus").unwrap().coordinates,
        vec![Coordinate::new(-3.0, -59.8)]
    );
    assert_eq!(
        buckets.catch_all().coordinates,
        vec![Coordinate::new(-3.0, -59.8), Coordinate::new(-10.0, -55.0)]
    );

    let result = selector.select(&records);
    assert_eq!(
        result.coordinates(),
        vec![Coordinate::new(-3.0, -59.8), Coordinate::new(-10.0, -55.0)]
    );
    assert_eq!(result.contributors, vec!["Manaus", "catch-all"]);
}

#[test]
fn test_record_missing_longitude_is_ignored() {
    let records = vec![
        OccurrenceRecord::new(Some(-3.0), None),
        OccurrenceRecord::at(-3.1, -59.9),
    ];
    let regions = vec![manaus()];
    let selector = CoordinateSelector::new(&regions, 1, CATCH_ALL_LABEL).unwrap();

    let buckets = selector.buckets(&records);
    for bucket in &buckets {
        assert!(bucket.coordinates.iter().all(|c| c.lat != -3.0));
    }

    let result = selector.select(&records);
    assert_eq!(result.coordinates(), vec![Coordinate::new(-3.1, -59.9)]);
}

#[test]
fn test_cap_one_with_two_regions() {
    let records = vec![
        OccurrenceRecord::at(-23.5, -46.6), // neither region
        OccurrenceRecord::at(-5.0, -62.0),  // Amazonas only
        OccurrenceRecord::at(-3.1, -59.9),  // Manaus (and Amazonas)
        OccurrenceRecord::at(-3.2, -59.7),  // Manaus (and Amazonas)
    ];
    let result = select(&records, &[manaus(), amazonas()], 1).unwrap();
    assert_eq!(result.coordinates(), vec![Coordinate::new(-3.1, -59.9)]);
    assert_eq!(result.contributors, vec!["Manaus"]);
}

#[test]
fn test_result_never_exceeds_cap() {
    let records = scattered_records(500);
    let regions = vec![manaus(), amazonas()];
    for cap in [0, 1, 2, 3, 8, 20, 100, 1000] {
        let result = select(&records, &regions, cap).unwrap();
        assert!(result.len() <= cap, "cap {cap} produced {}", result.len());
        if cap == 0 {
            assert!(result.contributors.is_empty());
        }
    }
}

#[test]
fn test_selected_values_are_unique() {
    let records = scattered_records(500);
    let result = select(&records, &[manaus(), amazonas()], 1000).unwrap();
    let coords = result.coordinates();
    assert_eq!(dedupe(&coords), coords);
}

#[test]
fn test_priority_credits_highest_region() {
    let records = scattered_records(2000);
    let regions = vec![manaus(), amazonas()];
    let result = select(&records, &regions, 1000).unwrap();

    for pick in &result.picks {
        let expected = regions
            .iter()
            .find(|r| classify(&pick.coordinate, r))
            .map(|r| r.name.as_str())
            .unwrap_or(CATCH_ALL_LABEL);
        assert_eq!(pick.source, expected, "{:?}", pick.coordinate);
    }
}

#[test]
fn test_contributors_follow_priority_order() {
    let records = vec![
        OccurrenceRecord::at(-23.5, -46.6),
        OccurrenceRecord::at(-5.0, -62.0),
        OccurrenceRecord::at(-3.1, -59.9),
    ];
    let result = select(&records, &[manaus(), amazonas()], 8).unwrap();
    assert_eq!(result.contributors, vec!["Manaus", "Amazonas", "catch-all"]);
    assert_eq!(
        result.coordinates(),
        vec![
            Coordinate::new(-3.1, -59.9),
            Coordinate::new(-5.0, -62.0),
            Coordinate::new(-23.5, -46.6),
        ]
    );
}

#[test]
fn test_full_before_catch_all_skips_it() {
    let records = vec![
        OccurrenceRecord::at(-3.1, -59.9),
        OccurrenceRecord::at(-3.2, -59.7),
        OccurrenceRecord::at(-23.5, -46.6),
    ];
    let result = select(&records, &[manaus()], 2).unwrap();
    assert_eq!(result.contributors, vec!["Manaus"]);
}

#[test]
fn test_dedup_is_idempotent_on_real_buckets() {
    let records = scattered_records(800);
    let regions = vec![manaus(), amazonas()];
    let selector = CoordinateSelector::new(&regions, 8, CATCH_ALL_LABEL).unwrap();
    for bucket in &selector.buckets(&records) {
        assert_eq!(dedupe(&bucket.coordinates), bucket.coordinates);
    }
}

#[test]
fn test_malformed_region_is_a_config_error() {
    let regions = vec![manaus(), Region::new("Amazonas", 0.5, -6.5, -66.5, -56.0)];
    assert!(matches!(
        CoordinateSelector::new(&regions, 8, CATCH_ALL_LABEL),
        Err(RoostError::InvalidRegion(_))
    ));
}

#[test]
fn test_selector_shared_across_threads() {
    let regions = vec![manaus(), amazonas()];
    let selector = CoordinateSelector::new(&regions, 8, CATCH_ALL_LABEL).unwrap();
    let inputs: Vec<Vec<OccurrenceRecord>> = (1..=8).map(|n| scattered_records(n * 50)).collect();

    let sequential: Vec<_> = inputs.iter().map(|records| selector.select(records)).collect();
    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|records| scope.spawn(move || selector.select(records)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}
