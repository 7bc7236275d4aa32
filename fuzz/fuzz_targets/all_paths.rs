#![no_main]

use libfuzzer_sys::fuzz_target;

use airway::infra::{
    arbitrary::{NetworkInput, QueryInput},
    testing::check_consistency,
};

fuzz_target!(|input: (NetworkInput, QueryInput)| {
    let (network, query) = input;
    let (network, _) = network.build();

    check_consistency(&network)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();

    let Ok(paths) = query.run(&network) else {
        return;
    };

    for itinerary in paths.iter() {
        assert!(itinerary.is_simple());
        assert!(itinerary.hops() <= query.max_hops());
        // The trivial itinerary of a same-city query ignores the budget.
        if let (Some(max_cost), true) = (query.max_cost, itinerary.hops() > 0) {
            assert!(itinerary.total_cost() <= max_cost);
        }
        assert_eq!(itinerary.origin(), paths.source());
        assert_eq!(itinerary.destination(), paths.destination());
    }

    if let Some(limit) = query.limit {
        assert!(paths.len() <= usize::from(limit));
    }
});
