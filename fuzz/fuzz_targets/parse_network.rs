#![no_main]

use libfuzzer_sys::fuzz_target;

use airway::infra::{
    parse::{parse_network, write_network},
    testing::check_consistency,
};

fuzz_target!(|input: &str| {
    let Ok(network) = parse_network(input) else {
        return;
    };

    check_consistency(&network)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();

    let reparsed = parse_network(&write_network(&network)).unwrap();
    assert_eq!(reparsed, network);
});
