#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (a, b) = data;
    let forward = debver::compare(a, b);
    let backward = debver::compare(b, a);

    match (forward, backward) {
        (Ok(forward), Ok(backward)) => assert_eq!(forward, backward.reverse()),
        (Err(_), Err(_)) => {}
        (forward, backward) => panic!("{a:?} vs {b:?}: {forward:?} but {backward:?}"),
    }

    if let Ok(ordering) = debver::compare(a, a) {
        assert!(ordering.is_eq());
    }
});
