#![no_main]
use libfuzzer_sys::fuzz_target;

use fcoded::FrontCodedList;

fuzz_target!(|data: (Vec<Vec<u8>>, u8)| {
    let (input, ratio_raw) = data;
    let ratio = (ratio_raw as usize % 16) + 1;

    let fc = FrontCodedList::new(&input, ratio).unwrap();
    assert_eq!(fc.len(), input.len());

    for (i, expected) in input.iter().enumerate() {
        assert_eq!(fc.array_len(i).unwrap(), expected.len());
        assert_eq!(&fc.get(i).unwrap(), expected);
    }

    let scanned: Vec<Vec<u8>> = fc.iter().collect();
    assert_eq!(&scanned, &input);

    // Fill path with a deliberately small buffer.
    let mut dst = [0u8; 8];
    for (i, expected) in input.iter().enumerate() {
        let r = fc.get_into(i, &mut dst).unwrap();
        if r >= 0 {
            assert_eq!(r as usize, expected.len());
        } else {
            assert_eq!((dst.len() as isize - r) as usize, expected.len());
        }
    }

    let fc2 = FrontCodedList::<u8>::from_bytes(&fc.to_bytes()).unwrap();
    for (i, expected) in input.iter().enumerate() {
        assert_eq!(&fc2.get(i).unwrap(), expected);
    }
});
