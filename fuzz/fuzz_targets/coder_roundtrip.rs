#![no_main]
use huffc::HuffmanCoder;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, String)| {
    let (train, noise) = data;

    let coder = match HuffmanCoder::new(&train) {
        Ok(coder) => coder,
        Err(_) => return, // no eligible symbols to train on
    };

    // Encode drops untrained characters, so decoding must restore exactly
    // the eligible subsequence of the input.
    let eligible: String = train
        .chars()
        .filter(|&c| coder.code_table().code(c).is_some())
        .collect();
    let bits = coder.encode(&train);

    assert!(bits.chars().all(|c| c == '0' || c == '1'));
    assert_eq!(coder.encoded_len(&train), bits.len());
    assert_eq!(coder.decode(&bits), eligible);

    // Arbitrary input to decode must never panic, and whatever it yields
    // has to be made of trained symbols.
    let out = coder.decode(&noise);
    for c in out.chars() {
        assert!(
            coder.code_table().code(c).is_some(),
            "decode emitted untrained symbol {:?}",
            c
        );
    }
});
