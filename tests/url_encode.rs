use serial_utils::utils::{percent_encode, url_decode, url_encode};

fn form_decode(encoded: &str) -> String {
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(&format!("v={}", encoded)).unwrap();
    assert_eq!(pairs.len(), 1);
    pairs[0].1.clone()
}

#[test]
fn test_known_encodings() {
    assert_eq!(url_encode(b""), "");
    assert_eq!(url_encode(b"abc123"), "abc123");
    assert_eq!(url_encode(b"a b"), "a%20b");
    assert_eq!(url_encode(b"100% sure"), "100%25%20sure");
}

#[test]
fn test_standard_decoder_round_trip() {
    let samples = [
        "hello world",
        "100% sure",
        "a+b=c&d",
        "key=value;other=1/2?x#frag",
        "tilde~dash-dot.under_score",
        "ünïcödé ✓",
    ];

    for s in samples {
        let encoded = url_encode(s.as_bytes());
        assert_eq!(form_decode(&encoded), s, "encoded as {}", encoded);
        assert_eq!(url_decode(&encoded).unwrap(), s.as_bytes());
    }
}

#[test]
fn test_output_alphabet_and_length_bounds() {
    let input: Vec<u8> = (1..=255u8).cycle().take(1000).collect();
    let encoded = url_encode(&input);

    assert!(encoded.len() >= input.len());
    assert!(encoded.len() <= input.len() * 3);
    assert!(encoded.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'%'));
    for escape in encoded.split('%').skip(1) {
        let digits = &escape[..2];
        assert!(digits.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
    }
    assert_eq!(url_decode(&encoded).unwrap(), input);
}

#[test]
fn test_escapes_use_lowercase_hex() {
    let encoded = url_encode(&[0xAB, 0xCD, 0xEF]);
    assert_eq!(encoded, "%ab%cd%ef");
}

#[test]
fn test_lazy_encoder_matches_eager() {
    let input = b"GET /search?q=rust serial";
    let lazy: String = percent_encode(input).collect();
    assert_eq!(lazy, url_encode(input));
}
