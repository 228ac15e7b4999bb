/// Property-based tests using proptest
/// Tests invariants that should hold for all inputs
use proptest::prelude::*;
use rust_cep_race::cep::Cep;
use rust_cep_race::formatter::body_to_json;
use rust_cep_race::models::{BrasilApiAddress, ViaCepAddress};

// Property: Decoding should never panic, failures yield an empty string
proptest! {
    #[test]
    fn decoding_arbitrary_bytes_never_panics(body in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _ = body_to_json::<BrasilApiAddress>(Some(&body));
        let _ = body_to_json::<ViaCepAddress>(Some(&body));
    }

    #[test]
    fn decoded_output_reparses_to_same_record(
        cep in "\\PC*",
        state in "[A-Z]{2}",
        city in "\\PC*",
        street in "\\PC*"
    ) {
        let address = BrasilApiAddress {
            cep,
            state,
            city,
            neighborhood: String::new(),
            street,
            service: "open-cep".to_string(),
        };
        let body = serde_json::to_vec(&address).unwrap();

        let json = body_to_json::<BrasilApiAddress>(Some(&body));
        let reparsed: BrasilApiAddress = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(reparsed, address);
    }
}

// Property: CEP parsing should never panic
proptest! {
    #[test]
    fn cep_parsing_never_panics(raw in "\\PC*") {
        let _ = Cep::parse(&raw);
    }

    #[test]
    fn eight_digit_ceps_normalize(prefix in "[0-9]{5}", suffix in "[0-9]{3}", hyphen in proptest::bool::ANY) {
        let raw = if hyphen {
            format!("{}-{}", prefix, suffix)
        } else {
            format!("{}{}", prefix, suffix)
        };
        let cep = Cep::parse(&raw).unwrap();
        prop_assert_eq!(cep.as_str(), format!("{}{}", prefix, suffix));
        prop_assert_eq!(cep.as_str().len(), 8);
    }
}
