#[cfg(test)]
mod cli_tests {
    use super::super::{encode_arguments, ArgsError, CliConfig};
    use crate::encoding::encoding_error::EncodingError;
    use crate::program_config::integer_literal::LiteralError;

    fn args(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    fn encode_args(cli_args: &[&str]) -> Vec<u8> {
        let config = CliConfig::build(&args(cli_args)).unwrap();
        encode_arguments(&config).unwrap()
    }

    #[test]
    fn decimal_value() {
        assert_eq!(encode_args(&["encode", "5", "1337"]), vec![31, 154, 10]);
    }

    #[test]
    fn hex_value_matches_decimal() {
        assert_eq!(
            encode_args(&["encode", "5", "0x539"]),
            encode_args(&["encode", "5", "1337"])
        );
    }

    #[test]
    fn value_fitting_in_prefix() {
        assert_eq!(encode_args(&["encode", "5", "10"]), vec![10]);
    }

    #[test]
    fn one_argument_prints_usage() {
        match CliConfig::build(&args(&["./encode", "5"])) {
            Err(ArgsError::Usage(usage)) => {
                assert_eq!(usage, "usage: ./encode prefix_bits number")
            }
            other => panic!("expected usage, got {:?}", other),
        }
    }

    #[test]
    fn no_arguments_prints_usage() {
        assert!(matches!(
            CliConfig::build(&args(&["encode"])),
            Err(ArgsError::Usage(_))
        ));
    }

    #[test]
    fn extra_argument_is_a_clap_error() {
        assert!(matches!(
            CliConfig::build(&args(&["encode", "5", "10", "11"])),
            Err(ArgsError::Clap(_))
        ));
    }

    #[test]
    fn negative_value_is_rejected() {
        let config = CliConfig::build(&args(&["encode", "5", "-1"])).unwrap();
        let err = encode_arguments(&config).unwrap_err();
        assert_eq!(
            err.downcast_ref::<LiteralError>(),
            Some(&LiteralError::Negative("-1".into()))
        );
    }

    #[test]
    fn invalid_prefix_width_is_rejected() {
        for bits in ["0", "9", "-2"] {
            let config = CliConfig::build(&args(&["encode", bits, "10"])).unwrap();
            let err = encode_arguments(&config).unwrap_err();
            assert_eq!(
                err.downcast_ref::<EncodingError>(),
                Some(&EncodingError::InvalidPrefixWidth(bits.parse().unwrap()))
            );
        }
    }

    #[test]
    fn malformed_value_is_rejected() {
        let config = CliConfig::build(&args(&["encode", "5", "lots"])).unwrap();
        let err = encode_arguments(&config).unwrap_err();
        assert_eq!(err.to_string(), "Invalid integer literal: \"lots\"");
    }

    #[test]
    fn negative_hex_value_reaches_literal_parser() {
        let config = CliConfig::build(&args(&["encode", "5", "-0x10"])).unwrap();
        let err = encode_arguments(&config).unwrap_err();
        assert_eq!(
            err.downcast_ref::<LiteralError>(),
            Some(&LiteralError::Negative("-0x10".into()))
        );
    }

    #[test]
    fn negative_value_with_separator_reaches_literal_parser() {
        let config = CliConfig::build(&args(&["encode", "5", "-1_0"])).unwrap();
        let err = encode_arguments(&config).unwrap_err();
        assert_eq!(
            err.downcast_ref::<LiteralError>(),
            Some(&LiteralError::Negative("-1_0".into()))
        );
    }

    #[test]
    fn negative_hex_zero_is_zero() {
        assert_eq!(encode_args(&["encode", "5", "-0x0"]), vec![0]);
    }
}
