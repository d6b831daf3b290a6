use flipstrings::mem::memrev;
use flipstrings::str::{strlen, strnlen};
use flipstrings::strid::strid;
use flipstrings::strrev::strrev;
use proptest::prelude::*;

/// Nul-free data, a terminator, then arbitrary trailing bytes.
fn terminated_buffer() -> impl Strategy<Value = Vec<u8>> {
    (
        proptest::collection::vec(1u8..=255, 0..96),
        proptest::collection::vec(any::<u8>(), 0..32),
    )
        .prop_map(|(data, suffix)| {
            let mut buf = data;
            buf.push(0);
            buf.extend_from_slice(&suffix);
            buf
        })
}

proptest! {
    #[test]
    fn strlen_finds_first_zero(buf in proptest::collection::vec(any::<u8>(), 0..128)) {
        let expected = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
        prop_assert_eq!(strlen(&buf), expected);
    }

    #[test]
    fn strlen_has_no_side_effects(buf in terminated_buffer()) {
        let before = buf.clone();
        let first = strlen(&buf);
        let second = strlen(&buf);
        prop_assert_eq!(first, second, "repeated scans must agree");
        prop_assert_eq!(buf, before, "scan must not mutate the buffer");
    }

    #[test]
    fn strnlen_caps_at_maxlen(buf in terminated_buffer(), maxlen in 0usize..160) {
        let len = strlen(&buf);
        prop_assert_eq!(strnlen(&buf, maxlen), len.min(maxlen));
    }

    #[test]
    fn strrev_mirrors_data_region(mut buf in terminated_buffer()) {
        let before = buf.clone();
        let len = strrev(&mut buf);

        prop_assert_eq!(len, strlen(&before));
        for i in 0..len {
            prop_assert_eq!(buf[i], before[len - 1 - i], "mirror failed at index {}", i);
        }
        prop_assert_eq!(&buf[len..], &before[len..], "terminator or suffix moved");
    }

    #[test]
    fn strrev_is_an_involution(mut buf in terminated_buffer()) {
        let original = buf.clone();
        strrev(&mut buf);
        strrev(&mut buf);
        prop_assert_eq!(buf, original);
    }

    #[test]
    fn strid_is_observably_inert(mut buf in terminated_buffer()) {
        let before = buf.clone();
        let len = strid(&mut buf);

        prop_assert_eq!(len, strlen(&before));
        prop_assert_eq!(buf, before);
    }

    #[test]
    fn memrev_matches_std_reverse(mut buf in proptest::collection::vec(any::<u8>(), 0..300)) {
        let mut expected = buf.clone();
        expected.reverse();
        memrev(&mut buf);
        prop_assert_eq!(buf, expected);
    }
}
