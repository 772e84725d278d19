use bitfield::{BitOrder, Bitfield, BitfieldError, bit_mask, reverse_bits};
use proptest::prelude::*;

fn bit_order() -> impl Strategy<Value = BitOrder> {
    prop_oneof![Just(BitOrder::Big), Just(BitOrder::Little)]
}

fn bitfield() -> impl Strategy<Value = Bitfield> {
    prop::collection::vec(any::<bool>(), 0..300)
        .prop_map(|list| Bitfield::from_bool_list(&list, list.len(), BitOrder::Big))
}

proptest! {
    #[test]
    fn set_then_remove(length in 1usize..256, seed in any::<usize>()) {
        let index = seed % length;
        let mut field = Bitfield::new(length);

        field.set_bit(index).unwrap();
        prop_assert!(field.is_bit(index).unwrap());
        prop_assert_eq!(field.count_ones(), 1);

        field.remove_bit(index).unwrap();
        prop_assert!(!field.is_bit(index).unwrap());
        prop_assert_eq!(field.count_ones(), 0);
    }

    #[test]
    fn out_of_range_is_rejected(length in 0usize..256, extra in 0usize..64) {
        let mut field = Bitfield::new(length);
        let index = length + extra;

        prop_assert_eq!(
            field.set_bit(index).unwrap_err(),
            BitfieldError::IndexOutOfRange { index, length }
        );
        prop_assert_eq!(field.len(), length);
    }

    #[test]
    fn bit_mask_is_power_of_two(index in 0usize..128) {
        prop_assert_eq!(bit_mask(index).unwrap(), 2u128.pow(index as u32));
    }

    #[test]
    fn bytes_round_trip(field in bitfield(), order in bit_order()) {
        let bytes = field.to_bytes(order);
        prop_assert_eq!(bytes.len(), field.len().div_ceil(8));
        prop_assert_eq!(Bitfield::from_bytes(&bytes, field.len(), order), field);
    }

    #[test]
    fn bool_list_round_trip(field in bitfield(), order in bit_order()) {
        let list = field.to_bool_list(order);
        prop_assert_eq!(list.len(), field.len());
        prop_assert_eq!(Bitfield::from_bool_list(&list, field.len(), order), field);
    }

    #[test]
    fn little_bytes_are_swapped_big_bytes(field in bitfield()) {
        let width = field.byte_length() * 8;
        prop_assert_eq!(
            field.to_bytes(BitOrder::Little),
            field.swapped(Some(width)).to_bytes(BitOrder::Big)
        );
    }

    #[test]
    fn big_bytes_match_integer(value in any::<u64>()) {
        let field = Bitfield::with_value(64, value as u128).unwrap();
        prop_assert_eq!(field.to_bytes(BitOrder::Big), value.to_be_bytes().to_vec());
    }

    #[test]
    fn reverse_bits_is_involution(value in any::<u128>(), pad in 0usize..8) {
        let width = (128 - value.leading_zeros() as usize + pad).min(128);
        let reversed = reverse_bits(value, Some(width)).unwrap();
        prop_assert_eq!(reverse_bits(reversed, Some(width)).unwrap(), value);
    }

    #[test]
    fn reverse_bits_matches_swapped(value in any::<u64>(), width in 64usize..=128) {
        let field = Bitfield::with_value(64, value as u128).unwrap();
        prop_assert_eq!(
            field.swapped(Some(width)).value().unwrap(),
            reverse_bits(value as u128, Some(width)).unwrap()
        );
    }
}

#[test]
fn from_bool_list_widens_to_input() {
    let field = Bitfield::from_bool_list(&[true, true, true, true, true], 3, BitOrder::Big);
    assert_eq!(field.len(), 5);
}
