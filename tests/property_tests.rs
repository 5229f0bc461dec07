use ciphercat::cipher::{Affine, Atbash, Caesar, Morse, Substitution, TextCipher, Transposition, Vigenere};
use ciphercat::config::ALPHABET;
use proptest::prelude::*;

// Strategy for printable ASCII messages, punctuation and spaces included
fn messages() -> impl Strategy<Value = String> {
    "[ -~]{0,64}"
}

// Strategy for non-empty alphabetic keywords
fn keywords() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,12}"
}

// Strategy for keys that are permutations of the alphabet
fn permutation_keys() -> impl Strategy<Value = String> {
    Just(ALPHABET.chars().collect::<Vec<char>>()).prop_shuffle().prop_map(|letters| letters.into_iter().collect::<String>())
}

// Strategy for messages the Morse table covers with no spaces
fn morse_messages() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{0,32}"
}

proptest! {
    #[test]
    fn caesar_roundtrip(message in messages(), shift in any::<i64>()) {
        let cipher = Caesar::new(shift);
        prop_assert_eq!(cipher.decrypt(&cipher.encrypt(&message)), message);
    }

    #[test]
    fn caesar_keeps_non_letters(message in messages(), shift in any::<i64>()) {
        let encrypted = Caesar::new(shift).encrypt(&message);
        for (before, after) in message.chars().zip(encrypted.chars()) {
            if !before.is_ascii_alphabetic() {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn vigenere_roundtrip(message in messages(), key in keywords()) {
        let cipher = Vigenere::new(&key).unwrap();
        prop_assert_eq!(cipher.decrypt(&cipher.encrypt(&message)), message);
    }

    #[test]
    fn substitution_roundtrip_uppercases(message in messages(), key in permutation_keys()) {
        let cipher = Substitution::new(&key).unwrap();
        prop_assert_eq!(cipher.decrypt(&cipher.encrypt(&message)), message.to_ascii_uppercase());
    }

    #[test]
    fn affine_roundtrip(message in messages(), shift in any::<i64>()) {
        let cipher = Affine::new(shift);
        prop_assert_eq!(cipher.decrypt(&cipher.encrypt(&message)), message);
    }

    #[test]
    fn affine_coprime_multipliers_roundtrip(message in messages(), multiplier in prop::sample::select(vec![1_i64, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25]), shift in any::<i64>()) {
        let cipher = Affine::with_multiplier(multiplier, shift).unwrap();
        prop_assert_eq!(cipher.decrypt(&cipher.encrypt(&message)), message);
    }

    #[test]
    fn transposition_roundtrip_pads(message in messages(), key in keywords()) {
        let cipher = Transposition::new(&key).unwrap();
        let width = message.len().next_multiple_of(key.len());
        prop_assert_eq!(cipher.decrypt(&cipher.encrypt(&message)), format!("{message:<width$}"));
    }

    #[test]
    fn transposition_preserves_characters(message in messages(), key in keywords()) {
        let encrypted = Transposition::new(&key).unwrap().encrypt(&message);
        let mut before: Vec<char> = message.chars().collect();
        let mut after: Vec<char> = encrypted.chars().filter(|c| *c != ' ').collect();
        before.retain(|c| *c != ' ');
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn atbash_is_self_inverse(message in messages()) {
        prop_assert_eq!(Atbash.encrypt(&Atbash.encrypt(&message)), message.to_ascii_uppercase());
    }

    #[test]
    fn morse_roundtrip_without_spaces(message in morse_messages()) {
        prop_assert_eq!(Morse::decode(&Morse::encode(&message)), message.to_ascii_uppercase());
    }

    #[test]
    fn morse_never_fails(message in "\\PC{0,32}") {
        let decoded = Morse::decode(&Morse::encode(&message));
        prop_assert_eq!(decoded.is_empty(), message.is_empty());
    }
}
