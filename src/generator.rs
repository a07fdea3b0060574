use rand::seq::SliceRandom;
use rand::Rng;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>?";

/// Random password of `length` characters.
///
/// When the length allows it, at least one character of each class is included.
pub fn generate_password(length: usize) -> String {
    let classes = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS];
    let alphabet: Vec<u8> = classes.concat();
    let mut rng = rand::thread_rng();

    let mut chars: Vec<u8> = Vec::with_capacity(length);
    if length >= classes.len() {
        for class in classes {
            chars.push(class[rng.gen_range(0..class.len())]);
        }
    }
    while chars.len() < length {
        chars.push(alphabet[rng.gen_range(0..alphabet.len())]);
    }
    chars.shuffle(&mut rng);

    chars.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_password_length() {
        assert_eq!(generate_password(0), "");
        assert_eq!(generate_password(3).len(), 3);
        assert_eq!(generate_password(32).len(), 32);
    }

    #[test]
    fn test_generate_password_covers_all_classes() {
        let password = generate_password(12);
        assert!(password.bytes().any(|c| LOWERCASE.contains(&c)));
        assert!(password.bytes().any(|c| UPPERCASE.contains(&c)));
        assert!(password.bytes().any(|c| DIGITS.contains(&c)));
        assert!(password.bytes().any(|c| SYMBOLS.contains(&c)));
    }

    #[test]
    fn test_generate_password_is_random() {
        assert_ne!(generate_password(24), generate_password(24));
    }
}
