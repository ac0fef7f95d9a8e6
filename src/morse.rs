/// International Morse code for letters and digits, using `·` for dits.
const MORSE_TABLE: [(char, &str); 36] = [
    ('a', "·-"),
    ('b', "-···"),
    ('c', "-·-·"),
    ('d', "-··"),
    ('e', "·"),
    ('f', "··-·"),
    ('g', "--·"),
    ('h', "····"),
    ('i', "··"),
    ('j', "·---"),
    ('k', "-·-"),
    ('l', "·-··"),
    ('m', "--"),
    ('n', "-·"),
    ('o', "---"),
    ('p', "·--·"),
    ('q', "--·-"),
    ('r', "·-·"),
    ('s', "···"),
    ('t', "-"),
    ('u', "··-"),
    ('v', "···-"),
    ('w', "·--"),
    ('x', "-··-"),
    ('y', "-·--"),
    ('z', "--··"),
    ('1', "·----"),
    ('2', "··---"),
    ('3', "···--"),
    ('4', "····-"),
    ('5', "·····"),
    ('6', "-····"),
    ('7', "--···"),
    ('8', "---··"),
    ('9', "----·"),
    ('0', "-----"),
];

/// Morse code for `ch`, ignoring case.
pub fn to_morse(ch: char) -> Option<&'static str> {
    let ch = ch.to_ascii_lowercase();
    MORSE_TABLE
        .iter()
        .find(|(c, _)| *c == ch)
        .map(|(_, code)| *code)
}

/// Character for a Morse `code`; letters come back lower-case.
pub fn from_morse(code: &str) -> Option<char> {
    MORSE_TABLE
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(ch, _)| *ch)
}

/// Encodes every character of `text`, joined by `separator`. Characters
/// without a code become `?`.
pub fn encode(text: &str, separator: &str) -> String {
    text.chars()
        .map(|ch| to_morse(ch).unwrap_or("?"))
        .collect::<Vec<_>>()
        .join(separator)
}
