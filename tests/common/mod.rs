#![allow(dead_code)]

/// Multi-sentence paragraph with published reference fingerprints.
pub const REFERENCE_TEXT: &str = "This is for generating a fingerprint. We will have more than \
     one sentence in the text. Text can be such that we are able to form n-grams out of it. \
     I think this much of text should be sufficient. OK, this is last sentence!";

pub const REFERENCE_CHAR_FINGERPRINT: [u32; 55] = [
    18, 19, 138, 144, 179, 268, 325, 493, 551, 640, 765, 767, 769, 882, 930, 934, 1053, 1109,
    1180, 1188, 1208, 1320, 1456, 1469, 1475, 1522, 1535, 1659, 1689, 1731, 1765, 1766, 1773,
    1774, 1787, 1813, 1926, 1951, 2102, 2145, 2244, 2362, 2406, 3107, 3240, 3263, 3266, 3312,
    3624, 3836, 4272, 4539, 4663, 4876, 4917,
];

pub const REFERENCE_WORD_FINGERPRINT: [u32; 13] = [
    27, 1200, 1431, 1698, 1722, 1879, 2005, 2205, 3023, 4198, 5184, 5714, 5826,
];
