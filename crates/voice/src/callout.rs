//! Callout phrases for drawn numbers.

const ONES: [&str; 20] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// English words for 1..=99 ("forty two"); anything else comes back as digits.
pub fn number_to_words(number: u8) -> String {
    match number {
        1..=19 => ONES[number as usize].to_string(),
        20..=99 => {
            let tens = TENS[(number / 10) as usize];
            match number % 10 {
                0 => tens.to_string(),
                ones => format!("{} {}", tens, ONES[ones as usize]),
            }
        }
        _ => number.to_string(),
    }
}

/// Traditional phrase for the numbers that have one.
pub fn traditional_phrase(number: u8) -> Option<&'static str> {
    let phrase = match number {
        1 => "Kelly's Eye, number one",
        2 => "One little duck, number two",
        3 => "Cup of tea, number three",
        4 => "Knock at the door, number four",
        5 => "Man alive, number five",
        6 => "Half a dozen, number six",
        7 => "Lucky seven",
        8 => "Garden gate, number eight",
        9 => "Doctor's orders, number nine",
        10 => "Uncle's den, number ten",
        11 => "Legs eleven",
        12 => "One dozen, number twelve",
        13 => "Unlucky for some, thirteen",
        16 => "Sweet sixteen",
        18 => "Coming of age, eighteen",
        21 => "Key of the door, twenty one",
        22 => "Two little ducks, twenty two",
        25 => "Quarter of a century, twenty five",
        30 => "Dirty Gertie, thirty",
        33 => "Dirty knees, thirty three",
        40 => "Life begins at forty",
        44 => "Droopy drawers, forty four",
        50 => "Half a century, fifty",
        55 => "Snakes alive, fifty five",
        66 => "Clickety click, sixty six",
        77 => "Sunset strip, seventy seven",
        88 => "Two fat ladies, eighty eight",
        90 => "Top of the shop, ninety",
        _ => return None,
    };
    Some(phrase)
}

/// The line read out for a drawn number.
pub fn callout(number: u8) -> String {
    match traditional_phrase(number) {
        Some(phrase) => phrase.to_string(),
        None => format!("Number {}", number_to_words(number)),
    }
}
