use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rupee sign used on receipts, exports and emails
pub const RUPEE: &str = "₹";

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];
const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const THOUSAND: u64 = 1_000;
const LAKH: u64 = 100_000;
const CRORE: u64 = 10_000_000;

/// Formats an amount the way the en-IN locale does by default:
/// Indian digit grouping, up to 3 fraction digits, trailing zeros dropped.
///
/// `format_inr(dec!(6000))` is `"6,000"`, `format_inr(dec!(1234567.5))` is `"12,34,567.5"`.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    group_formatted(&rounded.to_string())
}

/// Formats an amount with exactly `scale` fraction digits and Indian grouping
pub fn format_inr_fixed(amount: Decimal, scale: u32) -> String {
    let rounded = amount.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    group_formatted(&format!("{:.*}", scale as usize, rounded))
}

/// Formats a floating amount with 2 fraction digits and Indian grouping.
///
/// Used for the GST figures, which are computed in double precision.
pub fn format_inr_f64(amount: f64) -> String {
    group_formatted(&format!("{:.2}", amount))
}

/// Applies Indian digit grouping to an already formatted plain number
/// (`-?digits(.digits)?`): last three digits, then groups of two.
fn group_formatted(plain: &str) -> String {
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = group_indian_digits(integer);
    if let Some(frac) = fraction {
        grouped.push('.');
        grouped.push_str(frac);
    }
    format!("{}{}", sign, grouped)
}

fn group_indian_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}

/// Renders an amount in words on the Indian scale (Hundred, Thousand, Lakh, Crore).
///
/// The fractional part is truncated. Anything below one rupee renders as `"Zero"`;
/// every other amount carries the `" Rupees only"` suffix.
pub fn amount_in_words(amount: Decimal) -> String {
    let whole = amount.trunc().to_u64().unwrap_or(0);
    if whole == 0 {
        return "Zero".to_string();
    }
    format!("{} Rupees only", number_to_words(whole))
}

fn number_to_words(n: u64) -> String {
    match n {
        0 => String::new(),
        1..=9 => ONES[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        20..=99 => {
            let mut words = TENS[(n / 10) as usize].to_string();
            if n % 10 != 0 {
                words.push(' ');
                words.push_str(ONES[(n % 10) as usize]);
            }
            words
        }
        100..=999 => {
            let mut words = format!("{} Hundred", ONES[(n / 100) as usize]);
            if n % 100 != 0 {
                words.push_str(" and ");
                words.push_str(&number_to_words(n % 100));
            }
            words
        }
        _ if n < LAKH => scaled_words(n, THOUSAND, "Thousand"),
        _ if n < CRORE => scaled_words(n, LAKH, "Lakh"),
        _ => scaled_words(n, CRORE, "Crore"),
    }
}

fn scaled_words(n: u64, unit: u64, name: &str) -> String {
    let mut words = format!("{} {}", number_to_words(n / unit), name);
    if n % unit != 0 {
        words.push(' ');
        words.push_str(&number_to_words(n % unit));
    }
    words
}
