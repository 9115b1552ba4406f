use factor_console_wasm::format_utils::{format_price, format_size};

#[test]
fn sub_hundred_prices_show_three_decimals() {
    insta::assert_snapshot!(format_price(77.18), @"77.180");
    insta::assert_snapshot!(format_price(1.0831), @"1.083");
    insta::assert_snapshot!(format_price(24.38), @"24.380");
}

#[test]
fn sub_thousand_prices_show_two_decimals() {
    insta::assert_snapshot!(format_price(120.156), @"120.16");
    insta::assert_snapshot!(format_price(110.203), @"110.20");
    insta::assert_snapshot!(format_price(999.0), @"999.00");
}

#[test]
fn large_prices_are_grouped_with_one_or_two_decimals() {
    insta::assert_snapshot!(format_price(18943.25), @"18,943.25");
    insta::assert_snapshot!(format_price(1956.8), @"1,956.8");
    insta::assert_snapshot!(format_price(5211.5), @"5,211.5");
    insta::assert_snapshot!(format_price(1000.0), @"1,000.0");
    insta::assert_snapshot!(format_price(1234567.891), @"1,234,567.89");
}

#[test]
fn sizes_use_thousands_separators() {
    assert_eq!(format_size(12), "12");
    assert_eq!(format_size(999), "999");
    assert_eq!(format_size(12_000), "12,000");
    assert_eq!(format_size(1_234_567), "1,234,567");
}

#[test]
fn exact_halfway_prices_round_up() {
    insta::assert_snapshot!(format_price(0.0625), @"0.063");
    insta::assert_snapshot!(format_price(100.125), @"100.13");
    insta::assert_snapshot!(format_price(1000.125), @"1,000.13");
    insta::assert_snapshot!(format_price(2048.375), @"2,048.38");
}
